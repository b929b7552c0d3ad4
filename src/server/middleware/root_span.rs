//! Root span for per-request tracing

use super::REQUEST_ID_HEADER;
use actix_web::Error;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use tracing::Span;
use tracing_actix_web::{DefaultRootSpanBuilder, RootSpanBuilder};

/// Root span whose `request_id` is the `x-request-id` echoed to the client
///
/// [`RequestIdMiddleware`](super::RequestIdMiddleware) must wrap
/// `TracingLogger` so the header is set before the span is opened.
pub struct RelayRootSpanBuilder;

impl RootSpanBuilder for RelayRootSpanBuilder {
    fn on_request_start(request: &ServiceRequest) -> Span {
        tracing::info_span!(
            "HTTP request",
            http.method = %request.method(),
            http.target = %request.uri(),
            http.status_code = tracing::field::Empty,
            request_id = %span_request_id(request),
            exception.message = tracing::field::Empty,
            exception.details = tracing::field::Empty,
        )
    }

    fn on_request_end<B: MessageBody>(span: Span, outcome: &Result<ServiceResponse<B>, Error>) {
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}

/// The request ID recorded on the root span
pub fn span_request_id(request: &ServiceRequest) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}
