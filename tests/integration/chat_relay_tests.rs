//! Chat relay integration tests
//!
//! `POST /api/generate` against the fake upstream: fence stripping, verbatim
//! forwarding and error mapping.

#[cfg(test)]
mod tests {
    use crate::common::upstream::CHAT_PATH;
    use crate::common::{ChatBodyFactory, FakeAzure, app_state, relay_config};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use azure_relay::HttpServer;
    use serde_json::{Value, json};
    use std::time::Duration;

    async fn post_generate(upstream: &FakeAzure, body: Value) -> (StatusCode, Value) {
        let app = test::init_service(HttpServer::create_app(app_state(relay_config(
            &upstream.uri(),
        ))))
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    // ==================== Success ====================

    #[actix_web::test]
    async fn test_fenced_json_returned_unchanged() {
        let upstream = FakeAzure::start().await;
        upstream
            .reply_chat("```json\n{\"title\": \"Pendulum\", \"params\": {\"length\": 2.5}}\n```")
            .await;

        let (status, body) =
            post_generate(&upstream, ChatBodyFactory::simulation("a pendulum")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"title": "Pendulum", "params": {"length": 2.5}}));
    }

    #[actix_web::test]
    async fn test_fences_removed_regardless_of_position() {
        let upstream = FakeAzure::start().await;
        upstream
            .reply_chat("Here you go:```json {\"a\": [1, ```2]} ``````")
            .await;

        let (status, body) = post_generate(&upstream, ChatBodyFactory::simulation("x")).await;

        // Text outside the fences is kept, so this is not valid JSON
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["type"], "parse_error");

        let upstream = FakeAzure::start().await;
        upstream.reply_chat("```json {\"a\": [1, ```2]} ``````").await;
        let (status, body) = post_generate(&upstream, ChatBodyFactory::simulation("x")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"a": [1, 2]}));
    }

    #[actix_web::test]
    async fn test_unfenced_json_accepted() {
        let upstream = FakeAzure::start().await;
        upstream.reply_chat("  [\"orbit\", \"spring\"]  ").await;

        let (status, body) = post_generate(&upstream, ChatBodyFactory::simulation("x")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["orbit", "spring"]));
    }

    // ==================== Outgoing request ====================

    #[actix_web::test]
    async fn test_outgoing_request_carries_model_and_messages() {
        let upstream = FakeAzure::start().await;
        upstream.reply_chat("{}").await;

        let client_body = ChatBodyFactory::simulation("a spring");
        let (status, _) = post_generate(&upstream, client_body.clone()).await;
        assert_eq!(status, StatusCode::OK);

        let requests = upstream.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.path(), CHAT_PATH);
        assert_eq!(requests[0].headers.get("api-key").unwrap(), "test-azure-key");

        let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(sent["model"], "gpt-4");
        assert_eq!(sent["messages"], client_body["messages"]);
        assert_eq!(sent["temperature"], 0.7);
        assert_eq!(sent["max_tokens"], 800);
    }

    #[actix_web::test]
    async fn test_unknown_fields_forwarded_verbatim() {
        let upstream = FakeAzure::start().await;
        upstream.reply_chat("{}").await;

        let (status, _) = post_generate(&upstream, ChatBodyFactory::with_extras()).await;
        assert_eq!(status, StatusCode::OK);

        let sent = upstream.request_bodies().await.remove(0);
        assert_eq!(sent["top_p"], 0.9);
        assert_eq!(sent["response_format"], json!({"type": "json_object"}));
        assert_eq!(sent["messages"][0]["name"], "ada");
    }

    #[actix_web::test]
    async fn test_client_model_is_overridden() {
        let upstream = FakeAzure::start().await;
        upstream.reply_chat("{}").await;

        let mut body = ChatBodyFactory::simulation("x");
        body["model"] = json!("gpt-3.5-turbo");
        post_generate(&upstream, body).await;

        let sent = upstream.request_bodies().await.remove(0);
        assert_eq!(sent["model"], "gpt-4");
    }

    // ==================== Failures ====================

    #[actix_web::test]
    async fn test_invalid_embedded_json_is_parse_error() {
        let upstream = FakeAzure::start().await;
        upstream.reply_chat("```json\n{\"title\": \"Pend\n```").await;

        let (status, body) = post_generate(&upstream, ChatBodyFactory::simulation("x")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to parse model response as JSON");
        assert_eq!(body["type"], "parse_error");
        assert!(body["details"].is_string());
    }

    #[actix_web::test]
    async fn test_plain_text_reply_is_parse_error() {
        let upstream = FakeAzure::start().await;
        upstream.reply_chat("I cannot help with that.").await;

        let (status, body) = post_generate(&upstream, ChatBodyFactory::simulation("x")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["type"], "parse_error");
    }

    #[actix_web::test]
    async fn test_upstream_statuses_forward_details() {
        for status in [401u16, 429, 500] {
            let upstream = FakeAzure::start().await;
            let error_body = json!({
                "error": {"code": status.to_string(), "message": format!("upstream said {}", status)}
            });
            upstream.reply_chat_raw(status, error_body.clone()).await;

            let (relay_status, body) =
                post_generate(&upstream, ChatBodyFactory::simulation("x")).await;

            assert_eq!(relay_status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body["error"], "Failed to generate response");
            assert_eq!(body["type"], "upstream_error");
            assert_eq!(body["details"], error_body);
        }
    }

    #[actix_web::test]
    async fn test_non_json_upstream_error_forwarded_as_text() {
        let upstream = FakeAzure::start().await;
        upstream.reply_chat_text(502, "Bad Gateway").await;

        let (status, body) = post_generate(&upstream, ChatBodyFactory::simulation("x")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["type"], "upstream_error");
        assert_eq!(body["details"], "Bad Gateway");
    }

    #[actix_web::test]
    async fn test_missing_choices_is_upstream_error() {
        let upstream = FakeAzure::start().await;
        upstream.reply_chat_raw(200, json!({"choices": []})).await;

        let (status, body) = post_generate(&upstream, ChatBodyFactory::simulation("x")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to generate response");
        assert_eq!(body["type"], "upstream_error");
    }

    #[actix_web::test]
    async fn test_unreachable_upstream_is_transport_error() {
        // Nothing listens on port 1
        let app = test::init_service(HttpServer::create_app(app_state(relay_config(
            "http://127.0.0.1:1",
        ))))
        .await;
        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(ChatBodyFactory::simulation("x"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["type"], "upstream_error");
        assert!(body["details"].is_string());
    }

    #[actix_web::test]
    async fn test_upstream_timeout_is_transport_error() {
        let upstream = FakeAzure::start().await;
        upstream
            .reply_chat_delayed("{\"late\": true}", Duration::from_millis(1500))
            .await;

        let mut config = relay_config(&upstream.uri());
        config.azure.timeout = Some(Duration::from_millis(200));
        let app = test::init_service(HttpServer::create_app(app_state(config))).await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(ChatBodyFactory::simulation("x"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Failed to generate response");
        assert_eq!(body["type"], "upstream_error");
        assert!(body["details"].as_str().is_some_and(|d| d.contains("timed out")));
    }

    #[actix_web::test]
    async fn test_non_json_success_body_is_transport_error() {
        let upstream = FakeAzure::start().await;
        upstream.reply_chat_text(200, "<html>maintenance</html>").await;

        let (status, body) = post_generate(&upstream, ChatBodyFactory::simulation("x")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to generate response");
        assert_eq!(body["type"], "upstream_error");
        assert!(body["details"].is_string());
    }

    #[actix_web::test]
    async fn test_malformed_client_body_never_reaches_upstream() {
        let upstream = FakeAzure::start().await;
        upstream.reply_chat("{}").await;

        let app = test::init_service(HttpServer::create_app(app_state(relay_config(
            &upstream.uri(),
        ))))
        .await;
        let req = test::TestRequest::post()
            .uri("/api/generate")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["type"], "invalid_request");
        assert!(upstream.requests().await.is_empty());
    }
}
