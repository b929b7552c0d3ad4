//! Concurrency integration tests
//!
//! Requests in flight at the same time must not see each other's data.

#[cfg(test)]
mod tests {
    use crate::common::{FakeAzure, app_state, relay_config};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use azure_relay::HttpServer;
    use futures::future::join_all;
    use serde_json::{Value, json};
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, ResponseTemplate};

    use crate::common::fixtures::{chat_completion, image_generation};
    use crate::common::upstream::{CHAT_PATH, IMAGE_PATH};

    fn user_body(id: usize) -> Value {
        json!({"messages": [{"role": "user", "content": format!("request-{}", id)}]})
    }

    #[actix_web::test]
    async fn test_concurrent_chat_requests_do_not_interfere() {
        let upstream = FakeAzure::start().await;

        // Each request gets an answer keyed to its own message; later ids
        // answer sooner so responses complete out of order
        for id in 0..8usize {
            Mock::given(method("POST"))
                .and(path(CHAT_PATH))
                .and(body_partial_json(user_body(id)))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(chat_completion(&format!(
                            "```json\n{{\"id\": {}}}\n```",
                            id
                        )))
                        .set_delay(Duration::from_millis(((8 - id) * 15) as u64)),
                )
                .expect(1)
                .mount(&upstream.server)
                .await;
        }

        let app = test::init_service(HttpServer::create_app(app_state(relay_config(
            &upstream.uri(),
        ))))
        .await;

        let calls = (0..8usize).map(|id| {
            let req = test::TestRequest::post()
                .uri("/api/generate")
                .set_json(user_body(id))
                .to_request();
            let app = &app;
            async move {
                let resp = test::call_service(app, req).await;
                assert_eq!(resp.status(), StatusCode::OK);
                let body: Value = test::read_body_json(resp).await;
                (id, body)
            }
        });

        for (id, body) in join_all(calls).await {
            assert_eq!(body, json!({"id": id}));
        }

        upstream.server.verify().await;
    }

    #[actix_web::test]
    async fn test_concurrent_image_requests_do_not_interfere() {
        let upstream = FakeAzure::start().await;

        for id in 0..6usize {
            let url = format!("https://img.example/{}.png", id);
            Mock::given(method("POST"))
                .and(path(IMAGE_PATH))
                .and(body_partial_json(json!({"prompt": format!("prompt-{}", id)})))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(image_generation(&[url.as_str()]))
                        .set_delay(Duration::from_millis(((6 - id) * 15) as u64)),
                )
                .expect(1)
                .mount(&upstream.server)
                .await;
        }

        let app = test::init_service(HttpServer::create_app(app_state(relay_config(
            &upstream.uri(),
        ))))
        .await;

        let calls = (0..6usize).map(|id| {
            let req = test::TestRequest::post()
                .uri("/api/dalle/image")
                .set_json(json!({"prompt": format!("prompt-{}", id)}))
                .to_request();
            let app = &app;
            async move {
                let resp = test::call_service(app, req).await;
                assert_eq!(resp.status(), StatusCode::OK);
                let body: Value = test::read_body_json(resp).await;
                (id, body)
            }
        });

        for (id, body) in join_all(calls).await {
            assert_eq!(
                body,
                json!({"imagePath": format!("https://img.example/{}.png", id)})
            );
        }

        upstream.server.verify().await;
    }

    #[actix_web::test]
    async fn test_failure_is_isolated_to_its_request() {
        let upstream = FakeAzure::start().await;

        Mock::given(method("POST"))
            .and(path(CHAT_PATH))
            .and(body_partial_json(user_body(0)))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion("not json")))
            .mount(&upstream.server)
            .await;
        Mock::given(method("POST"))
            .and(path(CHAT_PATH))
            .and(body_partial_json(user_body(1)))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion("{\"ok\": true}")))
            .mount(&upstream.server)
            .await;

        let app = test::init_service(HttpServer::create_app(app_state(relay_config(
            &upstream.uri(),
        ))))
        .await;

        let bad = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(user_body(0))
            .to_request();
        let good = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(user_body(1))
            .to_request();

        let (bad, good) =
            futures::join!(test::call_service(&app, bad), test::call_service(&app, good));

        assert_eq!(bad.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(good.status(), StatusCode::OK);
        let body: Value = test::read_body_json(good).await;
        assert_eq!(body, json!({"ok": true}));
    }
}
