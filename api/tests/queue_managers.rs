//! Integration tests for the `queue_managers` service.
//!
//! These run the full pipeline against a mock server: parameter assembly,
//! Basic auth, content negotiation and decoding into the typed collection.

use ccb_api::processes::queue_managers::{QueueManagerQuery, QueueManagers};
use ccb_api::{ApiConfig, ApiError, ContentType, Executor};
use url::Url;
use wiremock::matchers::{basic_auth, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const MANAGERS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<queue_managers count="2">
  <queue_manager>
    <id>14</id>
    <name>Ann Lee</name>
    <email>ann@example.org</email>
    <receive_notifications>true</receive_notifications>
  </queue_manager>
  <queue_manager>
    <id>15</id>
    <name>Ben Ortiz</name>
    <receive_notifications>false</receive_notifications>
  </queue_manager>
</queue_managers>"#;

fn executor(server: &MockServer, content_type: ContentType) -> Executor {
    let base_url = Url::parse(&format!("{}/api.php", server.uri())).unwrap();
    Executor::builder(base_url, "church_admin", "s3cret")
        .content_type(content_type)
        .build()
}

#[tokio::test]
async fn lists_managers_for_a_process_as_xml() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api.php"))
        .and(query_param("srv", "queue_managers"))
        .and(query_param("ProcessID", "5"))
        .and(|req: &Request| !req.url.query_pairs().any(|(k, _)| k == "QueueID"))
        .and(basic_auth("church_admin", "s3cret"))
        .and(header("content-type", "application/xml"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(MANAGERS_XML, "application/xml"))
        .expect(1)
        .mount(&server)
        .await;

    let executor = executor(&server, ContentType::Xml);
    let managers = QueueManagers::new(&executor)
        .list(Some(5), None)
        .await
        .unwrap();

    assert_eq!(managers.len(), 2);
    assert_eq!(managers.queue_managers[0].name.as_deref(), Some("Ann Lee"));
    assert_eq!(managers.queue_managers[1].receive_notifications, Some(false));
}

#[tokio::test]
async fn lists_managers_for_a_queue_as_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("srv", "queue_managers"))
        .and(query_param("ProcessID", "5"))
        .and(query_param("QueueID", "12"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"queue_manager": [{"id": 14, "name": "Ann Lee"}]}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let executor = executor(&server, ContentType::Json);
    let query = QueueManagerQuery {
        process_id: Some(5),
        queue_id: Some(12),
    };
    let managers = executor.call::<QueueManagers>(&query).await.unwrap();

    assert_eq!(managers.len(), 1);
    assert_eq!(managers.queue_managers[0].id, Some(14));
}

#[tokio::test]
async fn empty_response_is_an_empty_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let executor = executor(&server, ContentType::Xml);
    let managers = QueueManagers::new(&executor).list(None, None).await.unwrap();
    assert!(managers.is_empty());
}

#[tokio::test]
async fn rejected_credentials_surface_the_status_description() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let executor = executor(&server, ContentType::Json);
    let err = QueueManagers::new(&executor)
        .list(Some(5), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Client(_)));
    assert_eq!(err.status_code(), Some(401));
    assert_eq!(err.to_string(), "Unauthorized");
}

#[tokio::test]
async fn executor_built_from_config() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(basic_auth("from_config", "pw"))
        .and(header("content-type", "application/xml"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(MANAGERS_XML, "application/xml"))
        .mount(&server)
        .await;

    let mut config = ApiConfig::new(&server.uri(), "from_config", "pw").unwrap();
    config.content_type = ContentType::Xml;
    let executor = Executor::new(config);

    let managers = QueueManagers::new(&executor).list(None, None).await.unwrap();
    assert_eq!(managers.len(), 2);
}
