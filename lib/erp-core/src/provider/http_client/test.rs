use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;
use serde::Serialize;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::reqwest_client::ReqwestClient;
use super::{Error, HttpClient, Method, MockHttpClient, RequestBuilder, StatusCode};
use crate::config::core_config::ApiConfig;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Query {
    page: u32,
    sort_by: &'static str,
}

#[test]
fn test_query_is_appended_to_url() {
    let client: Arc<dyn HttpClient> = Arc::new(MockHttpClient::new());

    let builder = RequestBuilder::new(client.clone(), Method::Get, "http://host/products")
        .query(&Query {
            page: 2,
            sort_by: "name",
        })
        .unwrap()
        .query(&[("search", "blue mug")])
        .unwrap();
    assert_eq!(
        builder.url(),
        "http://host/products?page=2&sortBy=name&search=blue+mug"
    );

    let empty: [(&str, &str); 0] = [];
    let builder = RequestBuilder::new(client, Method::Get, "http://host/products")
        .query(&empty)
        .unwrap();
    assert_eq!(builder.url(), "http://host/products");
}

#[tokio::test]
async fn test_send_uses_mocked_transport() {
    let mut client = MockHttpClient::new();
    client
        .expect_send()
        .once()
        .withf(|url, body, _, method| {
            url == "http://host/products/1" && body.is_none() && *method == Method::Delete
        })
        .returning(|url, _, _, method| {
            Ok(super::Response {
                body: b"{}".to_vec(),
                headers: Default::default(),
                status: StatusCode(200),
                request: super::Request {
                    body: None,
                    headers: Default::default(),
                    method,
                    url: url.to_string(),
                },
            })
        });

    let response = RequestBuilder::new(Arc::new(client), Method::Delete, "http://host/products/1")
        .send()
        .await
        .unwrap();
    assert!(response.status.is_success());
}

#[test]
fn test_status_code_classes() {
    assert!(StatusCode(204).is_success());
    assert!(!StatusCode(204).is_error());
    assert!(!StatusCode(302).is_success());
    assert!(!StatusCode(302).is_error());
    assert!(StatusCode(404).is_error());
    assert!(StatusCode(503).is_error());
    assert_eq!(Method::Delete.to_string(), "DELETE");
}

#[tokio::test]
async fn test_reqwest_client_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/products/5"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "name": "Mug" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ReqwestClient::default();
    let response = client
        .put(&format!("{}/products/5", mock_server.uri()))
        .json(json!({ "name": "Mug" }))
        .unwrap()
        .send()
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode(200));
    assert_eq!(
        response.json::<serde_json::Value>().unwrap(),
        json!({ "success": true })
    );
}

#[tokio::test]
async fn test_error_for_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sales"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let response = ReqwestClient::default()
        .get(&format!("{}/sales", mock_server.uri()))
        .query(&[("page", "0")])
        .unwrap()
        .send()
        .await
        .unwrap();

    assert!(matches!(
        response.error_for_status(),
        Err(Error::StatusCodeIsError(StatusCode(503)))
    ));
}

#[tokio::test]
async fn test_from_config_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(header("authorization", "Bearer secret-token"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ApiConfig {
        base_url: mock_server.uri(),
        request_timeout: Duration::from_secs(5),
        access_token: Some(SecretString::from("secret-token".to_string())),
    };

    let response = ReqwestClient::from_config(&config)
        .unwrap()
        .get(&format!("{}/products", mock_server.uri()))
        .send()
        .await
        .unwrap();
    assert!(response.status.is_success());
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let config = ApiConfig {
        base_url: mock_server.uri(),
        request_timeout: Duration::from_millis(50),
        access_token: None,
    };

    let result = ReqwestClient::from_config(&config)
        .unwrap()
        .get(&format!("{}/products", mock_server.uri()))
        .send()
        .await;
    assert!(matches!(result, Err(Error::HttpError(_))));
}
