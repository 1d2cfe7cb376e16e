//! End-to-end tests of the reqwest-backed client against a local mock server.

use textmagic::{Credentials, Params, TextMagicClient, TextMagicError};
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> TextMagicClient {
    TextMagicClient::builder(Credentials::new("ada", "secret-key").unwrap())
        .base_url(format!("{}/api/v2", server.uri()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn ping_sends_credential_and_fixed_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/ping"))
        .and(header("x-tm-username", "ada"))
        .and(header("x-tm-key", "secret-key"))
        .and(header("accept-charset", "utf-8"))
        .and(header("accept-language", "en-us"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ping": "pong"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.ping().await.unwrap();

    let received = server.received_requests().await.unwrap();
    for name in ["x-tm-username", "x-tm-key", "accept-charset", "accept-language"] {
        assert_eq!(received[0].headers.get_all(name).iter().count(), 1, "{name}");
    }
}

#[tokio::test]
async fn credentials_reach_the_wire_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/user"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"id": 7, "username": "ada"}"#),
        )
        .mount(&server)
        .await;

    let credentials = Credentials::new("Ada.Lovelace", "K3y-With-Case").unwrap();
    let client = TextMagicClient::builder(credentials)
        .base_url(format!("{}/api/v2", server.uri()))
        .build()
        .unwrap();
    client.get_user().await.unwrap();

    let received = server.received_requests().await.unwrap();
    let headers = &received[0].headers;
    assert_eq!(headers.get("x-tm-username").unwrap(), "Ada.Lovelace");
    assert_eq!(headers.get("x-tm-key").unwrap(), "K3y-With-Case");
}

#[tokio::test]
async fn ping_with_bad_credentials_returns_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/ping"))
        .respond_with(ResponseTemplate::new(401).set_body_string(
            r#"{"code": 401, "message": "Unauthorized. Please check your credentials.", "errors": []}"#,
        ))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.ping().await.unwrap_err();
    assert!(err.is_auth_error());
    let api = err.api_error().unwrap();
    assert_eq!(api.code, 401);
    assert!(api.errors.is_empty());
}

#[tokio::test]
async fn create_contact_posts_form_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/contacts"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("firstName=Ada&lists=1%2C2&phone=447860021130"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_string(r#"{"id": 42, "href": "/api/v2/contacts/42"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let params = Params::with("phone", "447860021130")
        .unwrap()
        .and("firstName", "Ada")
        .unwrap()
        .and("lists", vec![1_u64, 2])
        .unwrap();
    let created = client.create_contact(&params).await.unwrap();
    assert_eq!(created.id, 42);
    assert_eq!(created.href, "/api/v2/contacts/42");
}

#[tokio::test]
async fn search_sends_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/contacts/search"))
        .and(query_param("query", "Ada"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"page": 2, "limit": 10, "pageCount": 2, "resources": [{"id": 42, "firstName": "Ada", "phone": "447860021130"}]}"#,
        ))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let params = Params::with("query", "Ada").unwrap().and("page", 2_u32).unwrap();
    let page = client.search_contact_list(Some(&params)).await.unwrap();
    assert!(page.is_last());
    assert_eq!(page.resources[0].first_name.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn delete_requires_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/contacts/42"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/contacts/43"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.delete_contact(42).await.unwrap();
    let err = client.delete_contact(43).await.unwrap_err();
    assert!(matches!(
        err,
        TextMagicError::UnexpectedStatus {
            expected: 204,
            actual: 200
        }
    ));
}

#[tokio::test]
async fn non_document_error_body_maps_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/user"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.get_user().await.unwrap_err();
    assert!(matches!(
        err,
        TextMagicError::HttpStatus { status: 502, body: Some(ref body) } if body == "Bad Gateway"
    ));
}
