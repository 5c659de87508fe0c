// Integration tests for CloudDbHttpClient against a mock HTTP server.
// Every request the client emits is asserted on verb, path, headers and body.

use clouddb_client::{Account, CloudDbError, CloudDbHttpClient, EndpointSet};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "T123";

fn test_account() -> Account {
    Account::new("jane", "s3cret-key", "123456")
}

fn endpoints_for(server: &MockServer) -> EndpointSet {
    EndpointSet::new(
        Url::parse(&format!("{}/v1.1/auth", server.uri())).unwrap(),
        Url::parse(&format!("{}/v1.0/123456/", server.uri())).unwrap(),
    )
}

/// Mounts the identity endpoint and returns an authenticated client.
async fn authed_client(server: &MockServer) -> CloudDbHttpClient {
    Mock::given(method("POST"))
        .and(path("/v1.1/auth"))
        .and(body_json(json!({
            "credentials": {"username": "jane", "key": "s3cret-key"}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"auth": {"token": {"id": TOKEN}}})),
        )
        .mount(server)
        .await;

    let mut client =
        CloudDbHttpClient::with_endpoints(test_account(), endpoints_for(server)).unwrap();
    client.acquire_token().await.unwrap();
    client
}

#[tokio::test]
async fn acquired_token_is_sent_as_auth_header() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    assert!(client.is_authenticated());

    Mock::given(method("GET"))
        .and(path("/v1.0/123456/instances"))
        .and(header("X-Auth-Token", TOKEN))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"instances": []})))
        .expect(1)
        .mount(&server)
        .await;

    let instances = client.list_instances().await.unwrap();
    assert_eq!(instances, json!({"instances": []}));
}

#[tokio::test]
async fn unauthenticated_operation_fails_fast_without_a_request() {
    let server = MockServer::start().await;
    let client =
        CloudDbHttpClient::with_endpoints(test_account(), endpoints_for(&server)).unwrap();

    assert!(!client.is_authenticated());

    let err = client.list_instances().await.unwrap_err();
    assert!(matches!(err, CloudDbError::Unauthenticated));

    let err = client.create_database("abc", "mydb").await.unwrap_err();
    assert!(matches!(err, CloudDbError::Unauthenticated));

    // no request must have reached the server
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_database_posts_exact_document() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1.0/123456/instances/abc/databases"))
        .and(header("X-Auth-Token", TOKEN))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"databases": [{"name": "mydb"}]})))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    // 202 with empty body is success, not a decode failure
    let result = client.create_database("abc", "mydb").await.unwrap();
    assert_eq!(result, Value::Null);
}

#[tokio::test]
async fn grant_user_access_uses_put() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("PUT"))
        .and(path("/v1.0/123456/instances/abc/users/appuser/databases"))
        .and(header("X-Auth-Token", TOKEN))
        .and(body_json(json!({"databases": [{"name": "mydb"}]})))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    client.grant_user_access("abc", "appuser", "mydb").await.unwrap();
}

#[tokio::test]
async fn revoke_user_access_uses_delete_with_no_body() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/v1.0/123456/instances/abc/users/appuser/databases/mydb"))
        .and(header("X-Auth-Token", TOKEN))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.revoke_user_access("abc", "appuser", "mydb").await.unwrap();
    assert_eq!(result, Value::Null);

    let requests = server.received_requests().await.unwrap();
    let delete = requests
        .iter()
        .find(|r| r.method.as_str() == "DELETE")
        .unwrap();
    assert!(delete.body.is_empty());
}

#[tokio::test]
async fn restart_instance_posts_restart_action() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1.0/123456/instances/abc/action"))
        .and(body_json(json!({"restart": {}})))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    client.restart_instance("abc").await.unwrap();
}

#[tokio::test]
async fn create_instance_builds_full_flavor_ref() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    let flavor_ref = format!("{}/v1.0/123456/flavors/1", server.uri());

    Mock::given(method("POST"))
        .and(path("/v1.0/123456/instances"))
        .and(body_json(json!({
            "instance": {
                "flavorRef": flavor_ref,
                "name": "my-instance",
                "volume": {"size": 2}
            }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"instance": {"id": "abc", "status": "BUILD"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let created = client.create_instance("my-instance", "1", 2).await.unwrap();
    assert_eq!(created["instance"]["id"], "abc");
}

#[tokio::test]
async fn create_user_posts_users_document() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1.0/123456/instances/abc/users"))
        .and(body_json(json!({
            "users": [{
                "databases": [{"name": "mydb"}],
                "name": "appuser",
                "password": "p4ssw0rd"
            }]
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    client
        .create_user("abc", "appuser", "p4ssw0rd", "mydb")
        .await
        .unwrap();
}

#[tokio::test]
async fn list_flavors_hits_catalog_paths() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/v1.0/123456/flavors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"flavors": []})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1.0/123456/flavors/detail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"flavors": []})))
        .expect(1)
        .mount(&server)
        .await;

    client.list_flavors().await.unwrap();
    client.list_flavors_detail().await.unwrap();
}

#[tokio::test]
async fn non_2xx_surfaces_as_api_error_with_raw_body() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/v1.0/123456/instances/abc/databases"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let err = client.list_databases("abc").await.unwrap_err();
    match &err {
        CloudDbError::Api { status, body } => {
            assert_eq!(*status, 401);
            assert_eq!(body, "Unauthorized");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn malformed_json_surfaces_as_decode_error() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/v1.0/123456/instances"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client.list_instances().await.unwrap_err();
    assert!(matches!(err, CloudDbError::Decode(_)));
}

#[tokio::test]
async fn missing_token_field_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1.1/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"auth": {}})))
        .mount(&server)
        .await;

    let mut client =
        CloudDbHttpClient::with_endpoints(test_account(), endpoints_for(&server)).unwrap();

    let err = client.acquire_token().await.unwrap_err();
    assert!(matches!(
        err,
        CloudDbError::MissingField("auth.token.id")
    ));
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn reacquiring_replaces_the_stored_token() {
    let server = MockServer::start().await;
    let mut client = authed_client(&server).await;

    // re-mounting replaces the identity response; the new token must win
    server.reset().await;
    Mock::given(method("POST"))
        .and(path("/v1.1/auth"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"auth": {"token": {"id": "T999"}}})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/123456/instances"))
        .and(header("X-Auth-Token", "T999"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"instances": []})))
        .expect(1)
        .mount(&server)
        .await;

    client.acquire_token().await.unwrap();
    client.list_instances().await.unwrap();
}
