//! Transport behavior against a mock Hey.Cafe server.

use heycafe::{
    ApiErrorKind, ClientConfig, HeyCafeClient, HeyCafeError, Params, RequestDescriptor,
};
use mockito::{Matcher, Server};
use serde_json::json;
use std::time::Duration;

fn client_for(server: &Server, config: ClientConfig) -> HeyCafeClient {
    HeyCafeClient::with_config(config.with_base_url(server.url()).with_logging(false))
}

fn api_kind(err: &HeyCafeError) -> Option<ApiErrorKind> {
    match err {
        HeyCafeError::Api(e) => Some(e.kind),
        HeyCafeError::AuthenticationRequired { .. } => None,
    }
}

#[tokio::test]
async fn get_success_unwraps_response_data() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/get_system_hello")
        .match_query(Matcher::UrlEncoded("error_boolean".into(), "true".into()))
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"system_api_error": false, "response_data": "hello"}"#)
        .create_async()
        .await;

    let client = client_for(&server, ClientConfig::default());
    let result = client.get("get_system_hello", Params::new(), false).await.unwrap();

    assert_eq!(result, json!("hello"));
    mock.assert_async().await;
}

#[tokio::test]
async fn get_passes_serialized_params() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/get_account_info")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "hey".into()),
            Matcher::UrlEncoded("draft".into(), "false".into()),
            Matcher::UrlEncoded("ids".into(), "a,b,c".into()),
            Matcher::UrlEncoded("count".into(), "20".into()),
        ]))
        .with_body(r#"{"system_api_error": false, "response_data": {"id": "abc", "alias": "hey"}}"#)
        .create_async()
        .await;

    let client = client_for(&server, ClientConfig::default());
    let params = Params::new()
        .with("query", "hey")
        .with("draft", false)
        .with("ids", vec!["a", "b", "c"])
        .with("count", 20u32)
        .with("start", None::<u32>);
    let result = client.get("get_account_info", params, false).await.unwrap();

    assert_eq!(result, json!({"id": "abc", "alias": "hey"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn body_without_envelope_is_returned_whole() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/get_system_endpoints")
        .match_query(Matcher::Any)
        .with_body(r#"{"recommended": "endpoint.hey.cafe"}"#)
        .create_async()
        .await;

    let client = client_for(&server, ClientConfig::default());
    let result = client.get("get_system_endpoints", Params::new(), false).await.unwrap();
    assert_eq!(result, json!({"recommended": "endpoint.hey.cafe"}));
}

#[tokio::test]
async fn auth_required_without_credentials_makes_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server, ClientConfig::default());
    let err = client
        .get("get_account_cafes", Params::new(), true)
        .await
        .unwrap_err();

    assert!(err.is_authentication_required());
    assert!(err.to_string().contains("API key"));
    mock.assert_async().await;
}

#[tokio::test]
async fn api_key_sent_as_bearer_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/get_account_cafes")
        .match_query(Matcher::Any)
        .match_header("authorization", "Bearer test-api-key")
        .with_body(r#"{"system_api_error": false, "response_data": {}}"#)
        .create_async()
        .await;

    let client = client_for(&server, ClientConfig::default().with_api_key("test-api-key"));
    client.get("get_account_cafes", Params::new(), true).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn api_key_sent_on_public_endpoints_too() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/get_cafe_info")
        .match_query(Matcher::Any)
        .match_header("authorization", "Bearer k")
        .with_body(r#"{"response_data": {}}"#)
        .create_async()
        .await;

    let client = client_for(&server, ClientConfig::default().with_api_key("k"));
    client.get("get_cafe_info", Params::new(), false).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn session_token_sent_as_query_parameter() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/get_feed_conversations")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "session-tok".into()),
            Matcher::UrlEncoded("count".into(), "5".into()),
        ]))
        .match_header("authorization", Matcher::Missing)
        .with_body(r#"{"system_api_error": false, "response_data": []}"#)
        .create_async()
        .await;

    let client = client_for(&server, ClientConfig::default().with_session_token("session-tok"));
    let request = RequestDescriptor::get("get_feed_conversations")
        .with_query_param("count", 5u32)
        .requires_auth()
        .session_eligible();

    let result = client.execute(&request).await.unwrap();
    assert_eq!(result, json!([]));
    mock.assert_async().await;
}

#[tokio::test]
async fn api_key_wins_over_session_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/get_feed_tags")
        .match_query(Matcher::Any)
        .match_header("authorization", "Bearer key")
        .with_body(r#"{"response_data": []}"#)
        .create_async()
        .await;

    let client = client_for(
        &server,
        ClientConfig::default().with_api_key("key").with_session_token("tok"),
    );
    let request = RequestDescriptor::get("get_feed_tags").requires_auth().session_eligible();
    client.execute(&request).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn body_error_flag_raises_api_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/get_system_hello")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"system_api_error": true, "system_api_error_message": "Something went wrong"}"#)
        .create_async()
        .await;

    let client = client_for(&server, ClientConfig::default());
    let err = client.get("get_system_hello", Params::new(), false).await.unwrap_err();

    assert_eq!(api_kind(&err), Some(ApiErrorKind::BodyFlag));
    assert!(err.to_string().contains("Something went wrong"));
    assert_eq!(err.status(), Some(200));
    assert_eq!(err.body().and_then(|b| b.get("system_api_error")), Some(&json!(true)));
}

#[tokio::test]
async fn http_error_status_raises_api_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/get_cafe_info")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server, ClientConfig::default());
    let err = client.get("get_cafe_info", Params::new(), false).await.unwrap_err();

    assert_eq!(api_kind(&err), Some(ApiErrorKind::HttpStatus));
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "HTTP 404");
}

#[tokio::test]
async fn no_http_mode_ignores_error_status() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/get_cafe_info")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("error_boolean".into(), "true".into()),
            Matcher::UrlEncoded("error_no_http".into(), "true".into()),
        ]))
        .with_status(404)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server, ClientConfig::default().with_error_no_http(true));
    let result = client.get("get_cafe_info", Params::new(), false).await.unwrap();

    assert_eq!(result, json!({}));
    mock.assert_async().await;
}

#[tokio::test]
async fn invalid_json_raises_api_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/get_system_hello")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let client = client_for(&server, ClientConfig::default());
    let err = client.get("get_system_hello", Params::new(), false).await.unwrap_err();

    assert_eq!(api_kind(&err), Some(ApiErrorKind::InvalidResponse));
    assert_eq!(err.status(), Some(502));
    assert!(err.body().is_none());
    assert!(err.to_string().contains("get_system_hello"));
}

#[tokio::test]
async fn post_sends_form_body_and_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/post_conversation_create")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("error_boolean".into(), "true".into()),
            Matcher::UrlEncoded("trace".into(), "1".into()),
        ]))
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("cafe=cafe1".into()),
            Matcher::Regex("content_raw=Hello".into()),
        ]))
        .with_body(r#"{"system_api_error": false, "response_data": {"id": "conv123"}}"#)
        .create_async()
        .await;

    let client = client_for(&server, ClientConfig::default().with_api_key("k"));
    let body = Params::new().with("cafe", "cafe1").with("content_raw", "Hello");
    let result = client
        .post(
            "post_conversation_create",
            Params::new().with("trace", 1u8),
            Some(body),
            true,
        )
        .await
        .unwrap();

    assert_eq!(result, json!({"id": "conv123"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn post_without_body_fields_sends_empty_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/post_cafe_join")
        .match_query(Matcher::Any)
        .match_body("")
        .with_body(r#"{"response_data": true}"#)
        .create_async()
        .await;

    let client = client_for(&server, ClientConfig::default().with_api_key("k"));
    let body = Params::new().with("query", None::<String>);
    let result = client.post("post_cafe_join", Params::new(), Some(body), true).await.unwrap();

    assert_eq!(result, json!(true));
    mock.assert_async().await;
}

#[tokio::test]
async fn timeout_is_distinguishable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
    });

    let client = HeyCafeClient::with_config(
        ClientConfig::new(format!("http://{addr}"))
            .with_timeout_ms(200)
            .with_logging(false),
    );
    let err = client.get("get_system_hello", Params::new(), false).await.unwrap_err();

    assert!(err.is_timeout(), "expected timeout, got {err:?}");
    assert_eq!(api_kind(&err), Some(ApiErrorKind::Timeout));
}

#[tokio::test]
async fn cancellation_abandons_call() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
    });

    let client = HeyCafeClient::with_config(
        ClientConfig::new(format!("http://{addr}")).with_logging(false),
    );
    let request = RequestDescriptor::get("get_system_hello");
    let err = client
        .execute_with_cancel(&request, tokio::time::sleep(Duration::from_millis(100)))
        .await
        .unwrap_err();

    assert_eq!(api_kind(&err), Some(ApiErrorKind::Cancelled));
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HeyCafeClient::with_config(
        ClientConfig::new(format!("http://{addr}")).with_logging(false),
    );
    let err = client.get("get_system_hello", Params::new(), false).await.unwrap_err();
    assert_eq!(api_kind(&err), Some(ApiErrorKind::Transport));
    assert_eq!(err.status(), None);
}
