//! End-to-end pipeline tests against a local mock of the Untappd v3 wire
//! protocol.

use url::Url;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use untappd_client::{
    Checkin, GeoFilter, Paging, TrendingAge, TrendingKind, UntappdClient, UntappdError,
};

const API_KEY: &str = "test-key";

async fn client_for(server: &MockServer) -> UntappdClient {
    let base = Url::parse(&format!("{}/v3", server.uri())).expect("valid mock url");
    UntappdClient::builder(API_KEY)
        .with_base_url(base)
        .build()
        .expect("client builds")
}

fn envelope(results: serde_json::Value) -> String {
    serde_json::json!({ "http_code": 200, "results": results }).to_string()
}

#[tokio::test]
async fn successful_call_returns_payload_and_diagnostics() {
    let server = MockServer::start().await;
    let body = envelope(serde_json::json!({"user": {"user_name": "gregavola"}}));
    Mock::given(method("GET"))
        .and(path("/v3/user"))
        .and(query_param("user", "gregavola"))
        .and(query_param("key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .user_info(Some("gregavola"))
        .await
        .expect("call succeeds");

    assert_eq!(
        response.value()["results"]["user"]["user_name"],
        serde_json::Value::from("gregavola")
    );
    assert_eq!(response.raw_body(), body);
    assert!(response.request_url().as_str().contains("/v3/user?"));
    assert!(response.request_url().as_str().contains("key=test-key"));
}

#[tokio::test]
async fn remote_rejection_carries_code_and_message() {
    let server = MockServer::start().await;
    // The service reports errors inside a transport-level 200 reply.
    Mock::given(method("GET"))
        .and(path("/v3/beer_info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"http_code":404,"error":"Not Found"}"#),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client.beer_info(99).await.expect_err("must fail");
    match error {
        UntappdError::Remote {
            code,
            message,
            url,
            body,
        } => {
            assert_eq!(code, 404);
            assert_eq!(message, "Not Found");
            assert!(url.as_str().contains("bid=99"));
            assert_eq!(body, r#"{"http_code":404,"error":"Not Found"}"#);
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_reply_is_a_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/thepub"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client
        .public_feed(Paging::start(), GeoFilter::default())
        .await
        .expect_err("must fail");
    assert!(matches!(error, UntappdError::Protocol { .. }));
}

#[tokio::test]
async fn reply_without_status_envelope_is_a_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/venue_info"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"results":[]}"#))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client.venue_info(7).await.expect_err("must fail");
    assert!(matches!(error, UntappdError::Protocol { .. }));
}

#[tokio::test]
async fn absent_optionals_never_reach_the_wire_but_zero_does() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/user_feed"))
        .and(query_param("user", "gregavola"))
        .and(query_param("offset", "0"))
        .and(query_param_is_missing("since"))
        .respond_with(ResponseTemplate::new(200).set_body_string(envelope(serde_json::json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .user_feed(Some("gregavola"), Paging::offset(0))
        .await
        .expect("call succeeds");
}

#[tokio::test]
async fn trending_limit_out_of_range_clamps_to_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/trending"))
        .and(query_param("type", "all"))
        .and(query_param("limit", "10"))
        .and(query_param("age", "daily"))
        .and(query_param_is_missing("geolat"))
        .respond_with(ResponseTemplate::new(200).set_body_string(envelope(serde_json::json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .public_trending(
            TrendingKind::All,
            Some(25),
            TrendingAge::Daily,
            GeoFilter::default(),
        )
        .await
        .expect("call succeeds");
}

#[tokio::test]
async fn authenticated_calls_sign_with_basic_auth() {
    let server = MockServer::start().await;
    // base64("user:" + md5("pass"))
    Mock::given(method("GET"))
        .and(path("/v3/feed"))
        .and(header(
            "authorization",
            "Basic dXNlcjoxYTFkYzkxYzkwNzMyNWM2OTI3MWRkZjBjOTQ0YmM3Mg==",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(envelope(serde_json::json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let base = Url::parse(&format!("{}/v3", server.uri())).expect("valid mock url");
    let mut client = UntappdClient::builder(API_KEY)
        .with_base_url(base)
        .build()
        .expect("client builds");
    client.set_authenticated_user("user", "pass");

    client
        .friend_feed(Paging::start())
        .await
        .expect("call succeeds");
}

#[tokio::test]
async fn unauthenticated_calls_send_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/beer_search"))
        .and(query_param("q", "dogfish head"))
        .respond_with(ResponseTemplate::new(200).set_body_string(envelope(serde_json::json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .beer_search("dogfish head", None, None)
        .await
        .expect("call succeeds");

    let requests = server.received_requests().await.expect("requests recorded");
    assert_eq!(requests.len(), 1);
    assert!(
        requests
            .first()
            .is_none_or(|request| !request.headers.contains_key("authorization"))
    );
}

#[tokio::test]
async fn validation_and_auth_failures_issue_no_network_call() {
    let server = MockServer::start().await;
    let mut client = client_for(&server).await;

    assert!(matches!(
        client.beer_info(0).await,
        Err(UntappdError::Validation { .. })
    ));
    assert!(matches!(
        client.friend_feed(Paging::start()).await,
        Err(UntappdError::AuthenticationRequired)
    ));

    // Clearing credentials restores the gate before any request is built.
    client.set_authenticated_user("user", "pass");
    client.set_authenticated_user("", "");
    assert!(matches!(
        client.add_to_wishlist(42).await,
        Err(UntappdError::AuthenticationRequired)
    ));

    let requests = server.received_requests().await.expect("requests recorded");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn checkin_encodes_flags_and_optionals() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/checkin"))
        .and(query_param("gmt_offset", "-5"))
        .and(query_param("bid", "1234"))
        .and(query_param("foursquare_id", "abc123"))
        .and(query_param("user_lat", "40.7128"))
        .and(query_param("user_long", "-74.006"))
        .and(query_param("facebook", "off"))
        .and(query_param("twitter", "on"))
        .and(query_param("foursquare", "off"))
        .and(query_param("rating_value", "4"))
        .and(query_param_is_missing("shout"))
        .respond_with(ResponseTemplate::new(200).set_body_string(envelope(serde_json::json!({}))))
        .expect(1)
        .mount(&server)
        .await;

    let base = Url::parse(&format!("{}/v3", server.uri())).expect("valid mock url");
    let mut client = UntappdClient::builder(API_KEY)
        .with_base_url(base)
        .build()
        .expect("client builds");
    client.set_authenticated_user("user", "pass");

    let checkin = Checkin::new(-5, 1234)
        .at_venue("abc123", 40.7128, -74.006)
        .rating(4)
        .share_on_twitter(true);
    client.checkin(checkin).await.expect("call succeeds");
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Bind-and-drop guarantees a port with nothing listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);

    let base = Url::parse(&format!("http://127.0.0.1:{port}/v3")).expect("valid url");
    let client = UntappdClient::builder(API_KEY)
        .with_base_url(base)
        .build()
        .expect("client builds");

    let error = client.beer_info(1).await.expect_err("must fail");
    match error {
        UntappdError::Transport { url, message } => {
            assert!(url.as_str().contains("/v3/beer_info"));
            assert!(!message.is_empty());
        }
        other => panic!("expected Transport, got {other:?}"),
    }
}
