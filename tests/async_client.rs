use std::io::Read;
use std::net::TcpListener;
use std::thread;
use std::time::{Duration, Instant};

use mockito::{Matcher, Server};
use radiant_client::params::{AgentProfile, ChannelOpen, DataAsset, Page, TokenSearch};
use radiant_client::{ClientConfig, ClientError, RadiantClient};
use reqwest::{Method, StatusCode};
use serde_json::json;

fn client_for(server: &Server) -> RadiantClient {
    RadiantClient::new(format!("{}/api", server.url())).expect("valid base URL")
}

#[tokio::test]
async fn chain_info_is_returned_unchanged() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/chain")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"height": 123, "network": "mainnet"}"#)
        .expect(1)
        .create_async()
        .await;

    let info = client_for(&server).get_chain_info().await.expect("call succeeds");

    assert_eq!(info, json!({ "height": 123, "network": "mainnet" }));
    mock.assert_async().await;
}

#[tokio::test]
async fn not_found_carries_status_and_detail() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/address/1Abc/balance")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "address not found"}"#)
        .create_async()
        .await;

    let error = client_for(&server)
        .get_balance("1Abc")
        .await
        .expect_err("404 is an error");

    match error {
        ClientError::Api { status, detail } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(detail, "address not found");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn plain_text_error_body_becomes_detail() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/health")
        .with_status(503)
        .with_body("electrumx unreachable")
        .create_async()
        .await;

    let error = client_for(&server).get_health().await.expect_err("503 is an error");

    assert_eq!(error.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    assert_eq!(error.detail(), Some("electrumx unreachable"));
}

#[tokio::test]
async fn broadcast_posts_raw_tx_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/tx")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({ "raw_tx": "deadbeef" })))
        .with_status(200)
        .with_body(r#"{"txid": "abc123"}"#)
        .expect(1)
        .create_async()
        .await;

    let result = client_for(&server)
        .broadcast_transaction("deadbeef")
        .await
        .expect("call succeeds");

    assert_eq!(result, json!({ "txid": "abc123" }));
    mock.assert_async().await;
}

#[tokio::test]
async fn token_ref_with_slash_is_sent_as_one_segment() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/token/abc%2F0")
        .with_status(200)
        .with_body(r#"{"ref": "abc/0"}"#)
        .expect(1)
        .create_async()
        .await;

    let token = client_for(&server).get_token("abc/0").await.expect("call succeeds");

    assert_eq!(token["ref"], "abc/0");
    mock.assert_async().await;
}

#[tokio::test]
async fn omitted_search_filter_is_not_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/tokens/search")
        .match_query(Matcher::Exact("q=rxd&limit=50".to_owned()))
        .with_status(200)
        .with_body(r#"{"results": []}"#)
        .expect(1)
        .create_async()
        .await;

    client_for(&server)
        .search_tokens(&TokenSearch::new("rxd"))
        .await
        .expect("call succeeds");

    mock.assert_async().await;
}

#[tokio::test]
async fn paged_queries_send_limit_and_offset() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/wave/alice/subdomains")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".to_owned(), "25".to_owned()),
            Matcher::UrlEncoded("offset".to_owned(), "50".to_owned()),
        ]))
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let subdomains = client_for(&server)
        .get_wave_subdomains("alice", Page::new(25, 50))
        .await
        .expect("call succeeds");

    assert_eq!(subdomains, json!([]));
    mock.assert_async().await;
}

#[tokio::test]
async fn agent_profile_body_omits_unset_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/identity/profile")
        .match_body(Matcher::Json(json!({
            "address": "1Abc",
            "description": "translator",
            "capabilities": ["translate"],
            "wave_name": "translator.rxd",
        })))
        .with_status(200)
        .with_body(r#"{"profile": {}}"#)
        .expect(1)
        .create_async()
        .await;

    let mut profile = AgentProfile::new("1Abc", "translator", vec!["translate".to_owned()]);
    profile.wave_name = Some("translator.rxd".to_owned());
    client_for(&server)
        .build_agent_profile(&profile)
        .await
        .expect("call succeeds");

    mock.assert_async().await;
}

#[tokio::test]
async fn data_asset_and_channel_bodies_are_posted() {
    let mut server = Server::new_async().await;
    let asset_mock = server
        .mock("POST", "/api/marketplace/asset")
        .match_body(Matcher::Json(json!({
            "ref": "ab_0",
            "type": "model",
            "name": "tiny",
            "content_hash": "ff",
            "price": 5,
            "license": "MIT",
        })))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let channel_mock = server
        .mock("POST", "/api/channel/open")
        .match_body(Matcher::Json(json!({
            "channel_id": "ch",
            "agent_a": "1A",
            "agent_b": "1B",
            "capacity": 10_000,
            "timeout_blocks": 1008,
        })))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server);
    let mut asset = DataAsset::new("ab_0", "model", "tiny", "ff");
    asset.price = 5;
    asset.license = Some("MIT".to_owned());
    client.build_data_asset(&asset).await.expect("asset call succeeds");
    client
        .open_channel(&ChannelOpen::new("ch", "1A", "1B", 10_000))
        .await
        .expect("channel call succeeds");

    asset_mock.assert_async().await;
    channel_mock.assert_async().await;
}

#[tokio::test]
async fn default_headers_are_sent_with_every_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/protocols")
        .match_header("x-api-key", "secret")
        .match_header("authorization", "Bearer token")
        .with_status(200)
        .with_body("{}")
        .expect(2)
        .create_async()
        .await;

    let config = ClientConfig::new(format!("{}/api/", server.url()))
        .with_header("x-api-key", "secret")
        .with_bearer_token("token");
    let client = RadiantClient::with_config(&config).expect("valid config");
    client.get_protocol_info().await.expect("first call");
    client.get_protocol_info().await.expect("second call");

    mock.assert_async().await;
}

#[tokio::test]
async fn non_json_success_body_is_a_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/wave/stats")
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let error = client_for(&server)
        .get_wave_stats()
        .await
        .expect_err("HTML is not JSON");

    assert!(matches!(error, ClientError::Json(_)));
    assert_eq!(error.status(), None);
}

#[tokio::test]
async fn invalid_utf8_success_body_is_a_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/chain")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(b"{\"network\": \"main\xffnet\"}".as_slice())
        .create_async()
        .await;

    let error = client_for(&server)
        .get_chain_info()
        .await
        .expect_err("body is not UTF-8");

    assert!(matches!(error, ClientError::Json(_)), "unexpected error: {error}");
}

#[tokio::test]
async fn call_operation_and_raw_request_share_the_primitive() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/access/check/1Abc/ab_0")
        .match_query(Matcher::UrlEncoded("min_balance".to_owned(), "3".to_owned()))
        .with_status(200)
        .with_body(r#"{"access": true}"#)
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let by_id = client
        .call_operation(
            "checkTokenAccess",
            &[("address", "1Abc"), ("token_ref", "ab_0")],
            &[("min_balance", "3")],
            None,
        )
        .await
        .expect("call succeeds");
    let raw = client
        .request(
            Method::GET,
            "/access/check/1Abc/ab_0",
            &[("min_balance", "3")],
            None,
        )
        .await
        .expect("call succeeds");

    assert_eq!(by_id, raw);
    mock.assert_async().await;
}

#[tokio::test]
async fn missing_path_parameter_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let error = client_for(&server)
        .call_operation("getBalance", &[], &[], None)
        .await
        .expect_err("address is required");

    assert!(matches!(
        error,
        ClientError::MissingPathParameter { ref parameter, .. } if parameter == "address"
    ));
    mock.assert_async().await;
}

#[tokio::test]
async fn dot_segment_is_refused_before_sending() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let error = client_for(&server)
        .get_token("..")
        .await
        .expect_err("`..` would climb out of /token");

    assert!(matches!(error, ClientError::InvalidPath(_)), "unexpected error: {error}");
    mock.assert_async().await;
}

#[tokio::test]
async fn slow_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let address = listener.local_addr().expect("local addr");
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buffer = [0_u8; 1024];
            let _ = stream.read(&mut buffer);
            thread::sleep(Duration::from_secs(3));
        }
    });

    let config =
        ClientConfig::new(format!("http://{address}/api")).with_timeout(Duration::from_millis(200));
    let client = RadiantClient::with_config(&config).expect("valid config");

    let started = Instant::now();
    let error = client.get_chain_info().await.expect_err("server never answers");

    assert!(error.is_timeout(), "unexpected error: {error}");
    assert_eq!(error.status(), None);
    assert!(started.elapsed() < Duration::from_secs(2));
}
