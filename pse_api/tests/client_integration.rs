use chrono::NaiveDate;
use pse_api::{Client, CrbProgQuery, Error};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn query() -> CrbProgQuery {
    CrbProgQuery::for_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
}

#[tokio::test]
async fn get_crb_prog_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("crb_prog.json");

    Mock::given(method("GET"))
        .and(path("/api/crb-prog"))
        .and(query_param("$select", "business_date,cen_prog,udtczas_oreb"))
        .and(query_param("$filter", "business_date eq '2024-06-01'"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_crb_prog(&query()).await;
    assert!(result.is_ok());

    let resp = result.unwrap();
    assert_eq!(resp.value.len(), 3);
    assert_eq!(resp.value[2].cen_prog, -12.5);
}

#[tokio::test]
async fn get_crb_prog_empty() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("crb_prog_empty.json");

    Mock::given(method("GET"))
        .and(path("/api/crb-prog"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client.get_crb_prog(&query()).await.unwrap();
    assert!(resp.value.is_empty());
}

#[tokio::test]
async fn get_crb_prog_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/crb-prog"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_crb_prog(&query()).await;
    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "Service Unavailable");
        }
        other => panic!("expected HttpStatus error, got {:?}", other.map(|r| r.value.len())),
    }
}

#[tokio::test]
async fn get_crb_prog_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/crb-prog"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_crb_prog(&query()).await;
    assert!(matches!(result, Err(Error::InvalidResponse(_))));
}

#[tokio::test]
async fn get_crb_prog_unreachable_host() {
    // Nothing listens on port 1.
    let client = Client::with_base_url("http://127.0.0.1:1");
    let result = client.get_crb_prog(&query()).await;
    assert!(matches!(result, Err(Error::RequestFailed(_))));
}

#[tokio::test]
async fn get_crb_prog_without_value_key_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/crb-prog"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client.get_crb_prog(&query()).await.unwrap();
    assert!(resp.value.is_empty());
}
