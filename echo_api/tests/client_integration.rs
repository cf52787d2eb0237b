use echo_api::{Client, Error, FacilitiesQuery, MapQuery, QidQuery, Query};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn get_facilities_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("facilities.json");

    Mock::given(method("GET"))
        .and(path("/echo/echo_rest_services.get_facilities"))
        .and(query_param("p_st", "VA"))
        .and(query_param("responseset", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = FacilitiesQuery::new().with_param("state", "VA").unwrap();
    let result = client.get_facilities(&query).await;
    assert!(result.is_ok());

    let resp = result.unwrap();
    assert_eq!(resp.results.facilities.len(), 1);
    assert_eq!(resp.results.facilities[0].state, "VA");
}

#[tokio::test]
async fn get_facilities_api_error() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("facilities_error.json");

    Mock::given(method("GET"))
        .and(path("/echo/echo_rest_services.get_facilities"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client
        .get_facilities(&FacilitiesQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api { ref message } if message.starts_with("Invalid Query ID")));
    assert!(!err.is_transport());
    assert!(!err.is_parse());
}

#[tokio::test]
async fn get_facilities_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/echo/echo_rest_services.get_facilities"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client
        .get_facilities(&FacilitiesQuery::default())
        .await
        .unwrap_err();
    match err {
        Error::HttpStatus { status, ref body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        ref other => panic!("expected HTTP status error, got {other:?}"),
    }
    assert!(err.is_transport());
}

#[tokio::test]
async fn non_200_success_status_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/echo/echo_rest_services.get_qid"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.get_qid(&QidQuery::new("537")).await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 204, .. }));
}

#[tokio::test]
async fn get_facilities_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/echo/echo_rest_services.get_facilities"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client
        .get_facilities(&FacilitiesQuery::default())
        .await
        .unwrap_err();
    assert!(err.is_parse());
}

#[tokio::test]
async fn get_map_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("map.json");

    Mock::given(method("GET"))
        .and(path("/echo/echo_rest_services.get_map"))
        .and(query_param("QID", "537"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).with_debug(true);
    let resp = client.get_map(&MapQuery::new("537")).await.unwrap();
    assert_eq!(resp.map_output.map_data.len(), 1);
    assert_eq!(resp.map_output.map_data[0].name, "ELOHSSA CORPORATION MINE");
}

#[tokio::test]
async fn get_qid_second_page() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("qid.json");

    Mock::given(method("GET"))
        .and(path("/echo/echo_rest_services.get_qid"))
        .and(query_param("qid", "537"))
        .and(query_param("pageno", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = QidQuery::new("537").with_param("pageNumber", "2").unwrap();
    let resp = client.get_qid(&query).await.unwrap();
    assert_eq!(resp.query_rows, 574);
    assert_eq!(resp.facilities.len(), 2);
}

#[tokio::test]
async fn request_timeout_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/echo/echo_rest_services.get_qid"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("qid.json"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = QidQuery::new("537").with_timeout(Duration::from_millis(200));
    let err = client.get_qid(&query).await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
    assert!(err.is_transport());
}
