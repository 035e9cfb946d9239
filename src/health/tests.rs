use crate::health::responses::HealthCheckResponse;
use crate::http::tests::{test_server, test_server_with};
use crate::imagery::fake::FakeImageSource;

#[tokio::test]
async fn test_health_check() {
    let server = test_server();

    let response = server.get("/health/check").await;

    response.assert_status_ok();
    response.assert_json(&HealthCheckResponse {
        error: false,
        imagery_configured: true,
    });
}

#[tokio::test]
async fn test_health_check_without_imagery_token() {
    let server = test_server_with(FakeImageSource::default().without_token());

    let response = server.get("/health/check").await;

    response.assert_status_ok();
    response.assert_json(&HealthCheckResponse {
        error: false,
        imagery_configured: false,
    });
}
