use mealsu_client::{ApiClient, ApiError};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{method, path},
};

mod helpers;

#[tokio::test]
async fn test_plain_text_error_body() -> anyhow::Result<()> {
    let state = helpers::setup_test_client().await?;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream unavailable"))
        .mount(&state.server)
        .await;

    let err = state.client.get_profile().await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.to_string(), "upstream unavailable");

    Ok(())
}

#[tokio::test]
async fn test_empty_error_body_uses_reason_phrase() -> anyhow::Result<()> {
    let state = helpers::setup_test_client().await?;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&state.server)
        .await;

    let err = state.client.get_profile().await.unwrap_err();
    assert_eq!(err.to_string(), "Not Found");

    Ok(())
}

#[tokio::test]
async fn test_undecodable_success_body() -> anyhow::Result<()> {
    let state = helpers::setup_test_client().await?;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&state.server)
        .await;

    let err = state.client.get_profile().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));

    Ok(())
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() -> anyhow::Result<()> {
    let state = helpers::setup_test_client().await?;
    let client = ApiClient::new("http://127.0.0.1:9/api/v1", state.storage.clone());

    let err = client.get_profile().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(ref message) if !message.is_empty()));

    Ok(())
}
