use mealsu_client::{ApiError, ProfileEditor, ProfilePatch};
use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_json, body_partial_json, header, method, path},
};

mod helpers;

fn profile_json() -> serde_json::Value {
    json!({
        "email": "ana@example.com",
        "name": "Ana",
        "dietary_preference": null,
        "gender": null,
        "age": 30,
        "bio": null,
        "avatar": null
    })
}

#[tokio::test]
async fn test_get_profile_reads_nullable_fields() -> anyhow::Result<()> {
    let state = helpers::setup_test_client().await?;
    state.login_as("tok").await?;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json()))
        .mount(&state.server)
        .await;

    let profile = state.client.get_profile().await?;
    assert_eq!(profile.email, "ana@example.com");
    assert_eq!(profile.name.as_deref(), Some("Ana"));
    assert_eq!(profile.age, Some(30));
    assert_eq!(profile.dietary_preference, None);

    Ok(())
}

#[tokio::test]
async fn test_update_profile_translates_to_snake_case() -> anyhow::Result<()> {
    let state = helpers::setup_test_client().await?;

    Mock::given(method("PUT"))
        .and(path("/api/v1/users/me"))
        .and(body_json(json!({"dietary_preference": "Vegan"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&state.server)
        .await;

    let patch = ProfilePatch {
        dietary_preference: Some(Some("Vegan".to_owned())),
        ..Default::default()
    };
    let response = state.client.update_profile(patch).await?;
    assert_eq!(response, json!({"ok": true}));

    Ok(())
}

#[tokio::test]
async fn test_editor_save_folds_patch_and_clears_dirty() -> anyhow::Result<()> {
    let state = helpers::setup_test_client().await?;
    state.login_as("tok").await?;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json()))
        .mount(&state.server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/users/me"))
        .and(body_partial_json(json!({"dietary_preference": "Vegan", "name": "Ana"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "saved"})))
        .expect(1)
        .mount(&state.server)
        .await;

    let mut editor = ProfileEditor::load(&state.client).await?;
    editor.edit(ProfilePatch {
        dietary_preference: Some(Some("Vegan".to_owned())),
        ..Default::default()
    });
    assert!(editor.is_dirty());

    editor.save(&state.client).await?;

    assert!(!editor.is_dirty());
    assert_eq!(editor.saved().dietary_preference.as_deref(), Some("Vegan"));
    assert_eq!(editor.saved().name.as_deref(), Some("Ana"));

    // Clean editor does not hit the backend again.
    editor.save(&state.client).await?;

    Ok(())
}

#[tokio::test]
async fn test_editor_takes_server_profile_when_returned() -> anyhow::Result<()> {
    let state = helpers::setup_test_client().await?;

    let mut updated = profile_json();
    updated["bio"] = json!("Trimmed by server");

    Mock::given(method("PUT"))
        .and(path("/api/v1/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .mount(&state.server)
        .await;

    let mut editor = ProfileEditor::new(serde_json::from_value(profile_json())?);
    editor.edit(ProfilePatch {
        bio: Some(Some("  Trimmed by server  ".to_owned())),
        ..Default::default()
    });
    editor.save(&state.client).await?;

    assert_eq!(editor.saved().bio.as_deref(), Some("Trimmed by server"));

    Ok(())
}

#[tokio::test]
async fn test_editor_stays_dirty_on_failure() -> anyhow::Result<()> {
    let state = helpers::setup_test_client().await?;

    Mock::given(method("PUT"))
        .and(path("/api/v1/users/me"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"error": "age out of range"})))
        .mount(&state.server)
        .await;

    let mut editor = ProfileEditor::new(serde_json::from_value(profile_json())?);
    editor.edit(ProfilePatch {
        gender: Some(Some("female".to_owned())),
        ..Default::default()
    });

    let err = editor.save(&state.client).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 422, .. }));
    assert_eq!(err.to_string(), "age out of range");
    assert!(editor.is_dirty());
    assert_eq!(editor.profile().gender.as_deref(), Some("female"));
    assert_eq!(editor.saved().gender, None);

    Ok(())
}

#[tokio::test]
async fn test_editor_can_clear_a_field() -> anyhow::Result<()> {
    let state = helpers::setup_test_client().await?;

    Mock::given(method("PUT"))
        .and(path("/api/v1/users/me"))
        .and(body_partial_json(json!({"bio": null, "name": "Ana"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&state.server)
        .await;

    let mut saved = profile_json();
    saved["bio"] = json!("Cooks on Sundays");
    let mut editor = ProfileEditor::new(serde_json::from_value(saved)?);
    editor.edit(ProfilePatch {
        bio: Some(None),
        ..Default::default()
    });
    editor.save(&state.client).await?;

    assert!(!editor.is_dirty());
    assert_eq!(editor.saved().bio, None);
    assert_eq!(editor.saved().name.as_deref(), Some("Ana"));

    Ok(())
}
