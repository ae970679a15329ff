use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::{ApiClient, ApiResult};

/// User profile as the backend returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dietary_preference: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Local edit of a profile.
///
/// The outer `None` leaves a field as it is, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 120))]
    pub name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 60))]
    pub dietary_preference: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 30))]
    pub gender: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 150))]
    pub age: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub bio: Option<Option<String>>,
}

fn set<T>(slot: &mut Option<Option<T>>, value: Option<Option<T>>) {
    if value.is_some() {
        *slot = value;
    }
}

fn apply_field<T: Clone>(field: &mut Option<T>, value: &Option<Option<T>>) {
    if let Some(value) = value {
        field.clone_from(value);
    }
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Later values win.
    pub fn merge(&mut self, other: ProfilePatch) {
        set(&mut self.name, other.name);
        set(&mut self.dietary_preference, other.dietary_preference);
        set(&mut self.gender, other.gender);
        set(&mut self.age, other.age);
        set(&mut self.bio, other.bio);
    }

    pub fn apply(&self, profile: &mut Profile) {
        apply_field(&mut profile.name, &self.name);
        apply_field(&mut profile.dietary_preference, &self.dietary_preference);
        apply_field(&mut profile.gender, &self.gender);
        apply_field(&mut profile.age, &self.age);
        apply_field(&mut profile.bio, &self.bio);
    }
}

/// Wire form of a profile update. Omitted fields stay untouched on the
/// backend, `null` clears them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdateBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_preference: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<Option<String>>,
}

impl From<ProfilePatch> for ProfileUpdateBody {
    fn from(patch: ProfilePatch) -> Self {
        Self {
            name: patch.name,
            dietary_preference: patch.dietary_preference,
            gender: patch.gender,
            age: patch.age,
            bio: patch.bio,
        }
    }
}

/// Every editable field, empty ones as explicit clears.
impl From<&Profile> for ProfilePatch {
    fn from(profile: &Profile) -> Self {
        Self {
            name: Some(profile.name.clone()),
            dietary_preference: Some(profile.dietary_preference.clone()),
            gender: Some(profile.gender.clone()),
            age: Some(profile.age),
            bio: Some(profile.bio.clone()),
        }
    }
}

impl ApiClient {
    pub async fn get_profile(&self) -> ApiResult<Profile> {
        self.get("/users/me").await
    }

    /// Sends the patch and returns whatever the backend answered with.
    pub async fn update_profile(&self, patch: ProfilePatch) -> ApiResult<Value> {
        patch.validate()?;

        let body = ProfileUpdateBody::from(patch);
        let response = self.put("/users/me", &body).await?;

        tracing::info!("profile updated");

        Ok(response)
    }
}

/// Saved profile plus pending edits, as a settings screen holds them.
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    saved: Profile,
    draft: ProfilePatch,
    dirty: bool,
}

impl ProfileEditor {
    pub fn new(saved: Profile) -> Self {
        Self {
            saved,
            draft: ProfilePatch::default(),
            dirty: false,
        }
    }

    pub async fn load(client: &ApiClient) -> ApiResult<Self> {
        Ok(Self::new(client.get_profile().await?))
    }

    pub fn saved(&self) -> &Profile {
        &self.saved
    }

    /// Saved profile with the pending edits applied.
    pub fn profile(&self) -> Profile {
        let mut profile = self.saved.clone();
        self.draft.apply(&mut profile);
        profile
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn edit(&mut self, patch: ProfilePatch) {
        if patch.is_empty() {
            return;
        }

        self.draft.merge(patch);
        self.dirty = true;
    }

    /// Pushes pending edits. On failure the edits and the dirty flag stay.
    pub async fn save(&mut self, client: &ApiClient) -> ApiResult<()> {
        if !self.dirty {
            return Ok(());
        }

        let merged = ProfilePatch::from(&self.profile());
        let response = client.update_profile(merged).await?;

        match serde_json::from_value::<Profile>(response) {
            Ok(profile) if !profile.email.is_empty() => self.saved = profile,
            _ => self.draft.apply(&mut self.saved),
        }

        self.draft = ProfilePatch::default();
        self.dirty = false;

        Ok(())
    }
}
