use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ApiClient, ApiResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub current_weight: Option<f64>,
    #[serde(default)]
    pub target_weight: Option<f64>,
    #[serde(default)]
    pub waist: Option<f64>,
    #[serde(default)]
    pub chest: Option<f64>,
    #[serde(default)]
    pub thigh: Option<f64>,
    #[serde(default)]
    pub arm: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementsPatch {
    pub height: Option<f64>,
    pub current_weight: Option<f64>,
    pub target_weight: Option<f64>,
    pub waist: Option<f64>,
    pub chest: Option<f64>,
    pub thigh: Option<f64>,
    pub arm: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementsUpdateBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thigh: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arm: Option<f64>,
}

impl From<MeasurementsPatch> for MeasurementsUpdateBody {
    fn from(patch: MeasurementsPatch) -> Self {
        Self {
            height: patch.height,
            current_weight: patch.current_weight,
            target_weight: patch.target_weight,
            waist: patch.waist,
            chest: patch.chest,
            thigh: patch.thigh,
            arm: patch.arm,
        }
    }
}

impl ApiClient {
    pub async fn get_measurements(&self) -> ApiResult<Measurements> {
        self.get("/users/me/measurements").await
    }

    pub async fn update_measurements(&self, patch: MeasurementsPatch) -> ApiResult<Value> {
        let body = MeasurementsUpdateBody::from(patch);
        let response = self.put("/users/me/measurements", &body).await?;

        tracing::info!("measurements updated");

        Ok(response)
    }
}
