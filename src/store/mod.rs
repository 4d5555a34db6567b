use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::*;

pub const HEATMAP: &str = "heatmap.json";
pub const PASS_NETWORK: &str = "pass_network.json";
pub const TRACKING: &str = "tracking.json";
pub const OFFSIDE: &str = "offside.json";
pub const FOULS: &str = "fouls.json";
pub const GOAL_PREDICTION: &str = "goal_prediction.json";

pub const FIXTURE_FILES: [&str; 6] = [HEATMAP, PASS_NETWORK, TRACKING, OFFSIDE, FOULS, GOAL_PREDICTION];

/// Read-only directory of JSON fixtures, re-read on every call.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    root: Arc<PathBuf>,
}

impl FixtureStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: Arc::new(root.into()) }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read `filename` and parse it as JSON.
    pub async fn load_json(&self, filename: &str) -> Result<Value, ApiError> {
        let path = self.root.join(filename);

        let bytes = tokio::fs::read(&path).await.map_err(|err| match err.kind() {
            ErrorKind::NotFound => ApiError::NotFound(filename.to_string()),
            _ => ApiError::Io { file: filename.to_string(), source: err },
        })?;

        serde_json::from_slice(&bytes).map_err(|err| {
            tracing::debug!("{}: {}", path.display(), err);
            ApiError::ParseError(filename.to_string())
        })
    }

    /// Read `filename`, check it against `T` and return the untouched JSON.
    ///
    /// The parsed JSON is handed back rather than `T` re-serialized, so
    /// integers stay integers and fields the schema doesn't name survive.
    pub async fn load_validated<T>(&self, filename: &str) -> Result<Value, ApiError>
    where
        T: DeserializeOwned + Validate,
    {
        let value = self.load_json(filename).await?;

        let invalid = |detail: String| ApiError::InvalidFixture {
            file: filename.to_string(),
            detail,
        };

        let parsed = <T as Deserialize>::deserialize(&value).map_err(|err| invalid(err.to_string()))?;
        parsed.validate().map_err(invalid)?;

        Ok(value)
    }

    pub async fn heatmap(&self) -> Result<Value, ApiError> {
        self.load_validated::<Vec<HeatmapPoint>>(HEATMAP).await
    }

    pub async fn pass_network(&self) -> Result<Value, ApiError> {
        self.load_validated::<PassNetwork>(PASS_NETWORK).await
    }

    pub async fn tracking(&self) -> Result<Value, ApiError> {
        self.load_validated::<Vec<TrackingPoint>>(TRACKING).await
    }

    pub async fn offside(&self) -> Result<Value, ApiError> {
        self.load_validated::<Vec<OffsideEvent>>(OFFSIDE).await
    }

    pub async fn fouls(&self) -> Result<Value, ApiError> {
        self.load_validated::<Vec<FoulEvent>>(FOULS).await
    }

    pub async fn goal_prediction(&self) -> Result<Value, ApiError> {
        self.load_validated::<GoalPrediction>(GOAL_PREDICTION).await
    }

    /// Whether the root directory exists, and which fixtures are in it.
    pub async fn status(&self) -> (bool, BTreeMap<String, bool>) {
        let dir_ok = tokio::fs::metadata(self.root.as_path())
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);

        let mut present = BTreeMap::new();
        for name in FIXTURE_FILES {
            let exists = tokio::fs::try_exists(self.root.join(name)).await.unwrap_or(false);
            present.insert(name.to_string(), exists);
        }

        (dir_ok, present)
    }
}
