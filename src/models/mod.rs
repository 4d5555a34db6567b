use serde::{Serialize, Deserialize};

/// Bounds check run on every record after it is read from a fixture.
///
/// Returns a message naming the first field that is out of range.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), String> {
        self.iter()
            .enumerate()
            .try_for_each(|(i, item)| item.validate().map_err(|e| format!("[{}]: {}", i, e)))
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), String> {
    // NaN fails both comparisons
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(format!("{} must be between {} and {}, got {}", field, min, max, value))
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<(), String> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(format!("{} must be non-negative, got {}", field, value))
    }
}

fn check_pitch(x: f64, y: f64) -> Result<(), String> {
    check_range("x", x, 0.0, 100.0)?;
    check_range("y", y, 0.0, 100.0)
}

// ---------------------------------------------------------------------------
// Tactical analysis
// ---------------------------------------------------------------------------

/// A single heatmap cell on the 0-100 pitch grid
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HeatmapPoint {
    pub x: i64,
    pub y: i64,
    pub intensity: f64,
}

impl Validate for HeatmapPoint {
    fn validate(&self) -> Result<(), String> {
        check_pitch(self.x as f64, self.y as f64)?;
        check_range("intensity", self.intensity, 0.0, 1.0)
    }
}

/// Number of passes from one player to another
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PassConnection {
    #[serde(rename = "from")]
    pub from_player: i64,
    #[serde(rename = "to")]
    pub to_player: i64,
    pub count: i64,
}

impl Validate for PassConnection {
    fn validate(&self) -> Result<(), String> {
        if self.count < 0 {
            return Err(format!("count must be non-negative, got {}", self.count));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PassNetwork {
    pub passes: Vec<PassConnection>,
}

impl Validate for PassNetwork {
    fn validate(&self) -> Result<(), String> {
        self.passes.validate().map_err(|e| format!("passes{}", e))
    }
}

/// Player position sample. Speed is in m/s when the tracker reports it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TrackingPoint {
    pub player_id: i64,
    pub timestamp: f64,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl Validate for TrackingPoint {
    fn validate(&self) -> Result<(), String> {
        check_non_negative("timestamp", self.timestamp)?;
        check_pitch(self.x, self.y)?;
        match self.speed {
            Some(speed) => check_non_negative("speed", speed),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Match decisions
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OffsideEvent {
    pub player_id: i64,
    pub timestamp: f64,
    pub x: f64,
    pub y: f64,
    pub is_correct: bool,
}

impl Validate for OffsideEvent {
    fn validate(&self) -> Result<(), String> {
        check_non_negative("timestamp", self.timestamp)?;
        check_pitch(self.x, self.y)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    Minor,
    Major,
    YellowCard,
    RedCard,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FoulEvent {
    pub foul_id: i64,
    pub player_committed: i64,
    pub player_suffered: i64,
    pub timestamp: f64,
    pub x: f64,
    pub y: f64,
    pub severity: SeverityLevel,
    pub is_correct: bool,
}

impl Validate for FoulEvent {
    fn validate(&self) -> Result<(), String> {
        check_non_negative("timestamp", self.timestamp)?;
        check_pitch(self.x, self.y)
    }
}

/// Expected-goals estimate for a single shot
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GoalPrediction {
    pub shot_x: f64,
    pub shot_y: f64,
    #[serde(rename = "xG")]
    pub xg: f64,
    pub is_goal: bool,
}

impl Validate for GoalPrediction {
    fn validate(&self) -> Result<(), String> {
        check_range("shot_x", self.shot_x, 0.0, 100.0)?;
        check_range("shot_y", self.shot_y, 0.0, 100.0)?;
        check_range("xG", self.xg, 0.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// Service responses
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub docs: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Acknowledgment returned by the upload stub
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub video_id: i64,
    pub filename: Option<String>,
    pub content_type: String,
}
