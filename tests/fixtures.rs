use football_analytics_api::models::*;
use serde::de::DeserializeOwned;
use std::path::Path;

fn load<T: DeserializeOwned>(file: &str) -> T {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("dummy_data").join(file);
    let raw = std::fs::read_to_string(&path).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn heatmap_fixture_in_bounds() {
    let points: Vec<HeatmapPoint> = load("heatmap.json");
    assert!(!points.is_empty());
    points.validate().unwrap();
    assert!(points.iter().all(|p| (0.0..=1.0).contains(&p.intensity)));
}

#[test]
fn pass_network_fixture_in_bounds() {
    let network: PassNetwork = load("pass_network.json");
    network.validate().unwrap();
    assert_eq!(network.passes[0].from_player, 8);
    assert_eq!(network.passes[0].to_player, 10);
    assert_eq!(network.passes[0].count, 12);
}

#[test]
fn tracking_fixture_in_bounds() {
    let points: Vec<TrackingPoint> = load("tracking.json");
    points.validate().unwrap();
    assert!(points.iter().any(|p| p.speed.is_none()));
}

#[test]
fn offside_fixture_in_bounds() {
    let events: Vec<OffsideEvent> = load("offside.json");
    events.validate().unwrap();
    assert!(events.iter().all(|e| e.timestamp >= 0.0));
}

#[test]
fn fouls_fixture_covers_every_severity() {
    let fouls: Vec<FoulEvent> = load("fouls.json");
    fouls.validate().unwrap();
    for severity in [
        SeverityLevel::Minor,
        SeverityLevel::Major,
        SeverityLevel::YellowCard,
        SeverityLevel::RedCard,
    ] {
        assert!(fouls.iter().any(|f| f.severity == severity), "{:?}", severity);
    }
}

#[test]
fn goal_prediction_fixture_in_bounds() {
    let shot: GoalPrediction = load("goal_prediction.json");
    shot.validate().unwrap();
    assert!((0.0..=1.0).contains(&shot.xg));
    assert!(!shot.is_goal);
}
