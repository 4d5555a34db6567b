pub mod health;     // Root, liveness, readiness and endpoint catalogue
pub mod tactical;   // Heatmap, pass network, tracking
pub mod decisions;  // Offside, fouls, goal prediction (xG)
pub mod upload;     // Video upload stub
