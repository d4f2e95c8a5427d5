use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RGameSession {
    pub game_type: String,
    pub hits: i32,
    pub errors: i32,
    pub levels_completed: i32,
    pub duration_seconds: i32,
}

/// The data contract the report exporter renders. Layout of the exported
/// document is a frontend concern.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub sessions: usize,
    pub total_levels: i64,
    pub total_hits: i64,
    pub total_errors: i64,
    pub avg_session_seconds: f64,
    pub by_game: Vec<GameTypeStats>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameTypeStats {
    pub game_type: String,
    pub sessions: usize,
    pub total_hits: i64,
    pub total_errors: i64,
    pub levels_completed: i64,
}
