use serde::{Deserialize, Serialize};
use crate::core::ranker::RankStats;
use crate::models::domain::{Hero, ScoreBreakdown};

/// A ranked pair resolved back to its hero records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairView {
    #[serde(rename = "heroA")]
    pub hero_a: Hero,
    #[serde(rename = "heroB")]
    pub hero_b: Hero,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

/// Response for the rank pairs endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankPairsResponse {
    pub pairs: Vec<PairView>,
    pub total_pairs: usize,
    pub hero_count: usize,
    pub stats: RankStats,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub roster_size: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
