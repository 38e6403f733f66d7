// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AbilityFamily, AbilityFilter, FilterConfig, Hero, HeroField, HeroId, MatchResult, Owner, Rarity, ScoreBreakdown};
pub use requests::{AbilityFilterRequest, FilterRequest, RankPairsRequest};
pub use responses::{ErrorResponse, HealthResponse, PairView, RankPairsResponse};
