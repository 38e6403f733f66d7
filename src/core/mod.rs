// Core algorithm exports
pub mod classes;
pub mod considered;
pub mod error;
pub mod filters;
pub mod ranker;
pub mod scoring;

pub use classes::{is_complementary, forms_pair};
pub use considered::ConsideredPairs;
pub use error::PairingError;
pub use filters::{check_pair, evaluate_pair, RejectReason};
pub use ranker::{group_by_main_class, rank_pairs, rank_pairs_with_stats, validate_heroes, RankOutcome, RankStats};
pub use scoring::{compatibility_score, count_ability_matches, score_breakdown};
