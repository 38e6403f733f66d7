//! Summon Match - pair-matching and ranking service for hero summoning
//!
//! This library provides the pairing engine: every unordered pair of heroes
//! is run through a short-circuiting filter pipeline, admitted pairs are
//! scored by class and ability complementarity, and the result is sorted.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{compatibility_score, evaluate_pair, rank_pairs, ConsideredPairs, PairingError};
pub use crate::models::{AbilityFamily, AbilityFilter, FilterConfig, Hero, HeroId, MatchResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let a = Hero { id: "1".into(), main_class: Some(0), ..Default::default() };
        let b = Hero { id: "2".into(), main_class: Some(1), ..Default::default() };
        assert_eq!(compatibility_score(&a, &b), 1);
    }
}
