use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::considered::ConsideredPairs;
use crate::core::error::{PairingError, Result};
use crate::core::filters::{check_pair, RejectReason};
use crate::core::scoring::compatibility_score;
use crate::models::{FilterConfig, Hero, MatchResult};

/// Counters collected during one ranking run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankStats {
    pub heroes: usize,
    pub candidate_pairs: usize,
    pub skipped: usize,
    pub admitted: usize,
    pub rejections: BTreeMap<RejectReason, usize>,
}

/// Result of the ranking process
#[derive(Debug)]
pub struct RankOutcome {
    pub pairs: Vec<MatchResult>,
    pub stats: RankStats,
}

/// Rank every admissible pair of heroes by compatibility
///
/// # Arguments
/// * `heroes` - Hero records; grouped input is flattened in iteration order
/// * `filters` - Filters applied to each candidate pair
/// * `now` - Current unix time in seconds, for the cooldown filter
///
/// # Returns
/// All admitted pairs, highest score first. Pairs with equal scores keep
/// the order in which they were found.
pub fn rank_pairs<'a, I>(heroes: I, filters: &FilterConfig, now: i64) -> Result<Vec<MatchResult>>
where
    I: IntoIterator<Item = &'a Hero>,
{
    let never = AtomicBool::new(false);
    rank_pairs_with_stats(heroes, filters, now, &never).map(|outcome| outcome.pairs)
}

/// Same as [`rank_pairs`], also returning run statistics
///
/// `cancel` is checked before each hero's row of comparisons; once set the
/// run stops with [`PairingError::Cancelled`] and no partial results.
pub fn rank_pairs_with_stats<'a, I>(
    heroes: I,
    filters: &FilterConfig,
    now: i64,
    cancel: &AtomicBool,
) -> Result<RankOutcome>
where
    I: IntoIterator<Item = &'a Hero>,
{
    let heroes: Vec<&Hero> = heroes.into_iter().collect();
    validate_heroes(&heroes, filters)?;

    let mut considered = ConsideredPairs::with_capacity(heroes.len());
    let mut stats = RankStats {
        heroes: heroes.len(),
        ..RankStats::default()
    };
    let mut pairs = Vec::new();

    for (i, a) in heroes.iter().enumerate() {
        if cancel.load(Ordering::Relaxed) {
            tracing::debug!("Ranking cancelled after {} of {} heroes", i, heroes.len());
            return Err(PairingError::Cancelled);
        }

        for b in &heroes[i + 1..] {
            stats.candidate_pairs += 1;

            if considered.contains(&a.id, &b.id) {
                stats.skipped += 1;
                continue;
            }

            match check_pair(a, b, filters, &considered, now) {
                Ok(()) => {
                    considered.insert(&a.id, &b.id);
                    pairs.push(MatchResult {
                        hero_a: a.id.clone(),
                        hero_b: b.id.clone(),
                        score: compatibility_score(a, b),
                    });
                    stats.admitted += 1;
                }
                Err(reason) => {
                    *stats.rejections.entry(reason).or_default() += 1;
                }
            }
        }
    }

    // Stable: equal scores stay in discovery order
    pairs.sort_by(|x, y| y.score.cmp(&x.score));

    tracing::debug!(
        "Ranked {} heroes: {} candidate pairs, {} admitted",
        stats.heroes,
        stats.candidate_pairs,
        stats.admitted
    );

    Ok(RankOutcome { pairs, stats })
}

/// Check hero records before any pair is enumerated
///
/// Rejects blank or duplicate ids, records listed both for sale and for hire,
/// and records missing a field that one of the enabled filters reads.
pub fn validate_heroes(heroes: &[&Hero], filters: &FilterConfig) -> Result<()> {
    let required = filters.required_fields();
    let mut seen = HashSet::with_capacity(heroes.len());

    for (position, hero) in heroes.iter().enumerate() {
        if hero.id.is_blank() {
            return Err(PairingError::InvalidInput(format!(
                "hero at position {} is missing `id`",
                position
            )));
        }

        if !seen.insert(&hero.id) {
            return Err(PairingError::InvalidInput(format!(
                "hero {} appears more than once",
                hero.id
            )));
        }

        if hero.is_for_sale() && hero.is_for_hire() {
            return Err(PairingError::InvalidInput(format!(
                "hero {} carries both `salePrice` and `assistingPrice`",
                hero.id
            )));
        }

        if let Some(field) = required.iter().find(|field| !field.is_present(hero)) {
            return Err(PairingError::InvalidInput(format!(
                "hero {} is missing `{}`",
                hero.id,
                field.name()
            )));
        }
    }

    Ok(())
}

/// Group heroes by main class for display
///
/// Grouping is organisational only; ranking always compares every hero with
/// every other hero. Groups iterate in ascending class code (heroes without a
/// class first) and keep input order within a group, so ranking the flattened
/// groups can order tied pairs differently from ranking the input directly.
pub fn group_by_main_class(heroes: &[Hero]) -> BTreeMap<Option<u8>, Vec<&Hero>> {
    let mut groups: BTreeMap<Option<u8>, Vec<&Hero>> = BTreeMap::new();
    for hero in heroes {
        groups.entry(hero.main_class).or_default().push(hero);
    }
    groups
}
