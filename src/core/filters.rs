use serde::{Deserialize, Serialize};

use crate::core::classes::is_complementary_opt;
use crate::core::considered::ConsideredPairs;
use crate::core::scoring::count_ability_matches;
use crate::models::{FilterConfig, Hero};

/// Predicate that rejected a candidate pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    AlreadyConsidered,
    MissingParticipant,
    Cooldown,
    Level,
    Rarity,
    Generation,
    BothForHire,
    MainClass,
    SubClass,
    Summons,
    Ability,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::AlreadyConsidered => "already_considered",
            RejectReason::MissingParticipant => "missing_participant",
            RejectReason::Cooldown => "cooldown",
            RejectReason::Level => "level",
            RejectReason::Rarity => "rarity",
            RejectReason::Generation => "generation",
            RejectReason::BothForHire => "both_for_hire",
            RejectReason::MainClass => "main_class",
            RejectReason::SubClass => "sub_class",
            RejectReason::Summons => "summons",
            RejectReason::Ability => "ability",
        }
    }
}

/// Check a candidate pair against the filters without recording it
///
/// Predicates run in a fixed order and the first failure is returned. A
/// missing attribute on an enabled predicate counts as a mismatch.
pub fn check_pair(
    a: &Hero,
    b: &Hero,
    filters: &FilterConfig,
    considered: &ConsideredPairs,
    now: i64,
) -> Result<(), RejectReason> {
    if considered.contains(&a.id, &b.id) {
        return Err(RejectReason::AlreadyConsidered);
    }

    if let Some(required) = &filters.hero_id {
        if *required != a.id && *required != b.id {
            return Err(RejectReason::MissingParticipant);
        }
    }

    if filters.cooldown && (a.is_on_cooldown(now) || b.is_on_cooldown(now)) {
        return Err(RejectReason::Cooldown);
    }

    if filters.level && !same_known(a.level, b.level) {
        return Err(RejectReason::Level);
    }

    if filters.rarity && !same_known(a.rarity, b.rarity) {
        return Err(RejectReason::Rarity);
    }

    if filters.generation && !same_known(a.generation, b.generation) {
        return Err(RejectReason::Generation);
    }

    // Two hired heroes can never be summoned together
    if a.is_for_hire() && b.is_for_hire() {
        return Err(RejectReason::BothForHire);
    }

    if filters.main_class && !is_complementary_opt(a.main_class, b.main_class) {
        return Err(RejectReason::MainClass);
    }

    if filters.sub_class && !is_complementary_opt(a.sub_class, b.sub_class) {
        return Err(RejectReason::SubClass);
    }

    if filters.summons && !same_known(a.summons_remaining, b.summons_remaining) {
        return Err(RejectReason::Summons);
    }

    if let Some(ability) = &filters.ability {
        if count_ability_matches(a, b, ability.family) < ability.matches_required {
            return Err(RejectReason::Ability);
        }
    }

    Ok(())
}

/// Decide whether a pair is admissible, marking it considered on acceptance
pub fn evaluate_pair(
    a: &Hero,
    b: &Hero,
    filters: &FilterConfig,
    considered: &mut ConsideredPairs,
    now: i64,
) -> bool {
    match check_pair(a, b, filters, considered, now) {
        Ok(()) => {
            considered.insert(&a.id, &b.id);
            true
        }
        Err(_) => false,
    }
}

#[inline]
fn same_known<T: PartialEq>(a: Option<T>, b: Option<T>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}
