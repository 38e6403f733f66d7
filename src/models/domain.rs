use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::classes::{ADVANCED_PAIRS, BASIC_PAIRS, ELITE_PAIRS};
use crate::core::error::PairingError;

/// Hero identifier
///
/// The upstream API hands ids out either as strings or as integers; both are
/// stored as text so ids compare the same regardless of how they arrived.
/// A `null` id becomes blank and is rejected by the ranker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawHeroId", into = "String")]
pub struct HeroId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawHeroId {
    Text(String),
    Number(u64),
    Missing,
}

impl From<RawHeroId> for HeroId {
    fn from(raw: RawHeroId) -> Self {
        match raw {
            RawHeroId::Text(s) => HeroId(s),
            RawHeroId::Number(n) => HeroId(n.to_string()),
            RawHeroId::Missing => HeroId::default(),
        }
    }
}

impl From<HeroId> for String {
    fn from(id: HeroId) -> Self {
        id.0
    }
}

impl From<&str> for HeroId {
    fn from(s: &str) -> Self {
        HeroId(s.to_string())
    }
}

impl From<String> for HeroId {
    fn from(s: String) -> Self {
        HeroId(s)
    }
}

impl From<u64> for HeroId {
    fn from(n: u64) -> Self {
        HeroId(n.to_string())
    }
}

impl HeroId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the id is empty or only whitespace
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hero owner as returned by the game API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub name: Option<String>,
}

/// Hero record with class, breeding and ability data
///
/// Every attribute is optional and a missing id deserializes blank, so that
/// incomplete upstream records survive deserialization and can be reported
/// by the ranker instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub id: HeroId,
    #[serde(rename = "mainClass", default)]
    pub main_class: Option<u8>,
    #[serde(rename = "subClass", default)]
    pub sub_class: Option<u8>,
    #[serde(default)]
    pub generation: Option<u16>,
    #[serde(default)]
    pub rarity: Option<u8>,
    #[serde(default)]
    pub level: Option<u16>,
    #[serde(rename = "summonsRemaining", default)]
    pub summons_remaining: Option<u8>,
    #[serde(rename = "nextSummonTime", default)]
    pub next_summon_time: Option<i64>,
    #[serde(default)]
    pub active1: Option<u8>,
    #[serde(default)]
    pub active2: Option<u8>,
    #[serde(default)]
    pub passive1: Option<u8>,
    #[serde(default)]
    pub passive2: Option<u8>,
    #[serde(rename = "salePrice", default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,
    #[serde(rename = "assistingPrice", default, skip_serializing_if = "Option::is_none")]
    pub assisting_price: Option<String>,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

impl Hero {
    /// Ability slots in `active1, active2, passive1, passive2` order
    pub fn abilities(&self) -> [Option<u8>; 4] {
        [self.active1, self.active2, self.passive1, self.passive2]
    }

    /// A hero is restricted while its `nextSummonTime` lies in the future.
    /// Unknown timestamps count as restricted.
    pub fn is_on_cooldown(&self, now: i64) -> bool {
        self.next_summon_time.map_or(true, |t| t > now)
    }

    pub fn is_for_hire(&self) -> bool {
        self.assisting_price.is_some()
    }

    pub fn is_for_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.owner.as_ref().and_then(|o| o.name.as_deref())
    }

    pub fn rarity_tier(&self) -> Option<Rarity> {
        self.rarity.and_then(Rarity::from_code)
    }
}

/// Hero attributes the filter predicates can depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroField {
    MainClass,
    SubClass,
    Generation,
    Rarity,
    Level,
    SummonsRemaining,
    NextSummonTime,
    Active1,
    Active2,
    Passive1,
    Passive2,
}

impl HeroField {
    /// Wire name of the field
    pub fn name(self) -> &'static str {
        match self {
            HeroField::MainClass => "mainClass",
            HeroField::SubClass => "subClass",
            HeroField::Generation => "generation",
            HeroField::Rarity => "rarity",
            HeroField::Level => "level",
            HeroField::SummonsRemaining => "summonsRemaining",
            HeroField::NextSummonTime => "nextSummonTime",
            HeroField::Active1 => "active1",
            HeroField::Active2 => "active2",
            HeroField::Passive1 => "passive1",
            HeroField::Passive2 => "passive2",
        }
    }

    pub fn is_present(self, hero: &Hero) -> bool {
        match self {
            HeroField::MainClass => hero.main_class.is_some(),
            HeroField::SubClass => hero.sub_class.is_some(),
            HeroField::Generation => hero.generation.is_some(),
            HeroField::Rarity => hero.rarity.is_some(),
            HeroField::Level => hero.level.is_some(),
            HeroField::SummonsRemaining => hero.summons_remaining.is_some(),
            HeroField::NextSummonTime => hero.next_summon_time.is_some(),
            HeroField::Active1 => hero.active1.is_some(),
            HeroField::Active2 => hero.active2.is_some(),
            HeroField::Passive1 => hero.passive1.is_some(),
            HeroField::Passive2 => hero.passive2.is_some(),
        }
    }
}

/// Rarity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
    Mythic,
}

impl Rarity {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Rarity::Common),
            1 => Some(Rarity::Uncommon),
            2 => Some(Rarity::Rare),
            3 => Some(Rarity::Legendary),
            4 => Some(Rarity::Mythic),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
            Rarity::Mythic => "mythic",
        }
    }
}

/// Ability families with their complementary code pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityFamily {
    Basic,
    Advanced,
    Elite,
}

impl AbilityFamily {
    pub const ALL: [AbilityFamily; 3] = [
        AbilityFamily::Basic,
        AbilityFamily::Advanced,
        AbilityFamily::Elite,
    ];

    /// Canonical complementary pairs of this family
    pub fn pairs(self) -> &'static [(u8, u8)] {
        match self {
            AbilityFamily::Basic => &BASIC_PAIRS,
            AbilityFamily::Advanced => &ADVANCED_PAIRS,
            AbilityFamily::Elite => &ELITE_PAIRS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AbilityFamily::Basic => "basic",
            AbilityFamily::Advanced => "advanced",
            AbilityFamily::Elite => "elite",
        }
    }
}

impl FromStr for AbilityFamily {
    type Err = PairingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AbilityFamily::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                PairingError::InvalidFilterConfig(format!(
                    "unknown ability family '{}', expected one of: basic, advanced, elite",
                    s
                ))
            })
    }
}

/// Minimum number of complementary ability slots of one family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityFilter {
    pub family: AbilityFamily,
    pub matches_required: u32,
}

impl AbilityFilter {
    /// Build from raw user values, rejecting unknown families and negative thresholds
    pub fn parse(family: &str, matches_required: i64) -> Result<Self, PairingError> {
        let family = family.parse::<AbilityFamily>()?;
        let matches_required = u32::try_from(matches_required).map_err(|_| {
            PairingError::InvalidFilterConfig(format!(
                "matchesRequired must be a non-negative integer, got {}",
                matches_required
            ))
        })?;

        Ok(Self {
            family,
            matches_required,
        })
    }
}

/// Filters applied to every candidate pair during one ranking run
///
/// Built from a [`FilterRequest`](crate::models::FilterRequest), which is the
/// only wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Only pairs containing this hero are admitted
    pub hero_id: Option<HeroId>,
    /// Reject pairs where either hero is still cooling down
    pub cooldown: bool,
    pub level: bool,
    pub rarity: bool,
    pub generation: bool,
    pub summons: bool,
    pub main_class: bool,
    pub sub_class: bool,
    pub ability: Option<AbilityFilter>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            hero_id: None,
            cooldown: true,
            level: false,
            rarity: false,
            generation: false,
            summons: false,
            main_class: false,
            sub_class: false,
            ability: None,
        }
    }
}

impl FilterConfig {
    /// Every filter disabled, including cooldown
    pub fn permissive() -> Self {
        Self {
            cooldown: false,
            ..Self::default()
        }
    }

    /// Hero fields the enabled predicates need
    pub fn required_fields(&self) -> Vec<HeroField> {
        let mut fields = Vec::new();
        if self.cooldown {
            fields.push(HeroField::NextSummonTime);
        }
        if self.level {
            fields.push(HeroField::Level);
        }
        if self.rarity {
            fields.push(HeroField::Rarity);
        }
        if self.generation {
            fields.push(HeroField::Generation);
        }
        if self.main_class {
            fields.push(HeroField::MainClass);
        }
        if self.sub_class {
            fields.push(HeroField::SubClass);
        }
        if self.summons {
            fields.push(HeroField::SummonsRemaining);
        }
        if self.ability.is_some() {
            fields.extend([
                HeroField::Active1,
                HeroField::Active2,
                HeroField::Passive1,
                HeroField::Passive2,
            ]);
        }
        fields
    }
}

/// Ranked candidate pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "heroA")]
    pub hero_a: HeroId,
    #[serde(rename = "heroB")]
    pub hero_b: HeroId,
    pub score: u32,
}

/// Per-component contribution to a compatibility score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(rename = "mainClass")]
    pub main_class: u32,
    #[serde(rename = "subClass")]
    pub sub_class: u32,
    pub basic: u32,
    pub advanced: u32,
    pub elite: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.main_class + self.sub_class + self.basic + self.advanced + self.elite
    }
}
