use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::error::PairingError;
use crate::models::domain::{AbilityFilter, FilterConfig, Hero, HeroId};

/// Request to rank candidate pairs
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankPairsRequest {
    /// Heroes to pair; the preloaded roster is used when absent
    #[serde(default)]
    pub heroes: Option<Vec<Hero>>,
    #[serde(default)]
    pub filters: FilterRequest,
    #[validate(range(min = 1, max = 1000))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Filter values as collected from the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterRequest {
    #[serde(alias = "hero_id", rename = "heroId", default)]
    pub hero_id: Option<String>,
    #[serde(default = "default_cooldown")]
    pub cooldown: bool,
    #[serde(default)]
    pub level: bool,
    #[serde(default)]
    pub rarity: bool,
    #[serde(default)]
    pub generation: bool,
    #[serde(default)]
    pub summons: bool,
    #[serde(alias = "main_class", rename = "mainClass", default)]
    pub main_class: bool,
    #[serde(alias = "sub_class", rename = "subClass", default)]
    pub sub_class: bool,
    #[serde(default)]
    pub ability: Option<AbilityFilterRequest>,
}

fn default_cooldown() -> bool {
    true
}

impl Default for FilterRequest {
    fn default() -> Self {
        Self {
            hero_id: None,
            cooldown: default_cooldown(),
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

/// Ability threshold as collected from the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityFilterRequest {
    #[serde(rename = "type")]
    pub family: String,
    #[serde(alias = "matches_required", rename = "matchesRequired")]
    pub matches_required: i64,
}

impl TryFrom<FilterRequest> for FilterConfig {
    type Error = PairingError;

    fn try_from(req: FilterRequest) -> Result<Self, Self::Error> {
        let hero_id = req
            .hero_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .map(HeroId::from);

        let ability = req
            .ability
            .map(|a| AbilityFilter::parse(&a.family, a.matches_required))
            .transpose()?;

        Ok(FilterConfig {
            hero_id,
            cooldown: req.cooldown,
            level: req.level,
            rarity: req.rarity,
            generation: req.generation,
            summons: req.summons,
            main_class: req.main_class,
            sub_class: req.sub_class,
            ability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::AbilityFamily;

    #[test]
    fn test_blank_hero_id_is_ignored() {
        let req = FilterRequest {
            hero_id: Some("   ".to_string()),
            ..FilterRequest::default()
        };
        let filters = FilterConfig::try_from(req).unwrap();
        assert_eq!(filters.hero_id, None);

        let req = FilterRequest {
            hero_id: Some(" 42 ".to_string()),
            ..FilterRequest::default()
        };
        let filters = FilterConfig::try_from(req).unwrap();
        assert_eq!(filters.hero_id, Some(HeroId::from("42")));
    }

    #[test]
    fn test_empty_filters_match_defaults() {
        let req: FilterRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(FilterConfig::try_from(req).unwrap(), FilterConfig::default());
    }

    #[test]
    fn test_ability_request_parsing() {
        let req: FilterRequest = serde_json::from_str(
            r#"{"cooldown": false, "ability": {"type": "elite", "matchesRequired": 1}}"#,
        )
        .unwrap();
        let filters = FilterConfig::try_from(req).unwrap();

        assert!(!filters.cooldown);
        let ability = filters.ability.unwrap();
        assert_eq!(ability.family, AbilityFamily::Elite);
        assert_eq!(ability.matches_required, 1);
    }

    #[test]
    fn test_invalid_ability_family() {
        let req: FilterRequest =
            serde_json::from_str(r#"{"ability": {"type": "mythic", "matchesRequired": 1}}"#).unwrap();
        assert!(matches!(
            FilterConfig::try_from(req),
            Err(PairingError::InvalidFilterConfig(_))
        ));
    }

    #[test]
    fn test_negative_threshold() {
        let req: FilterRequest =
            serde_json::from_str(r#"{"ability": {"type": "basic", "matchesRequired": -2}}"#).unwrap();
        assert!(matches!(
            FilterConfig::try_from(req),
            Err(PairingError::InvalidFilterConfig(_))
        ));
    }

    #[test]
    fn test_limit_validation() {
        let req: RankPairsRequest = serde_json::from_str(r#"{"limit": 0}"#).unwrap();
        assert!(req.validate().is_err());

        let req: RankPairsRequest = serde_json::from_str(r#"{"limit": 50}"#).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.filters.cooldown);
    }
}
