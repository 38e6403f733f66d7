use crate::models::{AbilityFamily, Hero, ScoreBreakdown};
use crate::core::classes::{forms_pair, is_complementary_opt};

/// Calculate the compatibility score of two heroes
///
/// Scoring formula:
/// score = (
///     main_class_pair +            # 1 if main classes are complementary
///     sub_class_pair +             # 1 if sub classes are complementary
///     ability_pairs                # 1 per (canonical pair, slot) hit, all families
/// )
///
/// The score is computed the same way whatever filters were active, and is
/// symmetric in its arguments.
pub fn compatibility_score(a: &Hero, b: &Hero) -> u32 {
    score_breakdown(a, b).total()
}

/// Calculate each component of the compatibility score
pub fn score_breakdown(a: &Hero, b: &Hero) -> ScoreBreakdown {
    ScoreBreakdown {
        main_class: u32::from(is_complementary_opt(a.main_class, b.main_class)),
        sub_class: u32::from(is_complementary_opt(a.sub_class, b.sub_class)),
        basic: count_ability_matches(a, b, AbilityFamily::Basic),
        advanced: count_ability_matches(a, b, AbilityFamily::Advanced),
        elite: count_ability_matches(a, b, AbilityFamily::Elite),
    }
}

/// Count complementary ability slots of one family
///
/// Every canonical pair of the family is checked against each of the four
/// slots independently; a slot counts when hero A's value and hero B's value
/// in that same slot form the pair.
#[inline]
pub fn count_ability_matches(a: &Hero, b: &Hero, family: AbilityFamily) -> u32 {
    let slots_a = a.abilities();
    let slots_b = b.abilities();

    family
        .pairs()
        .iter()
        .map(|&pair| {
            slots_a
                .iter()
                .zip(slots_b.iter())
                .filter(|&(sa, sb)| forms_pair(*sa, *sb, pair))
                .count() as u32
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_hero(id: &str, main: u8, sub: u8, abilities: [u8; 4]) -> Hero {
        Hero {
            id: id.into(),
            main_class: Some(main),
            sub_class: Some(sub),
            active1: Some(abilities[0]),
            active2: Some(abilities[1]),
            passive1: Some(abilities[2]),
            passive2: Some(abilities[3]),
            ..Default::default()
        }
    }

    #[test]
    fn test_class_complementarity_scores() {
        let a = create_test_hero("1", 0, 2, [8, 8, 8, 8]);
        let b = create_test_hero("2", 1, 3, [8, 8, 8, 8]);

        let breakdown = score_breakdown(&a, &b);
        assert_eq!(breakdown.main_class, 1);
        assert_eq!(breakdown.sub_class, 1);
        assert_eq!(compatibility_score(&a, &b), 2);
    }

    #[test]
    fn test_ability_slots_counted_independently() {
        // active1: 0/1, active2: 17/16, passive1: 24/25, passive2: 2/2 (no pair)
        let a = create_test_hero("1", 10, 10, [0, 17, 24, 2]);
        let b = create_test_hero("2", 10, 10, [1, 16, 25, 2]);

        let breakdown = score_breakdown(&a, &b);
        assert_eq!(breakdown.basic, 1);
        assert_eq!(breakdown.advanced, 1);
        assert_eq!(breakdown.elite, 1);
        assert_eq!(breakdown.main_class, 0);
        assert_eq!(compatibility_score(&a, &b), 3);
    }

    #[test]
    fn test_cross_slot_values_do_not_count() {
        // 0 in active1 and 1 in active2 are in different slots
        let a = create_test_hero("1", 10, 10, [0, 8, 8, 8]);
        let b = create_test_hero("2", 10, 10, [8, 1, 8, 8]);

        assert_eq!(count_ability_matches(&a, &b, AbilityFamily::Basic), 0);
    }

    #[test]
    fn test_score_is_unbounded_sum() {
        let a = create_test_hero("1", 0, 4, [0, 2, 4, 6]);
        let b = create_test_hero("2", 1, 5, [1, 3, 5, 7]);

        assert_eq!(count_ability_matches(&a, &b, AbilityFamily::Basic), 4);
        assert_eq!(compatibility_score(&a, &b), 6);
    }

    #[test]
    fn test_score_symmetric() {
        let a = create_test_hero("1", 0, 5, [0, 17, 24, 6]);
        let b = create_test_hero("2", 1, 4, [1, 16, 25, 7]);

        assert_eq!(compatibility_score(&a, &b), compatibility_score(&b, &a));
        assert_eq!(score_breakdown(&a, &b), score_breakdown(&b, &a));
    }

    #[test]
    fn test_missing_fields_score_zero() {
        let a = Hero { id: "1".into(), ..Default::default() };
        let b = create_test_hero("2", 1, 1, [1, 1, 1, 1]);

        assert_eq!(compatibility_score(&a, &b), 0);
    }
}
