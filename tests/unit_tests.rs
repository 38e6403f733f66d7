// Unit tests for Summon Match

use summon_match::core::{
    classes::is_complementary,
    considered::ConsideredPairs,
    filters::{check_pair, evaluate_pair, RejectReason},
    ranker::rank_pairs,
    scoring::{compatibility_score, count_ability_matches, score_breakdown},
};
use summon_match::models::{AbilityFamily, AbilityFilter, FilterConfig, Hero};

const NOW: i64 = 1_720_000_000;

fn create_test_hero(id: &str) -> Hero {
    Hero {
        id: id.into(),
        main_class: Some(20),
        sub_class: Some(20),
        generation: Some(1),
        rarity: Some(0),
        level: Some(1),
        summons_remaining: Some(5),
        next_summon_time: Some(NOW - 3600),
        active1: Some(10),
        active2: Some(10),
        passive1: Some(10),
        passive2: Some(10),
        ..Default::default()
    }
}

#[test]
fn test_complementary_main_class_with_filters_off() {
    let mut a = create_test_hero("1");
    let mut b = create_test_hero("2");
    a.main_class = Some(0);
    b.main_class = Some(1);
    let mut considered = ConsideredPairs::new();

    assert!(evaluate_pair(&a, &b, &FilterConfig::permissive(), &mut considered, NOW));
    assert_eq!(score_breakdown(&a, &b).main_class, 1);
    assert_eq!(compatibility_score(&a, &b), 1);
}

#[test]
fn test_cooldown_rejects_pair() {
    let mut a = create_test_hero("1");
    let mut b = create_test_hero("2");
    a.next_summon_time = Some(NOW + 100);
    b.next_summon_time = Some(NOW - 1);
    let mut considered = ConsideredPairs::new();

    let filters = FilterConfig { cooldown: true, ..FilterConfig::permissive() };
    assert!(!evaluate_pair(&a, &b, &filters, &mut considered, NOW));
    assert!(!evaluate_pair(&b, &a, &filters, &mut considered, NOW));
}

#[test]
fn test_hero_ready_at_its_summon_time() {
    let mut a = create_test_hero("1");
    let b = create_test_hero("2");
    a.next_summon_time = Some(NOW);

    let pairs = rank_pairs(&[a.clone(), b.clone()], &FilterConfig::default(), NOW).unwrap();
    assert_eq!(pairs.len(), 1);

    let pairs = rank_pairs(&[a, b], &FilterConfig::default(), NOW - 1).unwrap();
    assert!(pairs.is_empty());
}

#[test]
fn test_both_for_hire_rejected() {
    let mut a = create_test_hero("1");
    let mut b = create_test_hero("2");
    a.main_class = Some(0);
    b.main_class = Some(1);
    a.assisting_price = Some("30000000000000000000".to_string());
    b.assisting_price = Some("12000000000000000000".to_string());
    let mut considered = ConsideredPairs::new();

    assert!(!evaluate_pair(&a, &b, &FilterConfig::permissive(), &mut considered, NOW));
    assert!(!evaluate_pair(&a, &b, &FilterConfig::default(), &mut considered, NOW));
}

#[test]
fn test_required_participant() {
    let a = create_test_hero("1");
    let b = create_test_hero("2");
    let hero_42 = create_test_hero("42");
    let considered = ConsideredPairs::new();

    let filters = FilterConfig {
        hero_id: Some("42".into()),
        ..FilterConfig::permissive()
    };

    assert_eq!(
        check_pair(&a, &b, &filters, &considered, NOW),
        Err(RejectReason::MissingParticipant)
    );
    assert_eq!(check_pair(&a, &hero_42, &filters, &considered, NOW), Ok(()));

    // Pairs with hero 42 are still subject to the remaining predicates
    let filters = FilterConfig {
        hero_id: Some("42".into()),
        main_class: true,
        ..FilterConfig::permissive()
    };
    assert_eq!(
        check_pair(&a, &hero_42, &filters, &considered, NOW),
        Err(RejectReason::MainClass)
    );
}

#[test]
fn test_ability_threshold_not_met() {
    let mut a = create_test_hero("1");
    let mut b = create_test_hero("2");
    a.active2 = Some(2);
    b.active2 = Some(3);
    let mut considered = ConsideredPairs::new();

    assert_eq!(count_ability_matches(&a, &b, AbilityFamily::Basic), 1);

    let filters = FilterConfig {
        ability: Some(AbilityFilter::parse("basic", 2).unwrap()),
        ..FilterConfig::permissive()
    };
    assert!(!evaluate_pair(&a, &b, &filters, &mut considered, NOW));
    assert!(considered.is_empty());
}

#[test]
fn test_complementarity_requires_even_first() {
    assert!(is_complementary(2, 3));
    assert!(is_complementary(3, 2));
    assert!(!is_complementary(3, 4));
}

#[test]
fn test_score_counts_every_family() {
    let mut a = create_test_hero("1");
    let mut b = create_test_hero("2");
    a.active1 = Some(6);
    b.active1 = Some(7);
    a.active2 = Some(19);
    b.active2 = Some(18);
    a.passive1 = Some(25);
    b.passive1 = Some(24);
    a.passive2 = Some(16);
    b.passive2 = Some(17);

    let breakdown = score_breakdown(&a, &b);
    assert_eq!(breakdown.basic, 1);
    assert_eq!(breakdown.advanced, 2);
    assert_eq!(breakdown.elite, 1);
    assert_eq!(compatibility_score(&a, &b), 4);
}

#[test]
fn test_score_ignores_filters() {
    let mut a = create_test_hero("1");
    let mut b = create_test_hero("2");
    a.sub_class = Some(8);
    b.sub_class = Some(9);
    let mut considered = ConsideredPairs::new();

    // Sub class filter off, yet the score still credits the sub class pair
    assert!(evaluate_pair(&a, &b, &FilterConfig::default(), &mut considered, NOW));
    assert_eq!(compatibility_score(&a, &b), 1);
}
