//! End-to-end scenarios for the recommendation engine.
//!
//! Each scenario builds a small catalog fixture, runs a full query through
//! the recommender, and checks the observable assignment.

use painrx_core::{
    Catalog, DrugRecord, InteractionIndex, Outcome, RecommendationReport, Recommender, Strategy,
    UserProfile,
};

fn drug(
    name: &str,
    tags: &[&str],
    age: (u32, u32),
    pregnancy_safe: bool,
    alcohol_safe: bool,
    interactions: &[&str],
) -> DrugRecord {
    DrugRecord {
        name: name.into(),
        efficacy: tags.iter().map(|t| t.to_string()).collect(),
        min_age: age.0,
        max_age: age.1,
        pregnancy_safe,
        alcohol_safe,
        interactions: interactions.iter().map(|i| i.to_string()).collect(),
    }
}

fn pains(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn pregnant_user_gets_the_pregnancy_safe_drug() {
    let catalog = Catalog::from_records(vec![
        drug("DrugA", &["headache"], (18, 99), false, true, &[]),
        drug("DrugB", &["headache"], (0, 99), true, true, &[]),
    ]);
    let index = InteractionIndex::build(&catalog);
    let recommender = Recommender::new(&catalog, &index);

    let profile = UserProfile {
        age: 30,
        is_female: true,
        is_pregnant: true,
        is_heavy_drinker: false,
    };
    let result = recommender.recommend(&profile, &pains(&["headache"]));

    assert_eq!(result.strategy, Strategy::FullSearch);
    assert_eq!(result.entries[0].outcome.drug(), Some("DrugB"));
}

#[test]
fn heavy_drinker_skips_alcohol_unsafe_drug() {
    let catalog = Catalog::from_records(vec![
        drug("DrugA", &["fever"], (0, 99), true, false, &[]),
        drug("DrugB", &["fever"], (0, 99), true, true, &[]),
    ]);
    let index = InteractionIndex::build(&catalog);
    let recommender = Recommender::new(&catalog, &index);

    let mut profile = UserProfile::with_age(40);
    profile.is_heavy_drinker = true;
    let result = recommender.recommend(&profile, &pains(&["fever"]));

    assert_eq!(result.entries[0].outcome.drug(), Some("DrugB"));
}

#[test]
fn interacting_pair_forces_backtracking() {
    // DrugA is tried first for the headache but blocks the only fever
    // drug; a consistent assignment exists through DrugC.
    let catalog = Catalog::from_records(vec![
        drug("DrugA", &["headache"], (0, 99), true, true, &["DrugB"]),
        drug("DrugB", &["fever"], (0, 99), true, true, &[]),
        drug("DrugC", &["headache"], (0, 99), true, true, &[]),
    ]);
    let index = InteractionIndex::build(&catalog);
    let recommender = Recommender::new(&catalog, &index);

    let result = recommender.recommend(&UserProfile::with_age(25), &pains(&["headache", "fever"]));

    assert_eq!(result.strategy, Strategy::FullSearch);
    assert_eq!(result.entries[0].outcome.drug(), Some("DrugC"));
    assert_eq!(result.entries[1].outcome.drug(), Some("DrugB"));
}

#[test]
fn duplicated_pain_over_interacting_pair_reuses_one_drug() {
    // DrugA and DrugB cannot be combined, but nothing stops DrugA from
    // answering both copies of the same pain.
    let catalog = Catalog::from_records(vec![
        drug("DrugA", &["fever"], (0, 99), true, true, &["DrugB"]),
        drug("DrugB", &["fever"], (0, 99), true, true, &["DrugA"]),
    ]);
    let index = InteractionIndex::build(&catalog);
    let recommender = Recommender::new(&catalog, &index);

    let result = recommender.recommend(&UserProfile::with_age(25), &pains(&["fever", "fever"]));

    assert_eq!(result.strategy, Strategy::FullSearch);
    assert_eq!(result.entries[0].outcome.drug(), Some("DrugA"));
    assert_eq!(result.entries[1].outcome.drug(), Some("DrugA"));
}

#[test]
fn unknown_pain_falls_back_with_a_no_match_entry() {
    let catalog = Catalog::from_records(vec![drug(
        "DrugA",
        &["headache"],
        (0, 99),
        true,
        true,
        &[],
    )]);
    let index = InteractionIndex::build(&catalog);
    let recommender = Recommender::new(&catalog, &index);

    let result =
        recommender.recommend(&UserProfile::with_age(25), &pains(&["headache", "toothache"]));

    assert_eq!(result.strategy, Strategy::Greedy);
    assert_eq!(result.entries[0].outcome.drug(), Some("DrugA"));
    assert_eq!(result.entries[1].outcome, Outcome::NoMatch);
    assert_eq!(result.entries[1].note(), "no suitable drug for toothache");
}

#[test]
fn substring_request_matches_longer_tag() {
    let catalog = Catalog::from_records(vec![drug(
        "DrugA",
        &["headache"],
        (0, 99),
        true,
        true,
        &[],
    )]);
    let index = InteractionIndex::build(&catalog);
    let recommender = Recommender::new(&catalog, &index);

    let result = recommender.recommend(&UserProfile::with_age(25), &pains(&["head"]));

    assert_eq!(result.strategy, Strategy::FullSearch);
    assert_eq!(result.entries[0].outcome.drug(), Some("DrugA"));
}

#[test]
fn report_snapshot_mirrors_the_assignment() {
    let catalog = Catalog::from_records(vec![drug(
        "DrugA",
        &["headache"],
        (0, 99),
        true,
        true,
        &[],
    )]);
    let index = InteractionIndex::build(&catalog);
    let recommender = Recommender::new(&catalog, &index);

    let result =
        recommender.recommend(&UserProfile::with_age(25), &pains(&["headache", "toothache"]));
    let report = RecommendationReport::from_recommendation(&result);

    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.entries[0].drug.as_deref(), Some("DrugA"));
    assert_eq!(report.entries[1].drug, None);
    let json = report.to_json().unwrap();
    assert!(json.contains("DrugA"));
    assert!(json.contains("no suitable drug for toothache"));
}
