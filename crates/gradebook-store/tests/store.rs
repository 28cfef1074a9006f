//! Integration tests for the roster store.

use gradebook_model::{GradingPolicy, RosterError};
use gradebook_store::{MODIFICATION_LIMIT, ModifyOutcome, RosterStore};

use proptest::prelude::{ProptestConfig, proptest};
use proptest::sample::select;

fn percent_store() -> RosterStore {
    RosterStore::new(GradingPolicy::percent())
}

#[test]
fn duplicate_add_fails_and_leaves_roster_unchanged() {
    let mut store = percent_store();
    store.add("Ana", 80.0).unwrap();
    let err = store.add("ANA", 90.0).unwrap_err();
    assert_eq!(
        err,
        RosterError::DuplicateName {
            name: "ANA".to_string()
        }
    );
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("Ana").unwrap().grade, 80.0);
}

#[test]
fn limit_enforced_after_three_changed_modifications() {
    let mut store = percent_store();
    store.add("Ana", 50.0).unwrap();
    for (attempt, grade) in [60.0, 70.0, 80.0].into_iter().enumerate() {
        let outcome = store.modify("Ana", grade).unwrap();
        let remaining = MODIFICATION_LIMIT - (attempt as u32 + 1);
        assert_eq!(outcome, ModifyOutcome::Updated { remaining });
    }
    let err = store.modify("Ana", 90.0).unwrap_err();
    assert_eq!(
        err,
        RosterError::LimitReached {
            name: "Ana".to_string(),
            limit: MODIFICATION_LIMIT
        }
    );
    assert_eq!(store.get("Ana").unwrap().grade, 80.0);
}

#[test]
fn no_change_modify_spends_no_attempt() {
    let mut store = percent_store();
    store.add("Ana", 80.0).unwrap();
    store.modify("Ana", 85.0).unwrap();
    assert_eq!(store.modify("Ana", 85.0).unwrap(), ModifyOutcome::Unchanged);
    assert_eq!(store.attempts_used("Ana"), 1);
}

#[test]
fn delete_then_re_add_restarts_the_budget() {
    let mut store = percent_store();
    store.add("Ana", 80.0).unwrap();
    store.modify("Ana", 85.0).unwrap();
    store.modify("Ana", 90.0).unwrap();
    assert_eq!(store.attempts_used("Ana"), 2);

    store.delete("Ana").unwrap();
    store.add("Ana", 70.0).unwrap();
    assert_eq!(store.attempts_used("Ana"), 0);
    assert_eq!(store.attempts_remaining("Ana"), MODIFICATION_LIMIT);
}

#[test]
fn full_round_trip_scenario() {
    let mut store = percent_store();

    store.add("Ana", 80.0).unwrap();
    assert_eq!(
        store.add("Ana", 90.0).unwrap_err(),
        RosterError::DuplicateName {
            name: "Ana".to_string()
        }
    );

    let outcome = store.modify("Ana", 85.0).unwrap();
    assert_eq!(outcome, ModifyOutcome::Updated { remaining: 2 });
    assert_eq!(store.attempts_used("Ana"), 1);

    assert_eq!(store.modify("Ana", 85.0).unwrap(), ModifyOutcome::Unchanged);
    assert_eq!(store.attempts_used("Ana"), 1);

    let removed = store.delete("Ana").unwrap();
    assert_eq!(removed.grade, 85.0);

    assert_eq!(
        store.modify("Ana", 50.0).unwrap_err(),
        RosterError::NotFound {
            name: "Ana".to_string()
        }
    );
}

#[test]
fn stats_over_known_roster() {
    let mut store = percent_store();
    store.add("Ana", 80.0).unwrap();
    store.add("Luis", 60.0).unwrap();
    store.add("Eva", 100.0).unwrap();

    let stats = store.stats();
    assert!((stats.average - 80.0).abs() < 1e-9);
    assert_eq!(stats.high, 100.0);
    assert_eq!(stats.low, 60.0);
}

#[test]
fn stats_of_empty_roster_are_exact_zeros() {
    let store = percent_store();
    let stats = store.stats();
    assert_eq!(stats.average, 0.0);
    assert_eq!(stats.high, 0.0);
    assert_eq!(stats.low, 0.0);
}

#[test]
fn search_matches_substring_case_insensitively() {
    let mut store = percent_store();
    store.add("Ana Pérez", 80.0).unwrap();
    store.add("Luis Gómez", 60.0).unwrap();

    let hits = store.search("an");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Ana Pérez");

    let all = store.search("   ");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Ana Pérez");
    assert_eq!(all[1].name, "Luis Gómez");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// No sequence of adds ever yields two records sharing a case-folded
    /// name; colliding adds always fail with `DuplicateName`.
    #[test]
    fn adds_never_violate_uniqueness(
        entries in proptest::collection::vec(
            (
                select(vec!["Ana", "ana", "ANA", "Luis", "luis", "Eva", "eva", "Iván"]),
                0.0f64..=100.0,
            ),
            0..20,
        )
    ) {
        let mut store = RosterStore::new(GradingPolicy::percent());
        for (name, grade) in entries {
            let existed = store.find(name).is_some();
            match store.add(name, grade) {
                Ok(()) => assert!(!existed),
                Err(RosterError::DuplicateName { .. }) => assert!(existed),
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
        let mut folded: Vec<String> = store
            .students()
            .iter()
            .map(|s| s.name.to_lowercase())
            .collect();
        folded.sort();
        let before = folded.len();
        folded.dedup();
        assert_eq!(folded.len(), before);
    }
}
