//! Integration tests for the Panem games
//!
//! Tests the full stack: input parsing, district tree, selection, duels

use std::path::PathBuf;

use panem_core::{
    District, DistrictId, DistrictTree, GameConfig, HungerGames, Person, RandomSource,
    Resolution, Victor,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("data")
        .join("panem.in")
}

fn fixture_game(seed: u64) -> HungerGames {
    HungerGames::setup_panem(fixture_path(), GameConfig::default().with_seed(seed))
        .expect("fixture parses")
}

/// Random population where every district starts with both populations
fn random_districts(seed: u64) -> Vec<District> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut ids: Vec<DistrictId> = (1..100).collect();
    ids.shuffle(&mut rng);
    let count = rng.gen_range(2..8);

    ids.into_iter()
        .take(count)
        .map(|id| {
            let mut district = District::new(id);
            for parity_offset in [1u8, 0u8] {
                for n in 0..rng.gen_range(1..5) {
                    let month = 2 * rng.gen_range(0..6) + 2 - parity_offset;
                    district.add_person(Person::new(
                        month,
                        format!("p{n}"),
                        format!("d{id}"),
                        rng.gen_range(8..30),
                        id,
                        rng.gen_range(0..10),
                    ));
                }
            }
            district
        })
        .collect()
}

fn member(month: u8, name: &str, age: u32, district: DistrictId) -> Person {
    Person::new(month, name, "Test", age, district, 5)
}

fn district_of(id: DistrictId, people: Vec<Person>) -> District {
    let mut district = District::new(id);
    for person in people {
        district.add_person(person);
    }
    district
}

fn assert_tree_invariants(tree: &DistrictTree) {
    assert!(tree.is_ordered(), "tree lost BST ordering");
    for district in tree.pre_order() {
        assert!(
            !district.is_exhausted(),
            "district {} stayed in play with an empty population",
            district.district_id()
        );
    }
}

// ============================================================================
// SETUP TESTS
// ============================================================================

#[test]
fn test_fixture_loads_waiting_list() {
    let games = fixture_game(2023);
    let ids: Vec<_> = games.districts().iter().map(District::district_id).collect();
    assert_eq!(ids, vec![7, 3, 11, 1, 9]);

    // Johanna names district 12, which does not exist
    let people: usize = games.districts().iter().map(District::size).sum();
    assert_eq!(people, 19);
    assert!(games.root().is_none());
}

#[test]
fn test_fixture_tree_shape() {
    let mut games = fixture_game(2023);
    games.enter_all();

    assert!(games.districts().is_empty());
    let order: Vec<_> = games.tree().pre_order().map(District::district_id).collect();
    assert_eq!(order, vec![7, 3, 1, 11, 9]);
    assert_eq!(games.tree().height(), 3);
    assert_eq!(games.competitor_count(), 19);
}

// ============================================================================
// TREE EXAMPLES
// ============================================================================

#[test]
fn test_duplicate_then_delete_root() {
    let pair_of = |id| {
        district_of(id, vec![member(1, "Odd", 30, id), member(2, "Even", 30, id)])
    };
    let mut games =
        HungerGames::from_districts(vec![pair_of(5), pair_of(2), pair_of(8)], GameConfig::default());
    games.enter_all();

    assert!(!games.add_district_to_game(pair_of(5)));
    assert_eq!(games.tree().len(), 3);

    games.eliminate_district(5);
    let root = games.root().unwrap();
    assert_eq!(root.district().district_id(), 8);
    assert_eq!(root.left().unwrap().district().district_id(), 2);
    assert!(root.right().is_none());

    assert!(games.eliminate_district(5).is_none());
    assert_eq!(games.tree().len(), 2);
}

// ============================================================================
// SELECTION AND RESOLUTION
// ============================================================================

#[test]
fn test_first_pair_prefers_tessera() {
    let mut games = fixture_game(2023);
    games.enter_all();

    let pair = games.select_duelers();
    assert_eq!(pair.person1.as_ref().unwrap().first_name(), "Katniss");
    assert_eq!(pair.person2.as_ref().unwrap().first_name(), "Glimmer");
    assert_eq!(games.competitor_count(), 17);
}

#[test]
fn test_lone_district_exhausts_fallback() {
    let mut district = District::new(4);
    district.add_person(Person::new(1, "Odd", "One", 40, 4, 3));
    district.add_person(Person::new(2, "Even", "One", 40, 4, 3));
    let mut games = HungerGames::from_districts(vec![district], GameConfig::default());
    games.enter_all();

    let pair = games.select_duelers();
    assert_eq!(pair.person1.as_ref().unwrap().first_name(), "Odd");
    assert!(pair.person2.is_none());

    let resolution = games.eliminate_dueler(pair);
    assert!(matches!(resolution, Resolution::Unpaired { .. }));
    assert_eq!(games.competitor_count(), 2);

    let summary = games.play();
    assert_eq!(summary.rounds, 0);
    assert_eq!(summary.winner(), Some(4));
}

#[test]
fn test_rounds_preserve_invariants() {
    for seed in 0..25 {
        let mut games = HungerGames::from_districts(
            random_districts(seed),
            GameConfig::default().with_seed(seed),
        );
        games.enter_all();
        assert_tree_invariants(games.tree());

        loop {
            let before = games.competitor_count();
            let pair = games.select_duelers();
            if let (Some(p1), Some(p2)) = (&pair.person1, &pair.person2) {
                assert_ne!(p1.district_id(), p2.district_id());
                assert_eq!(p1.birth_month() % 2, 1);
                assert_eq!(p2.birth_month() % 2, 0);
            }

            let resolution = games.eliminate_dueler(pair);
            assert_tree_invariants(games.tree());

            assert_eq!(games.competitor_count() + resolution.removed_competitors(), before);
            match resolution {
                Resolution::Duel { eliminated, .. } => {
                    if let Some(district) = eliminated {
                        assert!(games.find_district(district.district_id()).is_none());
                    }
                }
                _ => {
                    assert_eq!(games.competitor_count(), before);
                    break;
                }
            }
        }

        assert_eq!(games.tree().len(), 1, "seed {seed} should end with one district");
    }
}

#[test]
fn test_eliminated_district_takes_its_members() {
    let mut games = HungerGames::from_districts(
        vec![
            district_of(
                1,
                vec![
                    member(3, "Tribute", 14, 1),
                    member(4, "Elder", 40, 1),
                    member(6, "Smith", 35, 1),
                ],
            ),
            district_of(2, vec![member(5, "Miner", 30, 2), member(8, "Victor", 16, 2)]),
        ],
        GameConfig::default(),
    )
    .with_duel_rule(|_: &Person, _: &Person, _: &mut dyn RandomSource| Victor::Second);
    games.enter_all();
    assert_eq!(games.competitor_count(), 5);

    let pair = games.select_duelers();
    let resolution = games.eliminate_dueler(pair);

    match &resolution {
        Resolution::Duel { winner, loser, eliminated, .. } => {
            assert_eq!(winner.first_name(), "Victor");
            assert_eq!(loser.first_name(), "Tribute");
            let district = eliminated.as_ref().expect("district 1 has no odd members left");
            assert_eq!(district.district_id(), 1);
            assert!(district.odd_population().is_empty());
            assert_eq!(district.even_population().len(), 2);
        }
        other => panic!("expected a duel, got {other:?}"),
    }

    // Loser plus the two even members who left with district 1
    assert_eq!(resolution.removed_competitors(), 3);
    assert_eq!(games.competitor_count(), 2);
    assert_eq!(games.tree().ids_in_order(), vec![2]);
}

#[test]
fn test_custom_duel_rule() {
    let strongest = |a: &Person, b: &Person, _: &mut dyn RandomSource| {
        if b.effectiveness() > a.effectiveness() {
            Victor::Second
        } else {
            Victor::First
        }
    };
    let mut games = fixture_game(2023).with_duel_rule(strongest);
    games.enter_all();

    let report = games.play_round();
    match report.resolution {
        Resolution::Duel { winner, loser, .. } => {
            assert_eq!(winner.first_name(), "Katniss");
            assert_eq!(loser.first_name(), "Glimmer");
        }
        other => panic!("expected a duel, got {other:?}"),
    }
    assert_eq!(report.round, 1);
}

// ============================================================================
// FULL GAMES
// ============================================================================

#[test]
fn test_fixture_game_has_winner() {
    let mut games = fixture_game(2023);
    games.enter_all();
    let summary = games.play();

    assert!(!summary.capped);
    assert_eq!(summary.eliminated.len(), 4);
    assert!(summary.winner().is_some());
    assert!(summary.rounds >= 4);
    assert!(summary.remaining_competitors >= 2);
    assert_eq!(summary.remaining_competitors, games.competitor_count());
}

#[test]
fn test_fixture_game_accounts_for_every_competitor() {
    let mut games = fixture_game(2023);
    games.enter_all();

    let mut remaining = games.competitor_count();
    let mut duels = 0;
    loop {
        let report = games.play_round();
        remaining -= report.resolution.removed_competitors();
        assert_eq!(games.competitor_count(), remaining);
        if !report.resolution.is_duel() {
            break;
        }
        duels += 1;
        assert_eq!(report.round, duels);
    }

    assert_eq!(games.tree().len(), 1);
    assert_eq!(games.eliminated().len(), 4);
}

#[test]
fn test_games_reproducible_from_seed() {
    let play = |seed| {
        let mut games = fixture_game(seed);
        games.enter_all();
        let summary = games.play();
        (summary.eliminated, summary.survivors, summary.rounds)
    };
    assert_eq!(play(42), play(42));
    assert_eq!(play(2023), play(2023));
}

#[test]
fn test_summary_json() {
    let mut games = fixture_game(7);
    games.enter_all();
    let summary = games.play();

    let json = summary.to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["rounds"], summary.rounds);
    assert_eq!(value["survivors"].as_array().unwrap().len(), 1);
}
