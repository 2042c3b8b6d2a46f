//! Integration tests driving full games through the public API.

use village_sim::core::Village;
use village_sim::metrics::GameSummary;
use village_sim::scenario::{GameParameters, create_standard_scenarios};

/// Helper to create a village with the given stockpiles.
fn stocked_village(food: u32, wood: u32, metal: u32) -> Village {
    let params = GameParameters {
        initial_food: food,
        initial_wood: wood,
        initial_metal: metal,
        ..GameParameters::default()
    };
    Village::from_parameters(&params)
}

#[test]
fn test_start_to_end_game() {
    let mut village = stocked_village(100, 100, 100);

    village.add_worker("John", "farmer");
    village.add_worker("Jane", "builder");

    assert!(village.add_project("Castle"));
    while !village.projects.is_empty() {
        village.day();
    }

    let castles = village
        .buildings
        .iter()
        .filter(|b| b.name == "Castle")
        .count();
    assert_eq!(castles, 1);
    assert!(village.game_over);
    assert_eq!(village.days_gone, 50);
    assert_eq!(village.food, 50);
    assert!(village.workers.iter().all(|w| w.alive));
}

#[test]
fn test_famine_wipes_out_roster() {
    let mut village = stocked_village(0, 10, 10);

    village.add_worker("John", "farmer");
    village.add_worker("Jane", "builder");

    for _ in 0..5 {
        village.day();
    }

    assert_eq!(village.living_workers(), 0);
    // The dead stay on the roster.
    assert_eq!(village.workers.len(), 2);
}

#[test]
fn test_hamlet_scenario_builds_without_victory() {
    let scenario = create_standard_scenarios().remove("hamlet").unwrap();
    let mut village = Village::from_parameters(&scenario.parameters);

    for worker in &scenario.roster {
        assert!(village.add_worker(&worker.name, &worker.occupation));
    }
    for name in &scenario.build_queue {
        assert!(village.add_project(name));
    }

    while !village.projects.is_empty() {
        village.day();
    }

    // House (3 days) and Farm (5 days) both finish; the Farm takes longest.
    assert_eq!(village.days_gone, 5);
    assert_eq!(village.buildings.len(), 5);
    assert!(village.buildings.iter().any(|b| b.name == "Farm"));
    assert!(!village.game_over);
    assert_eq!(village.wood, 5);
    assert_eq!(village.metal, 3);
}

#[test]
fn test_famine_scenario_summary() {
    let scenario = create_standard_scenarios().remove("famine").unwrap();
    let mut village = Village::from_parameters(&scenario.parameters);

    for worker in &scenario.roster {
        village.add_worker(&worker.name, &worker.occupation);
    }
    for name in &scenario.build_queue {
        village.add_project(name);
    }

    while !village.projects.is_empty() {
        village.day();
    }

    let summary = GameSummary::from_events(village.log.events());

    // Two days of rations, then five hungry days for each of the three
    // workers before the Quarry finishes on day seven.
    assert_eq!(summary.days_played, 7);
    assert_eq!(summary.food_consumed, 2);
    assert_eq!(summary.starvation_deaths, 3);
    assert_eq!(summary.hungry_days, 15);
    assert_eq!(summary.buildings_completed, 1);
    assert!(summary.victory.is_none());
}

#[test]
fn test_event_log_round_trip_preserves_summary() {
    let mut village = stocked_village(100, 100, 100);
    village.add_worker("John", "farmer");
    village.add_project("Castle");

    while !village.projects.is_empty() {
        village.day();
    }

    let path = "/tmp/test_village_game_log.json";
    village.log.save_to_file(path).unwrap();
    let loaded = village_sim::events::EventLog::load_from_file(path).unwrap();
    std::fs::remove_file(path).ok();

    let original = GameSummary::from_events(village.log.events());
    let reloaded = GameSummary::from_events(loaded.events());

    assert_eq!(original.days_played, reloaded.days_played);
    assert_eq!(original.buildings_completed, reloaded.buildings_completed);
    assert_eq!(original.victory, reloaded.victory);
}

#[test]
fn test_rejected_project_leaves_run_unaffected() {
    let mut village = stocked_village(10, 5, 0);
    village.add_worker("John", "builder");

    assert!(village.add_project("House"));
    // Second house is unaffordable now that the wood is spent.
    assert!(!village.add_project("House"));

    while !village.projects.is_empty() {
        village.day();
    }

    assert_eq!(village.buildings.len(), 4);
    assert_eq!(village.days_gone, 3);
    assert_eq!(village.wood, 0);
}
