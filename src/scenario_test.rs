#[cfg(test)]
mod tests {
    use super::super::scenario::*;

    #[test]
    fn test_scenario_creation() {
        let mut scenario = Scenario::new("test_scenario".to_string());
        scenario.description = "A test scenario".to_string();

        scenario.add_worker("John", "farmer");
        scenario.queue_project("House");

        assert_eq!(scenario.roster.len(), 1);
        assert_eq!(scenario.build_queue, vec!["House"]);
        assert_eq!(scenario.name, "test_scenario");
    }

    #[test]
    fn test_default_parameters_match_classic_game() {
        let params = GameParameters::default();

        assert_eq!(params.initial_food, 10);
        assert_eq!(params.initial_wood, 0);
        assert_eq!(params.initial_metal, 0);
        assert_eq!(params.max_workers, 6);
        assert_eq!(params.starting_buildings.len(), 3);
        assert_eq!(params.victory_building, "Castle");
    }

    #[test]
    fn test_scenario_validation() {
        let mut scenario = Scenario::new("invalid".to_string());

        scenario.queue_project("Ziggurat");
        assert!(scenario.validate().is_err());

        scenario.build_queue.clear();
        scenario.queue_project("House");
        assert!(scenario.validate().is_ok());

        scenario.parameters.victory_building = "Palace".to_string();
        assert!(scenario.validate().is_err());

        scenario.parameters.victory_building = "Castle".to_string();
        scenario.parameters.max_workers = 0;
        assert!(scenario.validate().is_err());
    }

    #[test]
    fn test_scenario_serialization() {
        let scenario = create_standard_scenarios().remove("castle").unwrap();

        let json = serde_json::to_string_pretty(&scenario).unwrap();
        let deserialized: Scenario = serde_json::from_str(&json).unwrap();

        assert_eq!(scenario.name, deserialized.name);
        assert_eq!(scenario.roster.len(), deserialized.roster.len());
        assert_eq!(scenario.build_queue, deserialized.build_queue);
    }

    #[test]
    fn test_scenario_display() {
        let scenarios = create_standard_scenarios();
        let scenario = scenarios.get("castle").unwrap();
        let display = format!("{}", scenario);

        assert!(display.contains("Scenario: road_to_the_castle"));
        assert!(display.contains("John (farmer)"));
        assert!(display.contains("Castle"));
    }

    #[test]
    fn test_standard_scenarios_are_valid() {
        for (name, scenario) in create_standard_scenarios() {
            assert!(
                scenario.validate().is_ok(),
                "built-in scenario {} failed validation",
                name
            );
        }
    }
}
