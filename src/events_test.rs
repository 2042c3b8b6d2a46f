#[cfg(test)]
mod tests {
    use super::super::events::*;
    use chrono::Utc;

    #[test]
    fn test_event_creation_and_display() {
        let event = Event {
            timestamp: Utc::now(),
            day: 10,
            kind: EventKind::BuildingCompleted {
                name: "House".to_string(),
                total_buildings: 4,
            },
        };

        let display = format!("{}", event);
        assert!(display.contains("[Day 10]"));
        assert!(display.contains("Completed House (total buildings: 4)"));
    }

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();

        log.record(
            1,
            EventKind::WorkerAdded {
                name: "John".to_string(),
                occupation: "farmer".to_string(),
                roster_size: 1,
            },
        );

        log.record(2, EventKind::RationsServed { food_left: 9 });

        let events = log.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].day, 1);
        assert_eq!(events[1].day, 2);
    }

    #[test]
    fn test_event_serialization() {
        let event = Event {
            timestamp: Utc::now(),
            day: 5,
            kind: EventKind::ProjectStarted {
                name: "Castle".to_string(),
                wood_spent: 50,
                metal_spent: 50,
                days_required: 50,
            },
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"ProjectStarted\""));

        let deserialized: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event.day, deserialized.day);
        assert_eq!(event.kind.type_name(), deserialized.kind.type_name());
    }

    #[test]
    fn test_type_name_matches_serde_tag() {
        let kind = EventKind::WorkerStarved {
            name: "John".to_string(),
            roster_alive: 0,
        };

        let json = serde_json::to_string(&kind).unwrap();
        assert!(json.contains(&format!("\"type\":\"{}\"", kind.type_name())));
    }

    #[test]
    fn test_event_log_persistence() {
        let mut log = EventLog::new();

        log.record(
            3,
            EventKind::VictoryDeclared {
                building: "Castle".to_string(),
            },
        );

        let temp_file = "/tmp/test_village_events.json";
        log.save_to_file(temp_file).unwrap();

        let loaded = EventLog::load_from_file(temp_file).unwrap();
        assert_eq!(loaded.events().len(), 1);
        assert_eq!(loaded.events()[0].day, 3);

        std::fs::remove_file(temp_file).ok();
    }
}
