use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub timestamp: DateTime<Utc>,
    pub day: u32,
    pub kind: EventKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EventKind {
    WorkerAdded {
        name: String,
        occupation: String,
        roster_size: usize,
    },
    WorkerTurnedAway {
        name: String,
    },
    RationsServed {
        food_left: u32,
    },
    RationsMissed {
        hungry_workers: usize,
    },
    WorkerStarved {
        name: String,
        roster_alive: usize,
    },
    ProjectStarted {
        name: String,
        wood_spent: u32,
        metal_spent: u32,
        days_required: u32,
    },
    ProjectRejected {
        name: String,
        reason: RejectReason,
    },
    BuildingCompleted {
        name: String,
        total_buildings: usize,
    },
    VictoryDeclared {
        building: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    UnknownProject,
    NotEnoughMaterials,
}

impl EventKind {
    /// The tag this variant serializes under, for query filtering.
    pub fn type_name(&self) -> &'static str {
        match self {
            EventKind::WorkerAdded { .. } => "WorkerAdded",
            EventKind::WorkerTurnedAway { .. } => "WorkerTurnedAway",
            EventKind::RationsServed { .. } => "RationsServed",
            EventKind::RationsMissed { .. } => "RationsMissed",
            EventKind::WorkerStarved { .. } => "WorkerStarved",
            EventKind::ProjectStarted { .. } => "ProjectStarted",
            EventKind::ProjectRejected { .. } => "ProjectRejected",
            EventKind::BuildingCompleted { .. } => "BuildingCompleted",
            EventKind::VictoryDeclared { .. } => "VictoryDeclared",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Day {}] ", self.day)?;

        match &self.kind {
            EventKind::WorkerAdded {
                name,
                occupation,
                roster_size,
            } => {
                write!(
                    f,
                    "{} joined as {} (roster: {})",
                    name, occupation, roster_size
                )
            }
            EventKind::WorkerTurnedAway { name } => {
                write!(f, "{} turned away, roster is full", name)
            }
            EventKind::RationsServed { food_left } => {
                write!(f, "Rations served ({} food left)", food_left)
            }
            EventKind::RationsMissed { hungry_workers } => {
                write!(f, "No food, {} workers went hungry", hungry_workers)
            }
            EventKind::WorkerStarved { name, roster_alive } => {
                write!(f, "{} starved ({} workers still alive)", name, roster_alive)
            }
            EventKind::ProjectStarted {
                name,
                wood_spent,
                metal_spent,
                days_required,
            } => {
                write!(
                    f,
                    "Started {} ({} wood, {} metal, {} days)",
                    name, wood_spent, metal_spent, days_required
                )
            }
            EventKind::ProjectRejected { name, reason } => {
                write!(f, "Rejected {} ({:?})", name, reason)
            }
            EventKind::BuildingCompleted {
                name,
                total_buildings,
            } => {
                write!(f, "Completed {} (total buildings: {})", name, total_buildings)
            }
            EventKind::VictoryDeclared { building } => {
                write!(f, "The {} stands, the village has won", building)
            }
        }
    }
}

#[derive(Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, day: u32, kind: EventKind) {
        self.events.push(Event {
            timestamp: Utc::now(),
            day,
            kind,
        });
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn save_to_file(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&self.events)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let events: Vec<Event> = serde_json::from_str(&json)?;
        Ok(Self { events })
    }
}
