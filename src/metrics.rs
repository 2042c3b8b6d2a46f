use serde::{Deserialize, Serialize};

use crate::events::{Event, EventKind};

/// Summary of a finished game, computed from the event log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSummary {
    pub days_played: u32,
    pub workers_recruited: usize,
    pub workers_turned_away: usize,
    pub starvation_deaths: usize,
    pub hungry_days: usize,
    pub food_consumed: u32,
    pub projects_started: usize,
    pub projects_rejected: usize,
    pub buildings_completed: usize,
    pub wood_spent: u32,
    pub metal_spent: u32,
    pub victory: Option<String>,
}

impl GameSummary {
    pub fn from_events(events: &[Event]) -> Self {
        let mut summary = GameSummary::default();

        for event in events {
            if event.day > summary.days_played {
                summary.days_played = event.day;
            }

            match &event.kind {
                EventKind::WorkerAdded { .. } => summary.workers_recruited += 1,
                EventKind::WorkerTurnedAway { .. } => summary.workers_turned_away += 1,
                EventKind::RationsServed { .. } => summary.food_consumed += 1,
                EventKind::RationsMissed { hungry_workers } => {
                    summary.hungry_days += hungry_workers;
                }
                EventKind::WorkerStarved { .. } => summary.starvation_deaths += 1,
                EventKind::ProjectStarted {
                    wood_spent,
                    metal_spent,
                    ..
                } => {
                    summary.projects_started += 1;
                    summary.wood_spent += wood_spent;
                    summary.metal_spent += metal_spent;
                }
                EventKind::ProjectRejected { .. } => summary.projects_rejected += 1,
                EventKind::BuildingCompleted { .. } => summary.buildings_completed += 1,
                EventKind::VictoryDeclared { building } => {
                    summary.victory = Some(building.clone());
                }
            }
        }

        summary
    }
}

impl std::fmt::Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Game Summary ({} days):", self.days_played)?;
        match &self.victory {
            Some(building) => writeln!(f, "  Outcome: victory, {} completed", building)?,
            None => writeln!(f, "  Outcome: no victory")?,
        }
        writeln!(
            f,
            "  Workers: {} recruited, {} turned away, {} starved",
            self.workers_recruited, self.workers_turned_away, self.starvation_deaths
        )?;
        writeln!(
            f,
            "  Food: {} consumed, {} worker-days hungry",
            self.food_consumed, self.hungry_days
        )?;
        writeln!(
            f,
            "  Projects: {} started, {} rejected, {} completed",
            self.projects_started, self.projects_rejected, self.buildings_completed
        )?;
        writeln!(
            f,
            "  Materials spent: {} wood, {} metal",
            self.wood_spent, self.metal_spent
        )?;
        Ok(())
    }
}
