use crate::catalog;
use crate::events::{EventKind, EventLog, RejectReason};
use crate::scenario::GameParameters;

#[derive(Debug, Clone)]
pub struct Worker {
    pub name: String,
    pub occupation: String,
    pub alive: bool,
    pub hungry: bool,
    pub days_hungry: u32,
}

impl Worker {
    /// Consecutive hungry days before a worker dies.
    pub const DAYS_UNTIL_STARVATION: u32 = 5;

    pub fn new(name: impl Into<String>, occupation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            occupation: occupation.into(),
            alive: true,
            hungry: false,
            days_hungry: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub wood_cost: u32,
    pub metal_cost: u32,
    pub days_required: u32,
    pub days_elapsed: u32,
}

#[derive(Debug, Clone)]
pub struct Building {
    pub name: String,
    pub completed: bool,
}

pub struct Village {
    pub workers: Vec<Worker>,
    pub projects: Vec<Project>,
    pub buildings: Vec<Building>,
    pub food: u32,
    pub wood: u32,
    pub metal: u32,
    pub days_gone: u32,
    pub game_over: bool,
    pub max_workers: usize,
    pub victory_building: String,
    pub log: EventLog,
}

impl Default for Village {
    fn default() -> Self {
        Self::new()
    }
}

impl Village {
    pub fn new() -> Self {
        Self::from_parameters(&GameParameters::default())
    }

    pub fn from_parameters(params: &GameParameters) -> Self {
        let buildings = params
            .starting_buildings
            .iter()
            .map(|name| Building {
                name: name.clone(),
                completed: true,
            })
            .collect();

        Self {
            workers: Vec::new(),
            projects: Vec::new(),
            buildings,
            food: params.initial_food,
            wood: params.initial_wood,
            metal: params.initial_metal,
            days_gone: 0,
            game_over: false,
            max_workers: params.max_workers,
            victory_building: params.victory_building.clone(),
            log: EventLog::new(),
        }
    }

    pub fn living_workers(&self) -> usize {
        self.workers.iter().filter(|w| w.alive).count()
    }

    /// Recruit a worker. Silently refused when the roster is full.
    pub fn add_worker(&mut self, name: impl Into<String>, occupation: impl Into<String>) -> bool {
        let name = name.into();
        if self.workers.len() >= self.max_workers {
            self.log
                .record(self.days_gone, EventKind::WorkerTurnedAway { name });
            return false;
        }

        let occupation = occupation.into();
        self.workers.push(Worker::new(name.clone(), occupation.clone()));
        self.log.record(
            self.days_gone,
            EventKind::WorkerAdded {
                name,
                occupation,
                roster_size: self.workers.len(),
            },
        );
        true
    }

    /// Start a project by name. Materials are deducted atomically; an
    /// unknown name or unaffordable cost leaves the stockpiles untouched.
    pub fn add_project(&mut self, name: &str) -> bool {
        let Some(plan) = catalog::plan_for(name) else {
            self.log.record(
                self.days_gone,
                EventKind::ProjectRejected {
                    name: name.to_string(),
                    reason: RejectReason::UnknownProject,
                },
            );
            return false;
        };

        if self.wood < plan.wood_cost || self.metal < plan.metal_cost {
            self.log.record(
                self.days_gone,
                EventKind::ProjectRejected {
                    name: name.to_string(),
                    reason: RejectReason::NotEnoughMaterials,
                },
            );
            return false;
        }

        self.wood -= plan.wood_cost;
        self.metal -= plan.metal_cost;
        self.projects.push(Project {
            name: name.to_string(),
            wood_cost: plan.wood_cost,
            metal_cost: plan.metal_cost,
            days_required: plan.days_required,
            days_elapsed: 0,
        });
        self.log.record(
            self.days_gone,
            EventKind::ProjectStarted {
                name: name.to_string(),
                wood_spent: plan.wood_cost,
                metal_spent: plan.metal_cost,
                days_required: plan.days_required,
            },
        );
        true
    }

    /// Advance the simulation by one day.
    pub fn day(&mut self) {
        self.days_gone += 1;
        let day = self.days_gone;

        // Feeding. One unit of food per day covers the whole roster.
        if !self.workers.is_empty() {
            if self.food > 0 {
                self.food -= 1;
                for worker in self.workers.iter_mut().filter(|w| w.alive) {
                    worker.hungry = false;
                    worker.days_hungry = 0;
                }
                self.log.record(
                    day,
                    EventKind::RationsServed {
                        food_left: self.food,
                    },
                );
            } else {
                let mut starved = Vec::new();
                let mut hungry_workers = 0;
                for worker in self.workers.iter_mut().filter(|w| w.alive) {
                    worker.hungry = true;
                    worker.days_hungry += 1;
                    hungry_workers += 1;
                    if worker.days_hungry >= Worker::DAYS_UNTIL_STARVATION {
                        worker.alive = false;
                        starved.push(worker.name.clone());
                    }
                }
                if hungry_workers > 0 {
                    self.log
                        .record(day, EventKind::RationsMissed { hungry_workers });
                }
                let roster_alive = self.living_workers();
                for name in starved {
                    self.log
                        .record(day, EventKind::WorkerStarved { name, roster_alive });
                }
            }
        }

        // Construction. Every active project advances one day; finished
        // projects become completed buildings.
        let mut finished = Vec::new();
        self.projects.retain_mut(|project| {
            project.days_elapsed += 1;
            if project.days_elapsed >= project.days_required {
                finished.push(project.name.clone());
                false
            } else {
                true
            }
        });

        for name in finished {
            self.buildings.push(Building {
                name: name.clone(),
                completed: true,
            });
            self.log.record(
                day,
                EventKind::BuildingCompleted {
                    name: name.clone(),
                    total_buildings: self.buildings.len(),
                },
            );
            if name == self.victory_building {
                self.game_over = true;
                self.log
                    .record(day, EventKind::VictoryDeclared { building: name });
            }
        }
    }
}
