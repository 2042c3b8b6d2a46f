use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::catalog;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub parameters: GameParameters,
    pub roster: Vec<WorkerConfig>,
    pub build_queue: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameParameters {
    pub days_to_simulate: u32,
    pub max_workers: usize,
    pub initial_food: u32,
    pub initial_wood: u32,
    pub initial_metal: u32,
    pub starting_buildings: Vec<String>,
    pub victory_building: String,
}

impl Default for GameParameters {
    fn default() -> Self {
        Self {
            days_to_simulate: 100,
            max_workers: 6,
            initial_food: 10,
            initial_wood: 0,
            initial_metal: 0,
            starting_buildings: catalog::STARTING_BUILDINGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            victory_building: catalog::VICTORY_BUILDING.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    pub name: String,
    pub occupation: String,
}

impl Scenario {
    pub fn new(name: String) -> Self {
        Self {
            name,
            description: String::new(),
            parameters: GameParameters::default(),
            roster: Vec::new(),
            build_queue: Vec::new(),
        }
    }

    pub fn add_worker(&mut self, name: &str, occupation: &str) {
        self.roster.push(WorkerConfig {
            name: name.to_string(),
            occupation: occupation.to_string(),
        });
    }

    pub fn queue_project(&mut self, name: &str) {
        self.build_queue.push(name.to_string());
    }

    pub fn save_to_file(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let scenario: Self = serde_json::from_str(&json)?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.parameters.max_workers == 0 {
            return Err("max_workers must be at least 1".to_string());
        }

        if !catalog::is_known_project(&self.parameters.victory_building) {
            return Err(format!(
                "Victory building {} is not in the project catalog",
                self.parameters.victory_building
            ));
        }

        for name in &self.build_queue {
            if !catalog::is_known_project(name) {
                return Err(format!("Build queue entry {} is not a known project", name));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scenario: {}", self.name)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "\nParameters:")?;
        writeln!(
            f,
            "  Days to simulate: {}",
            self.parameters.days_to_simulate
        )?;
        writeln!(f, "  Max workers: {}", self.parameters.max_workers)?;
        writeln!(
            f,
            "  Initial stockpiles: {} food, {} wood, {} metal",
            self.parameters.initial_food,
            self.parameters.initial_wood,
            self.parameters.initial_metal
        )?;
        writeln!(
            f,
            "  Starting buildings: {}",
            self.parameters.starting_buildings.join(", ")
        )?;
        writeln!(
            f,
            "  Victory building: {}",
            self.parameters.victory_building
        )?;

        writeln!(f, "\nRoster:")?;
        for worker in &self.roster {
            writeln!(f, "  {} ({})", worker.name, worker.occupation)?;
        }

        writeln!(f, "\nBuild queue:")?;
        for name in &self.build_queue {
            writeln!(f, "  {}", name)?;
        }

        Ok(())
    }
}

pub fn create_standard_scenarios() -> HashMap<String, Scenario> {
    let mut scenarios = HashMap::new();

    let mut castle = Scenario::new("road_to_the_castle".to_string());
    castle.description = "Well stocked village racing to finish the Castle".to_string();
    castle.parameters.initial_food = 100;
    castle.parameters.initial_wood = 100;
    castle.parameters.initial_metal = 100;
    castle.add_worker("John", "farmer");
    castle.add_worker("Jane", "builder");
    castle.queue_project("Castle");
    scenarios.insert("castle".to_string(), castle);

    let mut hamlet = Scenario::new("growing_hamlet".to_string());
    hamlet.description = "Default stockpiles, a house and a farm on the docket".to_string();
    hamlet.parameters.initial_wood = 15;
    hamlet.parameters.initial_metal = 5;
    hamlet.add_worker("Ulf", "lumberjack");
    hamlet.add_worker("Astrid", "builder");
    hamlet.queue_project("House");
    hamlet.queue_project("Farm");
    scenarios.insert("hamlet".to_string(), hamlet);

    let mut famine = Scenario::new("famine".to_string());
    famine.description = "Almost no food, the roster will not survive the build".to_string();
    famine.parameters.initial_food = 2;
    famine.parameters.initial_wood = 10;
    famine.parameters.initial_metal = 10;
    famine.parameters.days_to_simulate = 30;
    famine.add_worker("Bjorn", "miner");
    famine.add_worker("Sigrid", "farmer");
    famine.add_worker("Leif", "builder");
    famine.queue_project("Quarry");
    scenarios.insert("famine".to_string(), famine);

    scenarios
}
