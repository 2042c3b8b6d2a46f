use log::{debug, info};
use std::path::Path;

use village_sim::cli::{self, CliArgs, Command, QueryFilters};
use village_sim::core::Village;
use village_sim::events::EventLog;
use village_sim::metrics::GameSummary;
use village_sim::scenario::{Scenario, create_standard_scenarios};

fn main() {
    env_logger::init();

    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error parsing arguments: {}", e);
            std::process::exit(1);
        }
    };

    match args.command.clone() {
        Command::Run => run(&args),
        Command::Analyze { file } => analyze(&file),
        Command::Query { file, filters } => query(&file, &filters),
    }
}

fn load_scenario(args: &CliArgs) -> Scenario {
    let mut scenario = if let Some(path) = &args.scenario_file {
        match Scenario::load_from_file(&path.to_string_lossy()) {
            Ok(scenario) => scenario,
            Err(e) => {
                eprintln!("Failed to load scenario file: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        let mut scenarios = create_standard_scenarios();
        match scenarios.remove(&args.scenario_name) {
            Some(scenario) => scenario,
            None => {
                eprintln!("Unknown scenario: {}", args.scenario_name);
                eprintln!("Available: castle, hamlet, famine");
                std::process::exit(1);
            }
        }
    };

    cli::apply_overrides(&mut scenario, args);

    if let Err(e) = scenario.validate() {
        eprintln!("Invalid scenario: {}", e);
        std::process::exit(1);
    }

    scenario
}

fn run(args: &CliArgs) {
    let scenario = load_scenario(args);

    if !args.quiet {
        println!("{}", scenario);
        cli::warn_on_scenario_problems(&scenario);
    }

    let mut village = Village::from_parameters(&scenario.parameters);

    for worker in &scenario.roster {
        if village.add_worker(&worker.name, &worker.occupation) {
            info!("Recruited {} as {}", worker.name, worker.occupation);
        } else {
            info!("Roster full, {} turned away", worker.name);
        }
    }

    // Stockpiles never grow, so there is no point retrying rejected
    // projects on later days. Start everything up front.
    for name in &scenario.build_queue {
        if village.add_project(name) {
            info!("Started project {}", name);
        } else {
            info!("Could not start project {}", name);
        }
    }

    let day_limit = scenario.parameters.days_to_simulate;
    while !village.game_over && !village.projects.is_empty() && village.days_gone < day_limit {
        village.day();
        debug!(
            "Day {}: food={} wood={} metal={} alive={} projects={}",
            village.days_gone,
            village.food,
            village.wood,
            village.metal,
            village.living_workers(),
            village.projects.len()
        );
    }

    if args.verbose {
        for event in village.log.events() {
            println!("{}", event);
        }
    }

    let summary = GameSummary::from_events(village.log.events());
    if !args.quiet {
        println!("{}", summary);
    }

    if let Some(path) = &args.output_file {
        match village.log.save_to_file(&path.to_string_lossy()) {
            Ok(()) => info!("Event log written to {}", path.display()),
            Err(e) => {
                eprintln!("Failed to write event log: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn analyze(file: &Path) {
    let log = load_log(file);
    let summary = GameSummary::from_events(log.events());
    println!("{}", summary);
}

fn query(file: &Path, filters: &QueryFilters) {
    let log = load_log(file);

    let mut shown = 0;
    for event in log.events() {
        let type_matches = filters
            .event_type
            .as_deref()
            .is_none_or(|t| event.kind.type_name() == t);
        let day_matches = filters
            .day_range
            .is_none_or(|(start, end)| event.day >= start && event.day <= end);
        if !type_matches || !day_matches {
            continue;
        }
        println!("{}", event);
        shown += 1;
    }

    println!("\n{} events matched", shown);
}

fn load_log(file: &Path) -> EventLog {
    match EventLog::load_from_file(&file.to_string_lossy()) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("Failed to load event log {}: {}", file.display(), e);
            std::process::exit(1);
        }
    }
}
