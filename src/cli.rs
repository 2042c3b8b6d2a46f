//! Command-line interface for the village simulation.

use crate::catalog;
use crate::scenario::Scenario;
use lexopt::prelude::*;
use std::path::PathBuf;

/// Command-line arguments for the simulation.
#[derive(Debug, Clone)]
pub struct CliArgs {
    pub command: Command,
    pub scenario_name: String,
    pub scenario_file: Option<PathBuf>,
    pub days: Option<u32>,
    pub initial_food: Option<u32>,
    pub initial_wood: Option<u32>,
    pub initial_metal: Option<u32>,
    pub verbose: bool,
    pub quiet: bool,
    pub output_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum Command {
    Run,
    Analyze { file: PathBuf },
    Query { file: PathBuf, filters: QueryFilters },
}

#[derive(Debug, Clone, Default)]
pub struct QueryFilters {
    pub event_type: Option<String>,
    pub day_range: Option<(u32, u32)>,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            command: Command::Run,
            scenario_name: "castle".to_string(),
            scenario_file: None,
            days: None,
            initial_food: None,
            initial_wood: None,
            initial_metal: None,
            verbose: false,
            quiet: false,
            output_file: None,
        }
    }
}

pub fn parse_args() -> Result<CliArgs, lexopt::Error> {
    let mut args = lexopt::Parser::from_env();
    let mut cli_args = CliArgs::default();
    let mut subcommand = None;
    let mut analyze_file = None;
    let mut query_file = None;
    let mut query_filters = QueryFilters::default();

    while let Some(arg) = args.next()? {
        match arg {
            Value(val) => {
                let val_str = val.string()?;
                if subcommand.is_none() {
                    subcommand = Some(val_str);
                } else {
                    match subcommand.as_deref() {
                        Some("analyze") => analyze_file = Some(PathBuf::from(val_str)),
                        Some("query") => query_file = Some(PathBuf::from(val_str)),
                        _ => {}
                    }
                }
            }
            Long("scenario") => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.scenario_name = val.string()?;
                }
            }
            Long("scenario-file") => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.scenario_file = Some(PathBuf::from(val.string()?));
                }
            }
            Long("days") | Short('d') => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.days = Some(val.parse()?);
                }
            }
            Long("initial-food") => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.initial_food = Some(val.parse()?);
                }
            }
            Long("initial-wood") => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.initial_wood = Some(val.parse()?);
                }
            }
            Long("initial-metal") => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.initial_metal = Some(val.parse()?);
                }
            }
            Long("verbose") | Short('v') => cli_args.verbose = true,
            Long("quiet") | Short('q') => cli_args.quiet = true,
            Long("output") | Short('o') => {
                if let Some(Value(val)) = args.next()? {
                    cli_args.output_file = Some(PathBuf::from(val.string()?));
                }
            }
            Long("event-type") => {
                if let Some(Value(val)) = args.next()? {
                    query_filters.event_type = Some(val.string()?);
                }
            }
            Long("day-range") => {
                if let Some(Value(val)) = args.next()? {
                    let range_str = val.string()?;
                    if let Some((start, end)) = range_str.split_once('-') {
                        match (start.parse::<u32>(), end.parse::<u32>()) {
                            (Ok(s), Ok(e)) => query_filters.day_range = Some((s, e)),
                            _ => return Err(lexopt::Error::from("Invalid day range format")),
                        }
                    }
                }
            }
            Long("help") | Short('h') => {
                print_help();
                std::process::exit(0);
            }
            _ => return Err(arg.unexpected()),
        }
    }

    cli_args.command = match subcommand.as_deref() {
        Some("analyze") => Command::Analyze {
            file: analyze_file.unwrap_or_else(|| PathBuf::from("game_events.json")),
        },
        Some("query") => {
            if let Some(file) = query_file {
                Command::Query {
                    file,
                    filters: query_filters,
                }
            } else {
                eprintln!("Error: query command requires a file");
                std::process::exit(1);
            }
        }
        Some("run") | None => Command::Run,
        Some(cmd) => {
            eprintln!("Unknown command: {}", cmd);
            print_help();
            std::process::exit(1);
        }
    };

    Ok(cli_args)
}

/// Apply CLI overrides to a scenario's parameters.
pub fn apply_overrides(scenario: &mut Scenario, args: &CliArgs) {
    if let Some(days) = args.days {
        scenario.parameters.days_to_simulate = days;
    }
    if let Some(food) = args.initial_food {
        scenario.parameters.initial_food = food;
    }
    if let Some(wood) = args.initial_wood {
        scenario.parameters.initial_wood = wood;
    }
    if let Some(metal) = args.initial_metal {
        scenario.parameters.initial_metal = metal;
    }
}

/// Sanity-check a scenario and print warnings for setups that cannot work.
pub fn warn_on_scenario_problems(scenario: &Scenario) {
    let params = &scenario.parameters;

    let mut wood_needed = 0;
    let mut metal_needed = 0;
    let mut longest_build = 0;
    for name in &scenario.build_queue {
        if let Some(plan) = catalog::plan_for(name) {
            wood_needed += plan.wood_cost;
            metal_needed += plan.metal_cost;
            longest_build = longest_build.max(plan.days_required);
        }
    }

    if wood_needed > params.initial_wood || metal_needed > params.initial_metal {
        println!(
            "⚠️  WARNING: Build queue needs {} wood / {} metal but stockpiles hold {} / {}",
            wood_needed, metal_needed, params.initial_wood, params.initial_metal
        );
        println!("   Some projects will be rejected!");
    }

    if longest_build > params.days_to_simulate {
        println!(
            "⚠️  WARNING: Longest queued build ({} days) exceeds the day limit ({})",
            longest_build, params.days_to_simulate
        );
        println!("   The game will stop before it finishes!");
    }

    if scenario.roster.len() > params.max_workers {
        println!(
            "⚠️  WARNING: Roster lists {} workers but the village caps at {}",
            scenario.roster.len(),
            params.max_workers
        );
    }
}

fn print_help() {
    println!("\nVillage Simulation\n");
    println!("USAGE:");
    println!("    village-sim [COMMAND] [OPTIONS]\n");

    println!("COMMANDS:");
    println!("    run              Run the simulation (default)");
    println!("    analyze [FILE]   Summarize a recorded event log");
    println!("    query FILE [OPTIONS]  Filter and print recorded events\n");

    println!("SIMULATION OPTIONS:");
    println!("    --scenario <NAME>          Use a built-in scenario (default: castle)");
    println!("    --scenario-file <FILE>     Load scenario from JSON file");
    println!("    -d, --days <N>             Day limit for the run");
    println!("    --initial-food <N>         Override initial food");
    println!("    --initial-wood <N>         Override initial wood");
    println!("    --initial-metal <N>        Override initial metal\n");

    println!("OUTPUT OPTIONS:");
    println!("    -o, --output <FILE>        Write the event log to FILE");
    println!("    -v, --verbose              Print every event as it happens");
    println!("    -q, --quiet                Suppress non-essential output");
    println!("    -h, --help                 Print help information\n");

    println!("QUERY OPTIONS:");
    println!("    --event-type <TYPE>        Filter by event type (e.g. WorkerStarved)");
    println!("    --day-range <START-END>    Filter by day range (e.g. 0-10)\n");

    println!("EXAMPLES:");
    println!("    # Run the built-in castle scenario with a bigger granary");
    println!("    village-sim run --scenario castle --initial-food 200\n");

    println!("    # Record a run, then inspect the starvation events");
    println!("    village-sim run --scenario famine -o famine.json");
    println!("    village-sim query famine.json --event-type WorkerStarved");
}
