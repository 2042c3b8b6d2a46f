pub mod catalog;
pub mod cli;
pub mod core;
pub mod events;
pub mod metrics;
pub mod scenario;

#[cfg(test)]
mod events_test;
#[cfg(test)]
mod scenario_test;
