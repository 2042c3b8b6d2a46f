//! Fixed table of constructible project types and their costs.

/// Material cost and build time for a named project type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectPlan {
    pub name: &'static str,
    pub wood_cost: u32,
    pub metal_cost: u32,
    pub days_required: u32,
}

/// Every project the village knows how to build.
pub const PLANS: &[ProjectPlan] = &[
    ProjectPlan {
        name: "House",
        wood_cost: 5,
        metal_cost: 0,
        days_required: 3,
    },
    ProjectPlan {
        name: "Woodmill",
        wood_cost: 5,
        metal_cost: 1,
        days_required: 5,
    },
    ProjectPlan {
        name: "Quarry",
        wood_cost: 3,
        metal_cost: 5,
        days_required: 7,
    },
    ProjectPlan {
        name: "Farm",
        wood_cost: 5,
        metal_cost: 2,
        days_required: 5,
    },
    ProjectPlan {
        name: "Castle",
        wood_cost: 50,
        metal_cost: 50,
        days_required: 50,
    },
];

/// Completing this building wins the game.
pub const VICTORY_BUILDING: &str = "Castle";

/// Buildings every new village starts with.
pub const STARTING_BUILDINGS: &[&str] = &["House", "House", "House"];

pub fn plan_for(name: &str) -> Option<&'static ProjectPlan> {
    PLANS.iter().find(|plan| plan.name == name)
}

pub fn is_known_project(name: &str) -> bool {
    plan_for(name).is_some()
}
