// Preset requests offered as one-click examples.

use rand::Rng;

use crate::engine::RouteEngine;
use crate::error::RouteError;
use crate::report::RouteComparison;
use crate::types::Objective;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub name: &'static str,
    pub origin: &'static str,
    pub destination: &'static str,
    pub vessel: &'static str,
    pub objective: Objective,
}

pub const SAMPLE_SCENARIOS: [Scenario; 3] = [
    Scenario {
        name: "Northern Europe",
        origin: "OSLO",
        destination: "HAMBURG",
        vessel: "Container Large",
        objective: Objective::Cost,
    },
    Scenario {
        name: "Global Trade",
        origin: "SINGAPORE",
        destination: "ROTTERDAM",
        vessel: "Container Large",
        objective: Objective::Environmental,
    },
    Scenario {
        name: "Transatlantic",
        origin: "NEW_YORK",
        destination: "LONDON",
        vessel: "General Cargo",
        objective: Objective::WeatherSafety,
    },
];

impl Scenario {
    pub fn run<R: Rng>(&self, engine: &RouteEngine, rng: &mut R) -> Result<RouteComparison, RouteError> {
        engine.optimize(self.origin, self.destination, self.vessel, self.objective, rng)
    }
}
