use rand::Rng;

use crate::config::SavingsConfig;
use crate::error::RouteError;
use crate::registry::Registry;
use crate::report::RouteComparison;
use crate::routing::{CostModel, RouteCandidate, generate_variants, savings_vs_direct, select_optimal};
use crate::types::Objective;

/// Read-only pipeline: registry lookup → variants → costing → selection.
///
/// Holds no mutable state, so one engine can serve concurrent requests as
/// long as each caller brings its own `Rng`.
#[derive(Debug, Clone, Default)]
pub struct RouteEngine {
    registry: Registry,
    cost_model: CostModel,
    savings: SavingsConfig,
}

impl RouteEngine {
    pub fn new(registry: Registry, cost_model: CostModel, savings: SavingsConfig) -> Self {
        Self {
            registry,
            cost_model,
            savings,
        }
    }

    /// Engine over the built-in ports and vessels with default prices.
    pub fn with_reference_data() -> Self {
        Self {
            registry: Registry::with_reference_data(),
            ..Self::default()
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    /// The three costed candidates for a port pair, in declaration order.
    pub fn compute_routes<R: Rng>(
        &self,
        origin: &str,
        destination: &str,
        vessel: &str,
        rng: &mut R,
    ) -> Result<[RouteCandidate; 3], RouteError> {
        if origin == destination {
            return Err(RouteError::InvalidInput(format!(
                "origin and destination are both '{origin}'"
            )));
        }
        let origin = self.registry.get_port(origin)?;
        let destination = self.registry.get_port(destination)?;
        let vessel = self.registry.get_vessel(vessel)?;

        Ok(generate_variants(origin, destination)
            .map(|variant| self.cost_model.evaluate(variant, vessel, &mut *rng)))
    }

    /// Compute routes, pick the optimum, and measure it against direct.
    pub fn optimize<R: Rng>(
        &self,
        origin: &str,
        destination: &str,
        vessel: &str,
        objective: Objective,
        rng: &mut R,
    ) -> Result<RouteComparison, RouteError> {
        let candidates = self.compute_routes(origin, destination, vessel, rng)?;
        let optimal = select_optimal(&candidates, objective)?;
        let savings = savings_vs_direct(&candidates, optimal, &self.savings);

        Ok(RouteComparison {
            origin: origin.to_string(),
            destination: destination.to_string(),
            vessel: vessel.to_string(),
            objective,
            optimal: optimal.kind,
            savings,
            candidates: candidates.to_vec(),
        })
    }
}
