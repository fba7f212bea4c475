use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod engine;
pub mod error;
pub mod geography;
pub mod registry;
pub mod report;
pub mod routing;
pub mod scenarios;
pub mod types;
pub mod vessel;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use geography::*;
pub use registry::*;
pub use report::*;
pub use routing::*;
pub use scenarios::*;
pub use types::*;
pub use vessel::*;

/// Seed used when the caller does not supply one.
const DEFAULT_SEED: u64 = 42;

// ============================================================================
// WASM API - Route Planner
// ============================================================================

/// Ports and vessel classes available to the planner UI.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi)]
pub struct Catalog {
    pub ports: Vec<Port>,
    pub vessels: Vec<VesselProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi)]
pub struct CandidateList {
    pub candidates: Vec<RouteCandidate>,
}

#[wasm_bindgen]
pub struct RoutePlanner {
    engine: RouteEngine,
    rng: StdRng,
}

impl Default for RoutePlanner {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl RoutePlanner {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Planner over the reference data with a reproducible jitter sequence.
    #[wasm_bindgen]
    pub fn with_seed(seed: u64) -> Self {
        // Better panic messages in browser console
        console_error_panic_hook::set_once();

        Self {
            engine: RouteEngine::with_reference_data(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Planner over a JSON registry document.
    #[wasm_bindgen]
    pub fn from_registry_json(json: &str, seed: u64) -> Result<RoutePlanner, JsError> {
        let registry = Registry::from_json(json)?;
        Ok(Self {
            engine: RouteEngine::new(registry, CostModel::default(), SavingsConfig::default()),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    #[wasm_bindgen]
    pub fn catalog(&self) -> Catalog {
        let registry = self.engine.registry();
        Catalog {
            ports: registry.list_ports().cloned().collect(),
            vessels: registry.list_vessels().cloned().collect(),
        }
    }

    #[wasm_bindgen]
    pub fn compute_routes(
        &mut self,
        origin: &str,
        destination: &str,
        vessel: &str,
    ) -> Result<CandidateList, JsError> {
        let candidates = self
            .engine
            .compute_routes(origin, destination, vessel, &mut self.rng)?;
        Ok(CandidateList {
            candidates: candidates.to_vec(),
        })
    }

    #[wasm_bindgen]
    pub fn optimize(
        &mut self,
        origin: &str,
        destination: &str,
        vessel: &str,
        objective: &str,
    ) -> Result<RouteComparison, JsError> {
        let objective: Objective = objective.parse()?;
        Ok(self
            .engine
            .optimize(origin, destination, vessel, objective, &mut self.rng)?)
    }

    /// Run one of `SAMPLE_SCENARIOS` by index.
    #[wasm_bindgen]
    pub fn run_scenario(&mut self, index: usize) -> Result<RouteComparison, JsError> {
        let scenario = SAMPLE_SCENARIOS
            .get(index)
            .ok_or_else(|| JsError::new(&format!("no sample scenario #{index}")))?;
        Ok(scenario.run(&self.engine, &mut self.rng)?)
    }

    #[wasm_bindgen]
    pub fn scenario_count(&self) -> usize {
        SAMPLE_SCENARIOS.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planner_catalog_lists_reference_data() {
        let planner = RoutePlanner::new();
        let catalog = planner.catalog();
        assert_eq!(catalog.ports.len(), 18);
        assert_eq!(catalog.vessels.len(), 6);
        assert_eq!(catalog.ports[0].id, "OSLO");
    }

    #[test]
    fn test_planner_seed_reproducibility() {
        let mut a = RoutePlanner::with_seed(5);
        let mut b = RoutePlanner::with_seed(5);

        let ra = a.optimize("SINGAPORE", "ROTTERDAM", "Tanker", "weather_safety").ok().unwrap();
        let rb = b.optimize("SINGAPORE", "ROTTERDAM", "Tanker", "weather_safety").ok().unwrap();
        assert_eq!(ra, rb);

        // The planner's generator advances between requests.
        let again = a.optimize("SINGAPORE", "ROTTERDAM", "Tanker", "weather_safety").ok().unwrap();
        assert_ne!(
            ra.candidates[0].weather_risk_score,
            again.candidates[0].weather_risk_score
        );
    }

    #[test]
    fn test_planner_runs_every_scenario() {
        let mut planner = RoutePlanner::new();
        for index in 0..planner.scenario_count() {
            let comparison = planner.run_scenario(index).ok().unwrap();
            assert_eq!(comparison.origin, SAMPLE_SCENARIOS[index].origin);
        }
    }

    #[test]
    fn test_planner_compute_routes() {
        let mut planner = RoutePlanner::new();
        let list = planner
            .compute_routes("NEW_YORK", "LONDON", "General Cargo")
            .ok()
            .unwrap();
        assert_eq!(list.candidates.len(), 3);
    }
}
