use serde::{Deserialize, Serialize};
use tsify_next::Tsify;

use crate::types::{Capacity, VesselCategory};

/// Performance, cost, and emission coefficients for a vessel class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct VesselProfile {
    /// Class name, e.g. `Container Large`.
    pub id: String,
    pub category: VesselCategory,
    pub consumption_per_nm: f64, // tons fuel per nautical mile
    pub avg_speed: f64,          // knots
    pub daily_cost: f64,         // currency per day
    pub co2_factor: f64,         // tons CO2 per ton fuel
    pub capacity: Capacity,
    pub description: String,
}

impl VesselProfile {
    /// Sanity check used when loading profiles from configuration: every
    /// coefficient that divides or multiplies a route must be positive.
    pub(crate) fn validate(&self) -> Result<(), String> {
        let fields = [
            ("consumption_per_nm", self.consumption_per_nm),
            ("avg_speed", self.avg_speed),
            ("daily_cost", self.daily_cost),
            ("co2_factor", self.co2_factor),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!(
                    "vessel '{}' has non-positive {name}: {value}",
                    self.id
                ));
            }
        }
        Ok(())
    }
}
