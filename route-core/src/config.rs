use serde::{Deserialize, Serialize};

/// Prices and bounds used by the cost/emissions model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostModelConfig {
    /// Bunker fuel price, currency per ton.
    pub fuel_price_per_ton: f64,
    /// Flat fee charged per voyage regardless of route.
    pub port_fees: f64,
    /// Standard deviation of the Gaussian weather-risk jitter.
    pub risk_jitter_std_dev: f64,
    pub risk_floor: f64,
    pub risk_ceiling: f64,
}

impl Default for CostModelConfig {
    fn default() -> Self {
        Self {
            fuel_price_per_ton: 650.0,
            port_fees: 2000.0,
            risk_jitter_std_dev: 0.05,
            risk_floor: 0.1,
            risk_ceiling: 0.9,
        }
    }
}

/// Parameters for the savings-vs-direct projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsConfig {
    /// Voyages per year used to annualize per-voyage deltas.
    pub voyages_per_year: f64,
}

impl Default for SavingsConfig {
    fn default() -> Self {
        Self {
            voyages_per_year: 100.0,
        }
    }
}
