//! Fuel, cost, emissions, and weather-risk model for a single route.
//!
//! All outputs keep full floating-point precision; rounding for display is
//! done by the report layer. The weather-risk jitter is the only random
//! input and is drawn from the caller's `Rng`, so a seeded generator makes
//! the whole evaluation reproducible.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Serialize};
use tsify_next::Tsify;

use crate::config::CostModelConfig;
use crate::error::RouteError;
use crate::routing::RouteVariant;
use crate::types::{LatLon, RouteKind};
use crate::vessel::VesselProfile;

/// A fully costed route option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct RouteCandidate {
    pub kind: RouteKind,
    pub waypoints: Vec<LatLon>,
    pub distance_nm: f64,
    pub fuel_efficiency_modifier: f64,
    pub fuel_consumption_tons: f64,
    pub fuel_cost: f64,
    pub travel_time_hours: f64,
    pub travel_time_days: f64,
    pub time_cost: f64,
    pub port_fees: f64,
    /// Always `fuel_cost + time_cost + port_fees`.
    pub total_cost: f64,
    pub co2_emissions_tons: f64,
    /// Synthetic risk index, clamped into the configured bounds.
    pub weather_risk_score: f64,
}

#[derive(Debug, Clone, Default)]
pub struct CostModel {
    config: CostModelConfig,
}

impl CostModel {
    pub fn new(config: CostModelConfig) -> Result<Self, RouteError> {
        let CostModelConfig {
            fuel_price_per_ton,
            port_fees,
            risk_jitter_std_dev,
            risk_floor,
            risk_ceiling,
        } = config;

        for (name, value) in [
            ("fuel_price_per_ton", fuel_price_per_ton),
            ("port_fees", port_fees),
            ("risk_jitter_std_dev", risk_jitter_std_dev),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RouteError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if !(risk_floor.is_finite() && risk_ceiling.is_finite()) || risk_floor > risk_ceiling {
            return Err(RouteError::InvalidConfig(format!(
                "risk bounds [{risk_floor}, {risk_ceiling}] are not a valid range"
            )));
        }

        Ok(Self { config })
    }

    pub fn config(&self) -> &CostModelConfig {
        &self.config
    }

    /// Cost a route skeleton for the given vessel.
    pub fn evaluate<R: Rng>(
        &self,
        variant: RouteVariant,
        vessel: &VesselProfile,
        rng: &mut R,
    ) -> RouteCandidate {
        let RouteVariant {
            kind,
            waypoints,
            distance_nm,
        } = variant;
        let cfg = &self.config;

        let fuel_efficiency_modifier = kind.fuel_efficiency_modifier();
        let base_fuel = distance_nm * vessel.consumption_per_nm;
        let fuel_consumption_tons = base_fuel * fuel_efficiency_modifier;
        let fuel_cost = fuel_consumption_tons * cfg.fuel_price_per_ton;

        let travel_time_hours = distance_nm / vessel.avg_speed;
        let travel_time_days = travel_time_hours / 24.0;
        let time_cost = travel_time_days * vessel.daily_cost;

        let port_fees = cfg.port_fees;
        let total_cost = fuel_cost + time_cost + port_fees;

        let co2_emissions_tons = fuel_consumption_tons * vessel.co2_factor;
        let weather_risk_score = self.weather_risk(kind, rng);

        #[cfg(feature = "instrument")]
        tracing::info!(
            target: "route_candidate",
            kind = kind.as_str(),
            vessel = vessel.id.as_str(),
            distance_nm = distance_nm,
            fuel_tons = fuel_consumption_tons,
            total_cost = total_cost,
            travel_time_hours = travel_time_hours,
            co2_tons = co2_emissions_tons,
            weather_risk = weather_risk_score,
        );

        RouteCandidate {
            kind,
            waypoints,
            distance_nm,
            fuel_efficiency_modifier,
            fuel_consumption_tons,
            fuel_cost,
            travel_time_hours,
            travel_time_days,
            time_cost,
            port_fees,
            total_cost,
            co2_emissions_tons,
            weather_risk_score,
        }
    }

    /// `clamp(base + N(0, σ), floor, ceiling)`.
    fn weather_risk<R: Rng>(&self, kind: RouteKind, rng: &mut R) -> f64 {
        let z: f64 = StandardNormal.sample(rng);
        let jitter = z * self.config.risk_jitter_std_dev;
        (kind.weather_risk_base() + jitter).clamp(self.config.risk_floor, self.config.risk_ceiling)
    }
}
