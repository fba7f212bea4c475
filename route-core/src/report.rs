//! Route comparison documents.
//!
//! A `RouteComparison` is the full-precision result of one optimization
//! request. `display_rows` applies the dashboard's rounding rules; JSON
//! output keeps full precision so downstream tools can re-derive anything.

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;

use crate::error::RouteError;
use crate::routing::{RouteCandidate, RouteSavings};
use crate::types::{Objective, RouteKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct RouteComparison {
    pub origin: String,
    pub destination: String,
    pub vessel: String,
    pub objective: Objective,
    pub optimal: RouteKind,
    /// Present only when the optimum is not the direct route.
    pub savings: Option<RouteSavings>,
    pub candidates: Vec<RouteCandidate>,
}

/// One rounded table row per candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi)]
pub struct DisplayRow {
    pub route: String,
    pub is_optimal: bool,
    pub distance_nm: f64,
    pub travel_time_days: f64,
    pub fuel_consumption_tons: f64,
    pub fuel_cost: f64,
    pub time_cost: f64,
    pub total_cost: f64,
    pub co2_emissions_tons: f64,
    pub weather_risk_score: f64,
    /// Fuel saved vs an unmodified route, in percent (e.g. `15.0`).
    pub fuel_efficiency_pct: f64,
}

impl RouteComparison {
    pub fn optimal_candidate(&self) -> Option<&RouteCandidate> {
        self.candidates.iter().find(|c| c.kind == self.optimal)
    }

    pub fn candidate(&self, kind: RouteKind) -> Option<&RouteCandidate> {
        self.candidates.iter().find(|c| c.kind == kind)
    }

    pub fn display_rows(&self) -> Vec<DisplayRow> {
        self.candidates
            .iter()
            .map(|c| DisplayRow {
                route: c.kind.display_name().to_string(),
                is_optimal: c.kind == self.optimal,
                distance_nm: round_to(c.distance_nm, 0),
                travel_time_days: round_to(c.travel_time_days, 1),
                fuel_consumption_tons: round_to(c.fuel_consumption_tons, 1),
                fuel_cost: round_to(c.fuel_cost, 0),
                time_cost: round_to(c.time_cost, 0),
                total_cost: round_to(c.total_cost, 0),
                co2_emissions_tons: round_to(c.co2_emissions_tons, 1),
                weather_risk_score: round_to(c.weather_risk_score, 2),
                fuel_efficiency_pct: round_to((1.0 - c.fuel_efficiency_modifier) * 100.0, 0),
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String, RouteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, RouteError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LatLon;

    fn comparison() -> RouteComparison {
        let candidate = |kind: RouteKind, total_cost: f64| RouteCandidate {
            kind,
            waypoints: vec![LatLon::new(59.9139, 10.7522), LatLon::new(53.5511, 9.9937)],
            distance_nm: 383.3877,
            fuel_efficiency_modifier: kind.fuel_efficiency_modifier(),
            fuel_consumption_tons: 134.18571,
            fuel_cost: 87_220.71,
            travel_time_hours: 17.4267,
            travel_time_days: 0.726114,
            time_cost: 18_152.84,
            port_fees: 2000.0,
            total_cost,
            co2_emissions_tons: 424.0268,
            weather_risk_score: 0.4349,
        };
        RouteComparison {
            origin: "OSLO".into(),
            destination: "HAMBURG".into(),
            vessel: "Container Large".into(),
            objective: Objective::Cost,
            optimal: RouteKind::FuelEfficient,
            savings: None,
            candidates: vec![
                candidate(RouteKind::Direct, 107_373.55),
                candidate(RouteKind::WeatherOptimized, 106_000.2),
                candidate(RouteKind::FuelEfficient, 104_500.5),
            ],
        }
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(134.18571, 1), 134.2);
        assert_eq!(round_to(107_373.55, 0), 107_374.0);
        assert_eq!(round_to(0.4349, 2), 0.43);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_display_rows() {
        let rows = comparison().display_rows();
        assert_eq!(rows.len(), 3);

        let direct = &rows[0];
        assert_eq!(direct.route, "Direct Route");
        assert!(!direct.is_optimal);
        assert_eq!(direct.distance_nm, 383.0);
        assert_eq!(direct.travel_time_days, 0.7);
        assert_eq!(direct.fuel_consumption_tons, 134.2);
        assert_eq!(direct.total_cost, 107_374.0);
        assert_eq!(direct.co2_emissions_tons, 424.0);
        assert_eq!(direct.weather_risk_score, 0.43);
        assert_eq!(direct.fuel_efficiency_pct, 0.0);

        assert!(rows[2].is_optimal);
        assert_eq!(rows[2].fuel_efficiency_pct, 15.0);
        assert_eq!(rows[1].fuel_efficiency_pct, 8.0);
    }

    #[test]
    fn test_json_keeps_full_precision() {
        let original = comparison();
        let json = original.to_json().unwrap();
        assert!(json.contains("\"weather_optimized\""));
        assert!(json.contains("107373.55"));

        let parsed = RouteComparison::from_json(&json).unwrap();
        assert_eq!(parsed.optimal, original.optimal);
        assert_eq!(parsed.candidates.len(), 3);
        assert_eq!(parsed.candidates[1].kind, RouteKind::WeatherOptimized);
        assert_eq!(parsed.optimal_candidate().unwrap().total_cost, 104_500.5);
    }
}
