//! Choosing the optimal candidate and comparing it against the direct route.

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;

use crate::config::SavingsConfig;
use crate::error::RouteError;
use crate::routing::RouteCandidate;
use crate::types::{Objective, RouteKind};

impl Objective {
    /// The quantity this objective minimizes.
    pub fn key(self, candidate: &RouteCandidate) -> f64 {
        match self {
            Objective::Cost => candidate.total_cost,
            Objective::Time => candidate.travel_time_hours,
            Objective::Environmental => candidate.co2_emissions_tons,
            Objective::WeatherSafety => candidate.weather_risk_score,
        }
    }
}

/// Candidate minimizing the objective's key. Ties go to the earlier kind in
/// declaration order, independent of slice order.
pub fn select_optimal(
    candidates: &[RouteCandidate],
    objective: Objective,
) -> Result<&RouteCandidate, RouteError> {
    let optimal = candidates
        .iter()
        .min_by(|a, b| {
            objective
                .key(a)
                .total_cmp(&objective.key(b))
                .then(a.kind.cmp(&b.kind))
        })
        .ok_or(RouteError::EmptyCandidates)?;

    #[cfg(feature = "instrument")]
    tracing::info!(
        target: "route_selection",
        objective = objective.as_str(),
        optimal = optimal.kind.as_str(),
        key = objective.key(optimal),
    );

    Ok(optimal)
}

/// Like [`select_optimal`], parsing the objective from its name first.
pub fn select_optimal_by_name<'a>(
    candidates: &'a [RouteCandidate],
    objective: &str,
) -> Result<&'a RouteCandidate, RouteError> {
    let objective: Objective = objective.parse()?;
    select_optimal(candidates, objective)
}

/// Deltas of the chosen route relative to the direct route. Positive
/// savings mean the chosen route is cheaper / cleaner than direct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct RouteSavings {
    pub cost_savings: f64,
    pub cost_savings_pct: f64,
    pub co2_reduction_tons: f64,
    pub co2_reduction_pct: f64,
    /// Chosen minus direct; positive means the chosen route is slower.
    pub time_delta_hours: f64,
    pub annual_cost_impact: f64,
    pub annual_co2_impact_tons: f64,
}

/// Savings of `optimal` vs the direct candidate. `None` when the optimum is
/// the direct route itself or no direct candidate is present.
pub fn savings_vs_direct(
    candidates: &[RouteCandidate],
    optimal: &RouteCandidate,
    config: &SavingsConfig,
) -> Option<RouteSavings> {
    if optimal.kind == RouteKind::Direct {
        return None;
    }
    let direct = candidates.iter().find(|c| c.kind == RouteKind::Direct)?;

    let cost_savings = direct.total_cost - optimal.total_cost;
    let co2_reduction_tons = direct.co2_emissions_tons - optimal.co2_emissions_tons;

    Some(RouteSavings {
        cost_savings,
        cost_savings_pct: percent_of(cost_savings, direct.total_cost),
        co2_reduction_tons,
        co2_reduction_pct: percent_of(co2_reduction_tons, direct.co2_emissions_tons),
        time_delta_hours: optimal.travel_time_hours - direct.travel_time_hours,
        annual_cost_impact: cost_savings * config.voyages_per_year,
        annual_co2_impact_tons: co2_reduction_tons * config.voyages_per_year,
    })
}

fn percent_of(delta: f64, base: f64) -> f64 {
    if base > 0.0 { delta / base * 100.0 } else { 0.0 }
}
