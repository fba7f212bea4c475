use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use std::fmt;
use std::str::FromStr;
use tsify_next::Tsify;

use crate::error::RouteError;

// ============================================================================
// IDs - Arena keys for registry entries
// ============================================================================

new_key_type! {
    pub struct PortId;
    pub struct VesselId;
}

// ============================================================================
// Coordinates
// ============================================================================

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

// ============================================================================
// Route Kind - The three variants generated per request
// ============================================================================

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Tsify,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    Direct,
    WeatherOptimized,
    FuelEfficient,
}

impl RouteKind {
    /// Declaration order; also the tie-break order for selection.
    pub const ALL: [RouteKind; 3] = [
        RouteKind::Direct,
        RouteKind::WeatherOptimized,
        RouteKind::FuelEfficient,
    ];

    /// Multiplier applied to the great-circle distance.
    pub fn distance_multiplier(self) -> f64 {
        match self {
            RouteKind::Direct => 1.00,
            RouteKind::WeatherOptimized => 1.08,
            RouteKind::FuelEfficient => 1.12,
        }
    }

    /// Latitude offset of the detour midpoint, in degrees. `None` for the
    /// two-point direct path.
    pub fn midpoint_lat_offset(self) -> Option<f64> {
        match self {
            RouteKind::Direct => None,
            RouteKind::WeatherOptimized => Some(1.0),
            RouteKind::FuelEfficient => Some(-0.5),
        }
    }

    /// Scales base fuel burn (currents, calmer seas).
    pub fn fuel_efficiency_modifier(self) -> f64 {
        match self {
            RouteKind::Direct => 1.00,
            RouteKind::WeatherOptimized => 0.92,
            RouteKind::FuelEfficient => 0.85,
        }
    }

    /// Mean of the weather-risk score before jitter.
    pub fn weather_risk_base(self) -> f64 {
        match self {
            RouteKind::Direct => 0.45,
            RouteKind::WeatherOptimized => 0.15,
            RouteKind::FuelEfficient => 0.35,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RouteKind::Direct => "Direct Route",
            RouteKind::WeatherOptimized => "Weather-Optimized Route",
            RouteKind::FuelEfficient => "Fuel-Efficient Route",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RouteKind::Direct => "Shortest distance between ports",
            RouteKind::WeatherOptimized => "Avoids severe weather systems and storms",
            RouteKind::FuelEfficient => "Optimized for favorable currents and winds",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RouteKind::Direct => "direct",
            RouteKind::WeatherOptimized => "weather_optimized",
            RouteKind::FuelEfficient => "fuel_efficient",
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Objective - What the selector minimizes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    Cost,
    Time,
    Environmental,
    WeatherSafety,
}

impl Objective {
    pub fn all() -> impl Iterator<Item = Objective> {
        [
            Objective::Cost,
            Objective::Time,
            Objective::Environmental,
            Objective::WeatherSafety,
        ]
        .into_iter()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Objective::Cost => "cost",
            Objective::Time => "time",
            Objective::Environmental => "environmental",
            Objective::WeatherSafety => "weather_safety",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Objective::Cost => "Minimize total operational costs",
            Objective::Time => "Minimize travel time",
            Objective::Environmental => "Minimize CO₂ emissions",
            Objective::WeatherSafety => "Minimize weather risks",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the canonical snake_case names and the dashboard labels
/// ("Cost", "Speed", "Environmental", "Weather Safety"), case-insensitively.
impl FromStr for Objective {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "cost" => Ok(Objective::Cost),
            "time" | "speed" => Ok(Objective::Time),
            "environmental" => Ok(Objective::Environmental),
            "weather_safety" => Ok(Objective::WeatherSafety),
            _ => Err(RouteError::InvalidObjective(s.to_string())),
        }
    }
}

// ============================================================================
// Port Facilities
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "kebab-case")]
pub enum Facility {
    Container,
    Bulk,
    General,
    RoRo,
    Oil,
    Chemical,
    Transhipment,
    Cruise,
    Offshore,
}

// ============================================================================
// Vessel Category & Capacity
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "snake_case")]
pub enum VesselCategory {
    Container,
    Bulk,
    Tanker,
    GeneralCargo,
}

/// Cargo capacity. Informational only; never enters the cost model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "snake_case")]
pub enum Capacity {
    Teu(u32),
    Dwt(u32),
}
