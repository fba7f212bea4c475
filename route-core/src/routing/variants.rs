//! Route variant generation.
//!
//! Every request yields the same three geometries: the direct great-circle
//! leg plus two single-waypoint detours whose midpoints are nudged north
//! (weather) or south (currents). Distances are the direct distance scaled
//! by a fixed per-kind multiplier, not re-measured along the waypoints.

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;

use crate::geography::{Port, distance_nm, offset_midpoint};
use crate::types::{LatLon, RouteKind};

/// A route geometry before costing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct RouteVariant {
    pub kind: RouteKind,
    pub waypoints: Vec<LatLon>,
    pub distance_nm: f64,
}

impl RouteVariant {
    fn build(kind: RouteKind, from: LatLon, to: LatLon, direct_distance: f64) -> Self {
        let waypoints = match kind.midpoint_lat_offset() {
            None => vec![from, to],
            Some(offset) => vec![from, offset_midpoint(from, to, offset), to],
        };
        Self {
            kind,
            waypoints,
            distance_nm: direct_distance * kind.distance_multiplier(),
        }
    }
}

/// Generate the three route skeletons, in `RouteKind::ALL` order.
pub fn generate_variants(origin: &Port, destination: &Port) -> [RouteVariant; 3] {
    let from = origin.position();
    let to = destination.position();
    let direct_distance = distance_nm(from, to);

    RouteKind::ALL.map(|kind| RouteVariant::build(kind, from, to, direct_distance))
}
