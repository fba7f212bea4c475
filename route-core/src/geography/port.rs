// Port reference data

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;

use crate::types::{Facility, LatLon};

/// A port that routes can start or end at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct Port {
    /// Unique code, e.g. `OSLO` or `LOS_ANGELES`.
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
    pub facilities: Vec<Facility>,
}

impl Port {
    pub fn new(id: &str, lat: f64, lon: f64, country: &str, facilities: &[Facility]) -> Self {
        Self {
            id: id.to_string(),
            lat,
            lon,
            country: country.to_string(),
            facilities: facilities.to_vec(),
        }
    }

    pub fn position(&self) -> LatLon {
        LatLon::new(self.lat, self.lon)
    }

    pub fn has_facility(&self, facility: Facility) -> bool {
        self.facilities.contains(&facility)
    }
}
