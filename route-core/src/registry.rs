//! Port and vessel reference data.
//!
//! Entries live in slotmap arenas with a code -> key index, so listing keeps
//! insertion order and lookups by code are O(1). A registry is never mutated
//! after construction.

use std::collections::HashMap;

use serde::Deserialize;
use slotmap::SlotMap;

use crate::error::RouteError;
use crate::geography::Port;
use crate::types::{Capacity, Facility, PortId, VesselCategory, VesselId};
use crate::vessel::VesselProfile;

#[derive(Debug, Clone, Default)]
pub struct Registry {
    ports: SlotMap<PortId, Port>,
    port_index: HashMap<String, PortId>,
    vessels: SlotMap<VesselId, VesselProfile>,
    vessel_index: HashMap<String, VesselId>,
}

/// Shape of a registry JSON document.
#[derive(Debug, Deserialize)]
struct RegistryDocument {
    ports: Vec<Port>,
    vessels: Vec<VesselProfile>,
}

impl Registry {
    /// Build a registry from port and vessel lists. Duplicate ids and
    /// out-of-range coefficients are rejected.
    pub fn new(ports: Vec<Port>, vessels: Vec<VesselProfile>) -> Result<Self, RouteError> {
        let mut registry = Self::default();
        for port in ports {
            registry.insert_port(port)?;
        }
        for vessel in vessels {
            registry.insert_vessel(vessel)?;
        }
        Ok(registry)
    }

    /// Parse a `{"ports": [...], "vessels": [...]}` document.
    pub fn from_json(json: &str) -> Result<Self, RouteError> {
        let doc: RegistryDocument = serde_json::from_str(json)?;
        Self::new(doc.ports, doc.vessels)
    }

    /// The built-in reference set: 18 ports and 6 vessel classes.
    pub fn with_reference_data() -> Self {
        let mut registry = Self::default();
        for port in reference_ports() {
            let id = registry.ports.insert(port.clone());
            registry.port_index.insert(port.id, id);
        }
        for vessel in reference_vessels() {
            let id = registry.vessels.insert(vessel.clone());
            registry.vessel_index.insert(vessel.id, id);
        }
        registry
    }

    fn insert_port(&mut self, port: Port) -> Result<PortId, RouteError> {
        if self.port_index.contains_key(&port.id) {
            return Err(RouteError::InvalidConfig(format!(
                "duplicate port id '{}'",
                port.id
            )));
        }
        if !(-90.0..=90.0).contains(&port.lat) || !(-180.0..=180.0).contains(&port.lon) {
            return Err(RouteError::InvalidConfig(format!(
                "port '{}' has out-of-range coordinates ({}, {})",
                port.id, port.lat, port.lon
            )));
        }
        let code = port.id.clone();
        let id = self.ports.insert(port);
        self.port_index.insert(code, id);
        Ok(id)
    }

    fn insert_vessel(&mut self, vessel: VesselProfile) -> Result<VesselId, RouteError> {
        if self.vessel_index.contains_key(&vessel.id) {
            return Err(RouteError::InvalidConfig(format!(
                "duplicate vessel id '{}'",
                vessel.id
            )));
        }
        vessel.validate().map_err(RouteError::InvalidConfig)?;
        let code = vessel.id.clone();
        let id = self.vessels.insert(vessel);
        self.vessel_index.insert(code, id);
        Ok(id)
    }

    pub fn list_ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.values()
    }

    pub fn get_port(&self, id: &str) -> Result<&Port, RouteError> {
        self.port_index
            .get(id)
            .and_then(|key| self.ports.get(*key))
            .ok_or_else(|| RouteError::port_not_found(id))
    }

    pub fn list_vessels(&self) -> impl Iterator<Item = &VesselProfile> {
        self.vessels.values()
    }

    pub fn get_vessel(&self, id: &str) -> Result<&VesselProfile, RouteError> {
        self.vessel_index
            .get(id)
            .and_then(|key| self.vessels.get(*key))
            .ok_or_else(|| RouteError::vessel_not_found(id))
    }

    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    pub fn vessel_count(&self) -> usize {
        self.vessels.len()
    }
}

// ============================================================================
// Reference Data
// ============================================================================

fn reference_ports() -> Vec<Port> {
    use Facility::*;

    vec![
        Port::new("OSLO", 59.9139, 10.7522, "Norway", &[Container, Bulk, General]),
        Port::new("HAMBURG", 53.5511, 9.9937, "Germany", &[Container, Bulk, RoRo]),
        Port::new("ROTTERDAM", 51.9244, 4.4777, "Netherlands", &[Container, Bulk, Oil]),
        Port::new("ANTWERP", 51.2194, 4.4025, "Belgium", &[Container, Chemical]),
        Port::new("SINGAPORE", 1.2966, 103.7764, "Singapore", &[Container, Transhipment]),
        Port::new("SHANGHAI", 31.2304, 121.4737, "China", &[Container, Bulk]),
        Port::new("LOS_ANGELES", 33.7405, -118.2668, "USA", &[Container, RoRo]),
        Port::new("NEW_YORK", 40.6892, -74.0445, "USA", &[Container, General]),
        Port::new("LONDON", 51.5074, -0.1278, "UK", &[Container, General]),
        Port::new("TOKYO", 35.6528, 139.6989, "Japan", &[Container, RoRo]),
        Port::new("DUBAI", 25.2532, 55.3657, "UAE", &[Container, Transhipment]),
        Port::new("BARCELONA", 41.3851, 2.1734, "Spain", &[Container, Cruise]),
        Port::new("STOCKHOLM", 59.3293, 18.0686, "Sweden", &[Container, RoRo]),
        Port::new("COPENHAGEN", 55.6761, 12.5683, "Denmark", &[Container, Bulk]),
        Port::new("GÖTEBORG", 57.7089, 11.9746, "Sweden", &[Container, RoRo]),
        Port::new("BERGEN", 60.3913, 5.3221, "Norway", &[General, Cruise]),
        Port::new("STAVANGER", 58.9700, 5.7331, "Norway", &[Oil, Offshore]),
        Port::new("TRONDHEIM", 63.4305, 10.3951, "Norway", &[General, Bulk]),
    ]
}

fn reference_vessels() -> Vec<VesselProfile> {
    let profile = |id: &str,
                   category: VesselCategory,
                   consumption_per_nm: f64,
                   avg_speed: f64,
                   daily_cost: f64,
                   capacity: Capacity,
                   description: &str| VesselProfile {
        id: id.to_string(),
        category,
        consumption_per_nm,
        avg_speed,
        daily_cost,
        co2_factor: 3.16,
        capacity,
        description: description.to_string(),
    };

    vec![
        profile(
            "Container Large",
            VesselCategory::Container,
            0.35,
            22.0,
            25000.0,
            Capacity::Teu(20000),
            "Ultra Large Container Vessel (ULCV) - 400m length",
        ),
        profile(
            "Container Medium",
            VesselCategory::Container,
            0.25,
            20.0,
            18000.0,
            Capacity::Teu(12000),
            "Medium Container Ship - 300m length",
        ),
        profile(
            "Container Small",
            VesselCategory::Container,
            0.18,
            18.0,
            12000.0,
            Capacity::Teu(5000),
            "Feeder Container Ship - 200m length",
        ),
        profile(
            "Bulk Carrier",
            VesselCategory::Bulk,
            0.28,
            14.0,
            15000.0,
            Capacity::Dwt(180000),
            "Capesize Bulk Carrier - 290m length",
        ),
        profile(
            "Tanker",
            VesselCategory::Tanker,
            0.32,
            16.0,
            22000.0,
            Capacity::Dwt(300000),
            "Very Large Crude Carrier (VLCC) - 330m length",
        ),
        profile(
            "General Cargo",
            VesselCategory::GeneralCargo,
            0.20,
            18.0,
            12000.0,
            Capacity::Dwt(25000),
            "Multi-Purpose General Cargo Vessel - 180m length",
        ),
    ]
}
