//! JSON problem instance loader.
//!
//! Instances are JSON documents with `vehicle_capacity`, a `depart`
//! object carrying the depot due time, a nested `distance_matrix`, and
//! one `customer_<id>` entry per customer:
//!
//! ```json
//! {
//!   "vehicle_capacity": 200.0,
//!   "depart": { "due_time": 1236.0 },
//!   "customer_1": { "demand": 10.0, "service_time": 90.0,
//!                   "ready_time": 0.0, "due_time": 1127.0 },
//!   "distance_matrix": [[0.0, 18.7], [18.7, 0.0]]
//! }
//! ```
//!
//! Unknown sibling keys are ignored; a referenced `customer_<id>` key
//! that is absent or malformed is an error.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::distance::DistanceMatrix;
use crate::models::{Customer, ProblemInstance};

#[derive(Debug, Deserialize)]
struct RawDepot {
    due_time: f64,
}

#[derive(Debug, Deserialize)]
struct RawCustomer {
    demand: f64,
    service_time: f64,
    ready_time: f64,
    due_time: f64,
}

#[derive(Debug, Deserialize)]
struct RawInstance {
    vehicle_capacity: f64,
    depart: RawDepot,
    distance_matrix: Vec<Vec<f64>>,
    #[serde(flatten)]
    rest: BTreeMap<String, Value>,
}

/// Loads a problem instance from a JSON file.
pub fn load_instance(path: &Path) -> Result<ProblemInstance> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading instance file {}", path.display()))?;
    parse_instance(&text).with_context(|| format!("parsing instance file {}", path.display()))
}

/// Parses a problem instance from a JSON string.
///
/// Customer entries are collected from `customer_1` upward until the
/// first missing id; a gap in the numbering is an error.
pub fn parse_instance(json: &str) -> Result<ProblemInstance> {
    let raw: RawInstance = serde_json::from_str(json).context("malformed instance document")?;

    if !(raw.depart.due_time >= 0.0) {
        bail!("depot due time must be non-negative, got {}", raw.depart.due_time);
    }

    let mut customers = vec![Customer::depot(raw.depart.due_time)];
    for id in 1.. {
        let key = format!("customer_{id}");
        let Some(value) = raw.rest.get(&key) else {
            break;
        };
        let record: RawCustomer = serde_json::from_value(value.clone())
            .with_context(|| format!("malformed entry {key}"))?;
        let customer = Customer::new(
            id,
            record.demand,
            record.service_time,
            record.ready_time,
            record.due_time,
        )
        .ok_or_else(|| anyhow!("{key} has an invalid time window"))?;
        customers.push(customer);
    }

    let parsed = customers.len() - 1;
    if parsed == 0 {
        bail!("instance defines no customer_1 entry");
    }
    let declared = raw
        .rest
        .keys()
        .filter(|k| k.starts_with("customer_"))
        .count();
    if declared != parsed {
        bail!("customer ids must be contiguous from 1: found {declared} customer entries but ids run 1..={parsed}");
    }

    let distances = DistanceMatrix::from_rows(&raw.distance_matrix)
        .ok_or_else(|| anyhow!("distance matrix is not square"))?;

    ProblemInstance::new(raw.vehicle_capacity, customers, distances)
}
