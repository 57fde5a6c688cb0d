//! Immutable problem instance data.

use anyhow::{bail, Result};

use crate::distance::DistanceMatrix;

use super::Customer;

/// A VRPTW problem instance: one depot, identical vehicles with a shared
/// capacity, customers with demands and time windows, and a travel
/// distance matrix.
///
/// Loaded once and read-only for the lifetime of a run. Index 0 in both
/// `customers` and the matrix is the depot; customer ids are contiguous
/// `1..=num_customers`.
///
/// # Examples
///
/// ```
/// use vrptw_ga::models::{Customer, ProblemInstance};
/// use vrptw_ga::distance::DistanceMatrix;
///
/// let customers = vec![
///     Customer::depot(100.0),
///     Customer::new(1, 10.0, 5.0, 0.0, 50.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 4.0, 4.0, 0.0]).unwrap();
///
/// let instance = ProblemInstance::new(30.0, customers, dm).unwrap();
/// assert_eq!(instance.num_customers(), 1);
/// assert_eq!(instance.travel(0, 1), 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    vehicle_capacity: f64,
    customers: Vec<Customer>,
    distances: DistanceMatrix,
}

impl ProblemInstance {
    /// Creates a validated problem instance.
    ///
    /// `customers[0]` must be the depot and customer ids must be
    /// contiguous, so that every id an individual can reference has a
    /// matching entry and the matrix is addressable for every pair.
    pub fn new(
        vehicle_capacity: f64,
        customers: Vec<Customer>,
        distances: DistanceMatrix,
    ) -> Result<Self> {
        if !(vehicle_capacity > 0.0) || !vehicle_capacity.is_finite() {
            bail!("vehicle capacity must be positive, got {vehicle_capacity}");
        }
        if customers.len() < 2 {
            bail!("instance must contain the depot and at least one customer");
        }
        for (i, c) in customers.iter().enumerate() {
            if c.id() != i {
                bail!("customer ids must be contiguous: expected {i}, got {}", c.id());
            }
        }
        if distances.size() != customers.len() {
            bail!(
                "distance matrix covers {} locations but instance has {}",
                distances.size(),
                customers.len()
            );
        }
        Ok(Self {
            vehicle_capacity,
            customers,
            distances,
        })
    }

    /// Capacity shared by all vehicles.
    pub fn vehicle_capacity(&self) -> f64 {
        self.vehicle_capacity
    }

    /// Latest allowed return time to the depot.
    pub fn depot_due_time(&self) -> f64 {
        self.customers[0].time_window().due()
    }

    /// All locations (index 0 = depot, 1..=N = customers).
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Number of customers (excluding depot).
    pub fn num_customers(&self) -> usize {
        self.customers.len() - 1
    }

    /// Returns the customer (or depot) with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id is out of range.
    pub fn customer(&self, id: usize) -> &Customer {
        &self.customers[id]
    }

    /// Travel distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either id is out of range.
    pub fn travel(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }
}
