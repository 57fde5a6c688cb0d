//! Greedy decoder from a customer permutation to vehicle sub-routes.
//!
//! # Algorithm
//!
//! Single left-to-right scan over the permutation, no backtracking. A
//! running vehicle keeps its load and elapsed time; each customer is
//! appended to the current sub-route if the vehicle can still carry its
//! demand and could finish service there and return to the depot before
//! the depot's due time. Otherwise the sub-route is closed and a fresh
//! vehicle starts at that customer.
//!
//! The check gates *grouping* only: a customer that cannot be grouped
//! with any predecessor still opens its own sub-route, even when it
//! alone violates capacity or the depot due time. Such overloads are not
//! rejected here; they surface through the cost model's penalty terms.
//!
//! # Complexity
//!
//! O(n) per decode.

use crate::models::{ProblemInstance, RoutePlan};

/// Decodes a permutation of customer ids into a route plan.
///
/// Deterministic: the same individual against the same instance always
/// yields the same plan. Every customer in the permutation appears in
/// exactly one sub-route, in scan order.
///
/// # Examples
///
/// ```
/// use vrptw_ga::distance::DistanceMatrix;
/// use vrptw_ga::ga::decode;
/// use vrptw_ga::models::{Customer, ProblemInstance};
///
/// let customers = vec![
///     Customer::depot(1000.0),
///     Customer::new(1, 10.0, 0.0, 0.0, 1000.0).unwrap(),
///     Customer::new(2, 10.0, 0.0, 0.0, 1000.0).unwrap(),
/// ];
/// let rows = vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ];
/// let dm = DistanceMatrix::from_rows(&rows).unwrap();
/// let instance = ProblemInstance::new(30.0, customers, dm).unwrap();
///
/// let plan = decode(&[1, 2], &instance);
/// assert_eq!(plan.sub_routes(), &[vec![1, 2]]);
/// ```
pub fn decode(tour: &[usize], instance: &ProblemInstance) -> RoutePlan {
    let capacity = instance.vehicle_capacity();
    let depot_due_time = instance.depot_due_time();

    let mut sub_routes: Vec<Vec<usize>> = Vec::new();
    let mut sub_route: Vec<usize> = Vec::new();
    let mut vehicle_load = 0.0;
    let mut elapsed_time = 0.0;
    let mut last_id = 0;

    for &cid in tour {
        let customer = instance.customer(cid);
        let updated_load = vehicle_load + customer.demand();

        // Tentatively include the return leg: could the vehicle serve
        // this customer and still make it back before the depot closes?
        let return_time = instance.travel(cid, 0);
        let updated_elapsed = elapsed_time
            + instance.travel(last_id, cid)
            + customer.service_time()
            + return_time;

        if updated_load <= capacity && updated_elapsed <= depot_due_time {
            sub_route.push(cid);
            vehicle_load = updated_load;
            // Keep the time through service at cid, not the return leg
            elapsed_time = updated_elapsed - return_time;
        } else {
            if !sub_route.is_empty() {
                sub_routes.push(sub_route);
            }
            sub_route = vec![cid];
            vehicle_load = customer.demand();
            elapsed_time = instance.travel(0, cid) + customer.service_time();
        }
        last_id = cid;
    }

    if !sub_route.is_empty() {
        sub_routes.push(sub_route);
    }

    RoutePlan::new(sub_routes)
}
