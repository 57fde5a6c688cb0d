//! Cost model and fitness evaluation for decoded route plans.

use crate::models::{ProblemInstance, RoutePlan};

/// Fitness assigned when a plan's total cost is not positive.
///
/// Total cost is expected to be positive for any real instance (nonzero
/// travel distances); this cap keeps fitness finite if it is not.
const ZERO_COST_FITNESS: f64 = 1e12;

/// Cost coefficients for evaluating a route plan.
///
/// A sub-route costs `init_cost + unit_cost * distance` in transport,
/// plus time penalties: `wait_cost` per unit of early arrival before a
/// customer's ready time and `delay_cost` per unit of late arrival past
/// its due time. The plan's total cost is the sum over sub-routes, so
/// every extra vehicle adds at least `init_cost`.
///
/// Fitness is the reciprocal of total cost; higher is better.
///
/// # Examples
///
/// ```
/// use vrptw_ga::evaluation::CostModel;
///
/// let model = CostModel::default()
///     .with_unit_cost(8.0)
///     .with_init_cost(60.0);
/// assert_eq!(model.unit_cost(), 8.0);
/// assert_eq!(model.wait_cost(), 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CostModel {
    unit_cost: f64,
    init_cost: f64,
    wait_cost: f64,
    delay_cost: f64,
}

impl Default for CostModel {
    /// Distance-only cost: `unit_cost = 1.0`, all other coefficients zero.
    fn default() -> Self {
        Self {
            unit_cost: 1.0,
            init_cost: 0.0,
            wait_cost: 0.0,
            delay_cost: 0.0,
        }
    }
}

impl CostModel {
    /// Sets the cost per unit of travel distance.
    pub fn with_unit_cost(mut self, cost: f64) -> Self {
        self.unit_cost = cost;
        self
    }

    /// Sets the fixed dispatch cost per vehicle.
    pub fn with_init_cost(mut self, cost: f64) -> Self {
        self.init_cost = cost;
        self
    }

    /// Sets the penalty per unit of waiting before a ready time.
    pub fn with_wait_cost(mut self, cost: f64) -> Self {
        self.wait_cost = cost;
        self
    }

    /// Sets the penalty per unit of delay past a due time.
    pub fn with_delay_cost(mut self, cost: f64) -> Self {
        self.delay_cost = cost;
        self
    }

    /// Cost per unit distance.
    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }

    /// Fixed dispatch cost per vehicle.
    pub fn init_cost(&self) -> f64 {
        self.init_cost
    }

    /// Waiting penalty coefficient.
    pub fn wait_cost(&self) -> f64 {
        self.wait_cost
    }

    /// Delay penalty coefficient.
    pub fn delay_cost(&self) -> f64 {
        self.delay_cost
    }

    /// Computes the total cost of a route plan against an instance.
    pub fn total_cost(&self, plan: &RoutePlan, instance: &ProblemInstance) -> f64 {
        plan.sub_routes()
            .iter()
            .map(|sub_route| self.sub_route_cost(sub_route, instance))
            .sum()
    }

    /// Computes the cost of a single sub-route.
    ///
    /// Walks the sub-route from the depot, accumulating distance and
    /// time penalties per visited customer. Waiting charges a penalty
    /// but does not advance the clock to the ready time: elapsed time
    /// moves from arrival plus service only.
    pub fn sub_route_cost(&self, sub_route: &[usize], instance: &ProblemInstance) -> f64 {
        let mut distance = 0.0;
        let mut time_cost = 0.0;
        let mut elapsed_time = 0.0;
        let mut last_id = 0;

        for &cid in sub_route {
            let leg = instance.travel(last_id, cid);
            distance += leg;

            let arrival = elapsed_time + leg;
            let customer = instance.customer(cid);
            let tw = customer.time_window();
            time_cost += self.wait_cost * tw.waiting_time(arrival)
                + self.delay_cost * tw.lateness(arrival);

            elapsed_time = arrival + customer.service_time();
            last_id = cid;
        }

        // Return leg to depot
        distance += instance.travel(last_id, 0);

        let transport_cost = self.init_cost + self.unit_cost * distance;
        transport_cost + time_cost
    }

    /// Converts a total cost into a fitness value (reciprocal).
    ///
    /// Non-positive costs map to a large finite fitness instead of
    /// dividing by zero.
    pub fn fitness(&self, total_cost: f64) -> f64 {
        if total_cost > 0.0 {
            1.0 / total_cost
        } else {
            ZERO_COST_FITNESS
        }
    }
}
