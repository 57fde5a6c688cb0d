//! Customer and time window types.

/// A time window constraint for service at a customer location.
///
/// The vehicle should arrive no later than `due` and may arrive as early
/// as `ready` (arriving early means waiting).
///
/// # Examples
///
/// ```
/// use vrptw_ga::models::TimeWindow;
///
/// let tw = TimeWindow::new(100.0, 200.0).unwrap();
/// assert!(tw.ready() <= tw.due());
/// assert!(tw.contains(150.0));
/// assert!(!tw.contains(250.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    ready: f64,
    due: f64,
}

impl TimeWindow {
    /// Creates a new time window.
    ///
    /// Returns `None` if `ready > due` or either value is non-finite.
    pub fn new(ready: f64, due: f64) -> Option<Self> {
        if !ready.is_finite() || !due.is_finite() || ready > due {
            return None;
        }
        Some(Self { ready, due })
    }

    /// Earliest allowable arrival time.
    pub fn ready(&self) -> f64 {
        self.ready
    }

    /// Latest allowable arrival time.
    pub fn due(&self) -> f64 {
        self.due
    }

    /// Returns `true` if the given time falls within this window.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.ready && time <= self.due
    }

    /// Returns the waiting time if arriving at the given time.
    ///
    /// Zero if the vehicle arrives within or after the window.
    pub fn waiting_time(&self, arrival: f64) -> f64 {
        if arrival < self.ready {
            self.ready - arrival
        } else {
            0.0
        }
    }

    /// Returns how far past `due` the given arrival is.
    ///
    /// Zero if the vehicle arrives within or before the window.
    pub fn lateness(&self, arrival: f64) -> f64 {
        if arrival > self.due {
            arrival - self.due
        } else {
            0.0
        }
    }
}

/// A customer (or depot) in a routing problem.
///
/// Customer 0 is conventionally the depot. Customers have a demand, a
/// service duration, and a time window. Travel distances live in the
/// instance's distance matrix, not on the customer.
///
/// # Examples
///
/// ```
/// use vrptw_ga::models::Customer;
///
/// let depot = Customer::depot(1000.0);
/// assert_eq!(depot.id(), 0);
/// assert_eq!(depot.demand(), 0.0);
///
/// let c = Customer::new(1, 10.0, 90.0, 0.0, 500.0).unwrap();
/// assert_eq!(c.id(), 1);
/// assert_eq!(c.demand(), 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct Customer {
    id: usize,
    demand: f64,
    service_time: f64,
    time_window: TimeWindow,
}

impl Customer {
    /// Creates a new customer.
    ///
    /// Returns `None` if the time window is invalid (`ready > due` or
    /// non-finite bounds).
    pub fn new(id: usize, demand: f64, service_time: f64, ready: f64, due: f64) -> Option<Self> {
        Some(Self {
            id,
            demand,
            service_time,
            time_window: TimeWindow::new(ready, due)?,
        })
    }

    /// Creates a depot with the given closing time (id=0, demand=0).
    ///
    /// The depot's due time is the latest allowed return time for every
    /// vehicle.
    pub fn depot(due_time: f64) -> Self {
        Self {
            id: 0,
            demand: 0.0,
            service_time: 0.0,
            time_window: TimeWindow {
                ready: 0.0,
                due: due_time,
            },
        }
    }

    /// Customer ID (0 = depot).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Demand at this customer (units to deliver).
    pub fn demand(&self) -> f64 {
        self.demand
    }

    /// Service duration at this customer.
    pub fn service_time(&self) -> f64 {
        self.service_time
    }

    /// Time window constraint.
    pub fn time_window(&self) -> &TimeWindow {
        &self.time_window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_window_valid() {
        let tw = TimeWindow::new(10.0, 20.0).expect("valid");
        assert_eq!(tw.ready(), 10.0);
        assert_eq!(tw.due(), 20.0);
    }

    #[test]
    fn test_time_window_invalid() {
        assert!(TimeWindow::new(20.0, 10.0).is_none());
        assert!(TimeWindow::new(f64::NAN, 10.0).is_none());
        assert!(TimeWindow::new(10.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_time_window_contains() {
        let tw = TimeWindow::new(10.0, 20.0).expect("valid");
        assert!(tw.contains(10.0));
        assert!(tw.contains(15.0));
        assert!(tw.contains(20.0));
        assert!(!tw.contains(9.9));
        assert!(!tw.contains(20.1));
    }

    #[test]
    fn test_time_window_waiting() {
        let tw = TimeWindow::new(10.0, 20.0).expect("valid");
        assert!((tw.waiting_time(5.0) - 5.0).abs() < 1e-10);
        assert!((tw.waiting_time(10.0)).abs() < 1e-10);
        assert!((tw.waiting_time(25.0)).abs() < 1e-10);
    }

    #[test]
    fn test_time_window_lateness() {
        let tw = TimeWindow::new(10.0, 20.0).expect("valid");
        assert!((tw.lateness(25.0) - 5.0).abs() < 1e-10);
        assert!((tw.lateness(20.0)).abs() < 1e-10);
        assert!((tw.lateness(5.0)).abs() < 1e-10);
    }

    #[test]
    fn test_customer_new() {
        let c = Customer::new(1, 5.0, 3.0, 0.0, 100.0).expect("valid");
        assert_eq!(c.id(), 1);
        assert_eq!(c.demand(), 5.0);
        assert_eq!(c.service_time(), 3.0);
        assert_eq!(c.time_window().ready(), 0.0);
        assert_eq!(c.time_window().due(), 100.0);
    }

    #[test]
    fn test_customer_invalid_window() {
        assert!(Customer::new(1, 5.0, 3.0, 100.0, 0.0).is_none());
    }

    #[test]
    fn test_customer_depot() {
        let d = Customer::depot(1236.0);
        assert_eq!(d.id(), 0);
        assert_eq!(d.demand(), 0.0);
        assert_eq!(d.service_time(), 0.0);
        assert_eq!(d.time_window().due(), 1236.0);
    }
}
