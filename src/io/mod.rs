//! Problem instance loading.

mod loader;

pub use loader::{load_instance, parse_instance};
