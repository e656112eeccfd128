//! Constants for the sagwatch core
//!
//! Centralized, documented numeric values. Always use these instead of
//! magic numbers; when adding one, say where the value comes from.

/// Time conversion factors and tick intervals.
pub mod time;

/// Default tunables for the monitor configuration.
pub mod defaults;
