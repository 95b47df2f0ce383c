//! Utility functions

pub mod time;

pub use time::contest_duration_repr;
