//! Adapters layer: Concrete implementations of ports.
//!
//! - `logistic`: calibrated logistic-regression model loaded from JSON

pub mod logistic;
