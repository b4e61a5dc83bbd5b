//! CLI library components for the ad performance validator.

pub mod logging;
pub mod output;
