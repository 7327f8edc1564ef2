//! Presentation layer over the raw estimates: strength tiers, humanized
//! durations, the resistance gauge and the chart projection.

mod humanize;
mod label;
mod meter;
mod projection;

pub use humanize::humanize_duration;
pub use label::StrengthLabel;
pub use meter::resistance_percent;
pub use projection::{length_projection, ProjectionPoint, DEFAULT_LENGTH_RANGE};
