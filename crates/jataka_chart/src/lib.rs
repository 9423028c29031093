//! Natal chart assembly over the time and sidereal math crates.
//!
//! This crate provides:
//! - [`EphemerisSource`], the backend trait supplying tropical longitudes
//! - [`BirthMoment`] / [`ChartConfig`] inputs
//! - [`compute_chart`], producing a [`ChartResult`] with the ascendant,
//!   all nine grahas, and the twelve whole-sign houses

pub mod chart;
pub mod error;
pub mod provider;

pub use chart::{
    AscendantInfo, BirthMoment, ChartConfig, ChartResult, GrahaEntry, compute_chart,
};
pub use error::ChartError;
pub use provider::{BodyPosition, EphemerisError, EphemerisSource};
