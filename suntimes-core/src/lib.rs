//! Core library for the `suntimes` CLI.
//!
//! This crate defines:
//! - Configuration for the two upstream endpoints
//! - Location resolution (device position or free-text geocoding)
//! - The two-day sunrise/sunset fetch and its display model
//! - The orchestration pipeline and the rendering boundary trait
//!
//! It is used by `suntimes-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod dayinfo;
pub mod error;
pub mod geocode;
pub mod location;
pub mod model;
pub mod orchestrate;
pub mod present;

pub use config::Config;
pub use dayinfo::DayInfoClient;
pub use error::Error;
pub use geocode::GeocodeClient;
pub use location::{DevicePosition, LocationResolver, NoDeviceService};
pub use model::{Coordinates, DayRecord, LocationIntent};
pub use orchestrate::{Renderer, SunTimesService};
pub use present::{DayEntry, DayLabel, DisplayModel, present};
