//! # Daylight Library
//!
//! Internal library for the daylight binary: today's sunrise, sunset and
//! day length for a fixed place, compared with the shortest day of the year.
//!
//! ## Architecture
//!
//! - **Geographic**: `geo` holds the location, civil-date handling, the
//!   sunrise/sunset provider seam and the shortest-day scan
//! - **Display**: `display` formats durations and localized dates and
//!   defines the output slots and sinks
//! - **Rendering**: `render` ties clock, provider and formatting together
//! - **Configuration**: `config` for TOML-based settings
//! - **Commands**: `commands` for the CLI subcommands (show, watch, shortest, help)
//! - **Infrastructure**: argument parsing, time source, logging

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod commands;
pub mod config;
pub mod constants;
pub mod display;
pub mod geo;
pub mod render;
pub mod time_source;

pub use render::{DaylightReport, Renderer};
