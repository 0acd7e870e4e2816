//! Colormapper - crowdsourced color naming
//!
//! HTTP service around the `oklch-map` engine: hands out question colors,
//! collects and moderates names, and serves the clustered map of each hue.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
