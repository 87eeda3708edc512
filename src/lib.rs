//! Avocado Analytics: a dashboard of avocado prices and volumes sold.
//!
//! The binary only wires logging, the one-time CSV load and the window; the
//! loader, query and chart projection live here so they are testable
//! without a UI.

pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
