//! Departure board resolution.
//!
//! [`DepartureResolver`] is the single entry point the web layer uses. It
//! asks a [`BoardSource`] for live data and falls back to the synthetic
//! board from [`synthetic_departures`] whenever that fails.

mod resolver;
mod synthetic;

pub use resolver::{BoardSource, DepartureResolver, Resolution};
pub use synthetic::synthetic_departures;
