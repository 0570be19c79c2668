//! Train departure board server.
//!
//! Serves a departure board for a configured UK station from the Live
//! Departure Boards feed, falling back to a synthetic board whenever live
//! data is unavailable.

pub mod board;
pub mod config;
pub mod domain;
pub mod ldb;
pub mod stations;
pub mod web;
