//! Live Departure Boards client.
//!
//! This module provides an HTTP client for a JSON rendering of National
//! Rail's Live Departure Boards, and the conversion of its responses into
//! departure records.
//!
//! Key characteristics of the feed:
//! - Times are "HH:MM" strings (UK local time) with no date
//! - The estimated departure (`etd`) holds either a time or a status word
//! - Repeated elements occurring once arrive as bare objects, not arrays

mod client;
mod convert;
mod error;
mod types;

pub use client::{LdbClient, LdbConfig};
pub use convert::{convert_service_item, normalize_board};
pub use error::LdbError;
pub use types::{
    DepartureBoardResponse, OneOrMany, ServiceDestination, ServiceItem, ServiceLocation,
    StationBoard, TrainServices,
};
