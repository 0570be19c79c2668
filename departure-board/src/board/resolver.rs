//! Departure resolution with synthetic fallback.
//!
//! The resolver always produces a board. Live data is used only when every
//! step succeeds; any failure along the way swaps in the synthetic board
//! wholesale, so callers never see a mix of the two.

use std::future::Future;

use chrono::{Local, NaiveDateTime};
use serde_json::Value;
use tracing::{info, warn};

use crate::domain::{BoardQuery, DepartureRecord};
use crate::ldb::{LdbError, normalize_board};

use super::synthetic::synthetic_departures;

/// Something that can fetch a raw departure board.
///
/// Implemented by [`crate::ldb::LdbClient`]; tests substitute their own.
pub trait BoardSource {
    /// Fetch the raw board payload for `query`.
    fn fetch_board(
        &self,
        api_key: &str,
        query: &BoardQuery,
    ) -> impl Future<Output = Result<Value, LdbError>> + Send;
}

/// A resolved board and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub departures: Vec<DepartureRecord>,
    /// True when `departures` is the synthetic board
    pub is_synthetic: bool,
}

impl Resolution {
    fn live(departures: Vec<DepartureRecord>) -> Self {
        Self {
            departures,
            is_synthetic: false,
        }
    }

    fn synthetic(now: NaiveDateTime) -> Self {
        Self {
            departures: synthetic_departures(now),
            is_synthetic: true,
        }
    }
}

/// Resolves departure boards from a [`BoardSource`], falling back to
/// synthetic data.
///
/// Holds no per-request state, so one resolver can serve concurrent
/// requests.
#[derive(Debug, Clone)]
pub struct DepartureResolver<S> {
    source: S,
}

impl<S: BoardSource> DepartureResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Resolve a board as of the local wall-clock time.
    pub async fn resolve(&self, api_key: Option<&str>, query: &BoardQuery) -> Resolution {
        self.resolve_at(api_key, query, Local::now().naive_local())
            .await
    }

    /// Resolve a board, using `now` to time any synthetic departures.
    pub async fn resolve_at(
        &self,
        api_key: Option<&str>,
        query: &BoardQuery,
        now: NaiveDateTime,
    ) -> Resolution {
        let Some(api_key) = api_key.map(str::trim).filter(|k| !k.is_empty()) else {
            info!(station = %query.station, "no API key configured, serving synthetic departures");
            return Resolution::synthetic(now);
        };

        match self.fetch_and_normalize(api_key, query).await {
            Ok(departures) => Resolution::live(departures),
            Err(e) => {
                warn!(
                    station = %query.station,
                    status = ?e.status(),
                    error = %e,
                    "live departures unavailable, serving synthetic departures"
                );
                Resolution::synthetic(now)
            }
        }
    }

    async fn fetch_and_normalize(
        &self,
        api_key: &str,
        query: &BoardQuery,
    ) -> Result<Vec<DepartureRecord>, LdbError> {
        let payload = self.source.fetch_board(api_key, query).await?;
        normalize_board(&payload)
    }
}
