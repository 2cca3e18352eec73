use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

use crate::{config::Location, error::FetchError};

pub mod open_meteo;

pub use open_meteo::{OpenMeteoConfig, OpenMeteoProvider};

/// Anything that can hand back a raw forecast document for a location.
///
/// Only transport problems are a [`FetchError`]; the caller checks the document shape.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch(&self, location: Location) -> Result<Value, FetchError>;
}
