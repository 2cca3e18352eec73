use tracing::{error, warn};

use crate::{
    config::Config,
    error::{WeatherError, error_chain},
    model::Forecast,
    present,
    provider::ForecastSource,
    status::StatusRecord,
};

/// What the module prints, and how it exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub record: StatusRecord,
    pub exit_code: u8,
}

/// Fetch, interpret and format. Never fails: errors become an error record.
pub async fn generate(config: &Config, source: &dyn ForecastSource) -> Report {
    match try_generate(config, source).await {
        Ok(record) => Report { record, exit_code: 0 },
        Err(err) => {
            match &err {
                WeatherError::Fetch(cause) => {
                    warn!(error = %error_chain(cause), "failed to get weather data");
                }
                WeatherError::Processing(cause) => {
                    error!(error = %error_chain(cause), detail = ?cause, "failed to process weather data");
                }
            }
            Report { record: err.status_record(), exit_code: err.exit_code() }
        }
    }
}

pub async fn try_generate(
    config: &Config,
    source: &dyn ForecastSource,
) -> Result<StatusRecord, WeatherError> {
    let payload = source.fetch(config.location).await?;
    let forecast = Forecast::from_payload(payload, usize::from(config.forecast_days))?;
    Ok(present::status_record(config, &forecast))
}
