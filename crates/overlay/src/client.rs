//! Blocking HTTP retrieval of boundary datasets.

use jiff::civil::Date;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::data::OverlayData;
use crate::error::OverlayError;

const BASE_URL: &str = "https://droughtmonitor.unl.edu/data/json";

/// URL of the boundary dataset for a release date.
pub fn dataset_url(date: Date) -> String {
    format!(
        "{BASE_URL}/usdm_{:04}{:02}{:02}.json",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Fetches boundary datasets from the upstream publisher.
#[derive(Debug, Default)]
pub struct HttpOverlayClient {
    client: Client,
}

impl HttpOverlayClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Retrieves the raw GeoJSON payload for `date`.
    ///
    /// # Errors
    ///
    /// [`OverlayError::NotFound`] for a 404 response, [`OverlayError::Http`]
    /// for transport or other status failures.
    pub fn fetch_raw(&self, date: Date) -> Result<String, OverlayError> {
        let url = dataset_url(date);
        debug!(%url, "requesting boundary dataset");
        let response = self.client.get(&url).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(OverlayError::NotFound { date });
        }
        let body = response.error_for_status()?.text()?;
        Ok(body)
    }

    /// Retrieves and decodes the boundary dataset for `date`.
    pub fn fetch(&self, date: Date) -> Result<OverlayData, OverlayError> {
        let body = self.fetch_raw(date)?;
        let data = OverlayData::from_json(&body)?;
        info!(%date, features = data.len(), "boundary dataset loaded");
        Ok(data)
    }
}
