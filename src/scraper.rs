use crate::parser::{ParseError, parse_playlist_entry};
use crate::types::{ClockOffset, PlaylistEntry};
use crate::urls::playlist_daily_url;

use chrono::NaiveDate;
use reqwest::Client;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
}

#[derive(Debug, Clone)]
pub struct WebScraper {
    client: Client,
    station: String,
    offset: ClockOffset,
}

impl WebScraper {
    pub fn new(station: impl Into<String>, offset: ClockOffset) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            client,
            station: station.into(),
            offset,
        })
    }

    /// Fetches the daily playlist page for `date` and extracts the piece
    /// currently on air. A non-success HTTP status fails before any
    /// parsing is attempted.
    pub async fn fetch_now_playing(&self, date: NaiveDate) -> Result<PlaylistEntry, ScraperError> {
        let url = playlist_daily_url(date, &self.station);
        log::debug!("GET {}", url);

        let html = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let entry = parse_playlist_entry(&html, self.offset)?;
        Ok(entry)
    }
}
