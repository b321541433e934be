use crate::constants::STATUS_FALLBACK;
use serde::Deserialize;

/// Body of `GET /weather`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WeatherReport {
    pub datetime: String,
    pub weather: String,
}

impl WeatherReport {
    /// Two display lines. Fields are trusted and inserted verbatim.
    pub fn to_html(&self) -> String {
        format!("{}<br>{}", self.datetime, self.weather)
    }
}

#[inline]
pub fn parse_report(body: &str) -> Result<WeatherReport, serde_json::Error> {
    serde_json::from_str(body)
}

/// Text for the status element: the report, or the fallback for any failure.
pub fn status_text<E>(outcome: &Result<WeatherReport, E>) -> String {
    match outcome {
        Ok(report) => report.to_html(),
        Err(_) => STATUS_FALLBACK.to_string(),
    }
}
