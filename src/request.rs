//! What to ask the observation API for, and where the answer ends up.
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_BASE_URL: &str = "https://opendata-download-metobs.smhi.se";
pub const DEFAULT_VERSION: &str = "1.0";
pub const DEFAULT_EXTENSION: &str = "csv";

/// Retrieval window offered by the API.
///
/// Parsing never fails. Values outside the four documented periods are kept
/// as they are and left for the server to reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Period {
    LatestHour,
    LatestDay,
    LatestMonths,
    CorrectedArchive,
    Other(String),
}

impl Period {
    pub fn is_known(&self) -> bool {
        !matches!(self, Period::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Period::LatestHour => "latest-hour",
            Period::LatestDay => "latest-day",
            Period::LatestMonths => "latest-months",
            Period::CorrectedArchive => "corrected-archive",
            Period::Other(s) => s,
        }
    }
}

impl FromStr for Period {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "latest-hour" => Period::LatestHour,
            "latest-day" => Period::LatestDay,
            "latest-months" => Period::LatestMonths,
            "corrected-archive" => Period::CorrectedArchive,
            other => Period::Other(other.to_owned()),
        })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single data request. Values are substituted into the URL verbatim.
///
/// Built once through `new` and the `with_*` methods, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    parameter: String,
    station: String,
    period: Period,
    version: String,
    extension: String,
}

impl Request {
    pub fn new(parameter: impl Into<String>, station: impl Into<String>, period: Period) -> Self {
        Request {
            parameter: parameter.into(),
            station: station.into(),
            period,
            version: DEFAULT_VERSION.to_owned(),
            extension: DEFAULT_EXTENSION.to_owned(),
        }
    }

    pub fn with_version(self, version: impl Into<String>) -> Self {
        Request {
            version: version.into(),
            ..self
        }
    }

    pub fn with_extension(self, extension: impl Into<String>) -> Self {
        Request {
            extension: extension.into(),
            ..self
        }
    }

    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    pub fn station(&self) -> &str {
        &self.station
    }

    pub fn period(&self) -> &Period {
        &self.period
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/api/version/{}/parameter/{}/station/{}/period/{}/data.{}",
            base_url.trim_end_matches('/'),
            self.version,
            self.parameter,
            self.station,
            self.period,
            self.extension
        )
    }

    /// `smhi_metobs_<parameter>_<station>_<period>.<extension>`
    pub fn file_name(&self) -> String {
        format!(
            "smhi_metobs_{}_{}_{}.{}",
            self.parameter, self.station, self.period, self.extension
        )
    }
}
