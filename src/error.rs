use std::fmt;

#[derive(Debug)]
pub enum MixDeckError {
    Config(ConfigError),
    Request(RequestError),
    Encode(serde_json::Error),
}

#[derive(Debug)]
pub enum ConfigError {
    ZeroSampleRate,
    SampleRateTooHigh(u32),
    InvalidDuration(f64),
    Malformed(serde_json::Error),
}

#[derive(Debug)]
pub enum RequestError {
    Malformed(serde_json::Error),
}

impl fmt::Display for MixDeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MixDeckError::Config(e) => write!(f, "Config error: {e}"),
            MixDeckError::Request(e) => write!(f, "Request error: {e}"),
            MixDeckError::Encode(e) => write!(f, "Failed to encode response: {e}"),
        }
    }
}

impl std::error::Error for MixDeckError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroSampleRate => write!(f, "Sample rate must be positive"),
            ConfigError::SampleRateTooHigh(sr) => write!(
                f,
                "Sample rate must be at most {} Hz, got {sr}",
                crate::config::MAX_SAMPLE_RATE_HZ
            ),
            ConfigError::InvalidDuration(d) => {
                write!(
                    f,
                    "Duration must be positive and at most {} seconds, got {d}",
                    crate::config::MAX_DURATION_SECONDS
                )
            }
            ConfigError::Malformed(e) => write!(f, "Malformed config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Malformed(e) => write!(f, "Malformed synthesis request: {e}"),
        }
    }
}

impl std::error::Error for RequestError {}

impl From<ConfigError> for MixDeckError {
    fn from(e: ConfigError) -> Self {
        MixDeckError::Config(e)
    }
}

impl From<RequestError> for MixDeckError {
    fn from(e: RequestError) -> Self {
        MixDeckError::Request(e)
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        RequestError::Malformed(e)
    }
}
