use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
    #[error("invalid HOST {value:?}: {source}")]
    InvalidHost {
        value: String,
        source: std::net::AddrParseError,
    },
}
