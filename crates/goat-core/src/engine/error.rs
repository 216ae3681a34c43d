use crate::core::io::gaussian::ExtractError;
use thiserror::Error;

use super::config::ConfigError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Coordinate extraction failed: {source}")]
    Extraction {
        #[from]
        source: ExtractError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Unknown element '{symbol}' on atom {index}")]
    UnknownElement { symbol: String, index: usize },

    #[error("Total mass of the model was computed as zero; the geometry cannot be trusted")]
    ZeroMass,

    #[error("Internal logic error: {0}")]
    Internal(String),
}
