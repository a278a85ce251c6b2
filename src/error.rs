use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to access state file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed state file {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown rank {0:?} (expected 2-10, J, Q, K or A)")]
    InvalidRank(String),

    #[error("Unknown suit {0:?} (expected spades, hearts, diamonds or clubs)")]
    InvalidSuit(String),

    #[error("Malformed card {0:?} (expected e.g. `A:spades` or `10h`)")]
    InvalidCard(String),

    #[error("Malformed call {0:?} (expected e.g. `K:hearts:2`)")]
    InvalidCall(String),

    #[error("A call must target at least one card")]
    ZeroCallNumber,

    #[error("A call cannot target {0} copies of a card")]
    CallNumberTooLarge(u32),

    #[error("Unknown auto switch interval {0:?} (expected seconds or `off`)")]
    InvalidInterval(String),

    #[error("Render setup failed: {0}")]
    Render(String),
}
