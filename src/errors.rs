//! Typed errors for the parsing boundary.
//!
//! Invariant violations (an unknown action tag reaching a transition or the heuristic) are not
//! modeled here — they are programmer errors and abort via `panic!`/`unreachable!`, matching the
//! source's own `throw std::runtime_error("Undefined action value!")`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("could not open problem file {path}: {source}")]
    InputOpenFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed input in {path}: {reason}")]
    InputMalformed { path: PathBuf, reason: String },
}
