//! Errors of the joypad wrapper.
use thiserror::Error;

/// Errors of the joypad wrapper.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NesEnvError {
    /// A button name outside the joypad vocabulary.
    #[error("Unknown button: {0:?}")]
    UnknownButton(String),

    /// A discrete action index not in `0..n`.
    #[error("Action index {index} is out of range for {n} actions")]
    ActionIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of actions.
        n: usize,
    },
}
