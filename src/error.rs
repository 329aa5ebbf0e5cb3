//! Error types for the solver core.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("action {action} is not legal for board {board:#08x} and piece {piece}")]
    IllegalAction { board: u32, piece: u8, action: u8 },
    #[error("cache file at {path:?} is corrupt or unreadable: {reason}")]
    CacheCorrupt { path: std::path::PathBuf, reason: String },
    #[error("failed to allocate the dynamic programming table ({bytes} bytes requested)")]
    OutOfMemory { bytes: usize },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
