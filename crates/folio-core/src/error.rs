// ── Core error types ──
//
// Catalogs are trusted static data, so the only failures are detected
// once, while the portfolio is being assembled at startup. Selection of
// unknown ids at runtime is a no-op, not an error.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("duplicate certificate id: {id}")]
    DuplicateCertificate { id: String },

    #[error("duplicate project id: {id}")]
    DuplicateProject { id: u32 },

    #[error("duplicate skill category: {id}")]
    DuplicateCategory { id: String },

    #[error("skill category #{index} has an empty id")]
    EmptyCategory { index: usize },

    #[error("skill '{name}' has level {level}, expected 0-{max}")]
    LevelOutOfRange { name: String, level: u32, max: u8 },

    #[error("{entity} #{index} has an empty {field}")]
    MissingField {
        entity: &'static str,
        index: usize,
        field: &'static str,
    },
}
