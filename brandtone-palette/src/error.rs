use thiserror::Error;

pub use brandtone_color::InvalidColorError;

/// Error returned when a role or mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNameError {
    /// Not one of the palette role names.
    #[error("unknown color role: {0}")]
    UnknownRole(String),
    /// Neither `light` nor `dark`.
    #[error("unknown palette mode: {0}")]
    UnknownMode(String),
}
