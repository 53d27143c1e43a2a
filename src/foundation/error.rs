/// Result alias used across the crate.
pub type PlotResult<T> = Result<T, PlotError>;

/// Errors raised at the edges of the render core.
///
/// Rendering itself never fails: bad data degrades to placeholder output. These variants cover
/// config validation, CSV ingestion, surface construction and export.
#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    /// A config value or constructor argument is out of its allowed domain.
    #[error("validation error: {0}")]
    Validation(String),

    /// CSV input could not be read.
    #[error("csv error: {0}")]
    Csv(String),

    /// A render surface could not be created or read back.
    #[error("render error: {0}")]
    Render(String),

    /// Encoding a rendered frame failed.
    #[error("export error: {0}")]
    Export(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlotError {
    /// Build a [`PlotError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PlotError::Csv`].
    pub fn csv(msg: impl Into<String>) -> Self {
        Self::Csv(msg.into())
    }

    /// Build a [`PlotError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PlotError::Export`].
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
