//! Error taxonomy.

/// Convenience result alias used throughout the crate.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Errors produced while loading data, calibrating the map, rendering, or writing frames.
///
/// Every variant is fatal for a run; there is no degraded mode.
#[derive(thiserror::Error, Debug)]
pub enum HeatmapError {
    /// Invalid invocation or table structure (arguments, header row, file names).
    #[error("config error: {0}")]
    Config(String),

    /// A data row could not be turned into a record.
    #[error("data parse error: {0}")]
    DataParse(String),

    /// The base map image could not be read or decoded.
    #[error("image load error: {0}")]
    ImageLoad(String),

    /// A frame image could not be encoded or persisted.
    #[error("image write error: {0}")]
    ImageWrite(String),

    /// Rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// Any other failure, with its source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HeatmapError {
    /// Build a [`HeatmapError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`HeatmapError::DataParse`].
    pub fn data_parse(msg: impl Into<String>) -> Self {
        Self::DataParse(msg.into())
    }

    /// Build a [`HeatmapError::ImageLoad`].
    pub fn image_load(msg: impl Into<String>) -> Self {
        Self::ImageLoad(msg.into())
    }

    /// Build a [`HeatmapError::ImageWrite`].
    pub fn image_write(msg: impl Into<String>) -> Self {
        Self::ImageWrite(msg.into())
    }

    /// Build a [`HeatmapError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// `true` for errors the user fixes by changing the invocation or the table layout.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
