use crate::render::pipeline::Stage;

/// Convenience result type used across the crate.
pub type CardResult<T> = Result<T, CardError>;

/// Top-level error taxonomy used by the card-composition APIs.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// The background image could not be found or parsed at warm-up.
    ///
    /// Fatal for the process: no cards can be generated until the asset is
    /// fixed.
    #[error("asset missing: {0}")]
    AssetMissing(String),

    /// The font file could not be found or parsed at warm-up. Treated the
    /// same as [`CardError::AssetMissing`].
    #[error("font load error: {0}")]
    FontLoad(String),

    /// A specific avatar's bytes are not a decodable image. Aborts only the
    /// request that carried them.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid configuration or request data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Umbrella returned for any mid-pipeline failure, wrapping the causing
    /// error kind and the stage that raised it.
    #[error("card generation failed during {stage}: {source}")]
    Generation {
        /// Pipeline stage the failure occurred in.
        stage: Stage,
        /// The causing error.
        #[source]
        source: Box<CardError>,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::AssetMissing`] value.
    pub fn asset_missing(msg: impl Into<String>) -> Self {
        Self::AssetMissing(msg.into())
    }

    /// Build a [`CardError::FontLoad`] value.
    pub fn font_load(msg: impl Into<String>) -> Self {
        Self::FontLoad(msg.into())
    }

    /// Build a [`CardError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`CardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Wrap `source` in the [`CardError::Generation`] umbrella. An error that
    /// is already an umbrella is passed through unchanged so the innermost
    /// stage is the one reported.
    pub fn generation(stage: Stage, source: CardError) -> Self {
        match source {
            err @ Self::Generation { .. } => err,
            err => Self::Generation {
                stage,
                source: Box::new(err),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
