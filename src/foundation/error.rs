pub type VanishResult<T> = Result<T, VanishError>;

#[derive(thiserror::Error, Debug)]
pub enum VanishError {
    #[error("config error: {0}")]
    Config(String),

    #[error("raster error: {0}")]
    Raster(String),

    #[error("font error: {0}")]
    Font(String),

    #[error("generation failed: {0}")]
    Generation(anyhow::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VanishError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    pub fn generation(err: impl Into<anyhow::Error>) -> Self {
        Self::Generation(err.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
