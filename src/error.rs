use thiserror::Error;

/// Errors raised while collecting input, solving or rendering a plan.
///
/// A solve that ends without an optimal solution is not an error; it is
/// reported through [`crate::SolveStatus`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid value for {field}: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    #[error("solver {solver} failed: {reason}")]
    Solver { solver: &'static str, reason: String },

    #[error("failed to render chart: {0}")]
    Chart(#[from] image::ImageError),

    #[error("failed to read config file: {0}")]
    ReadConfig(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    ParseConfig(#[source] toml::de::Error),

    #[error("failed to read input: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
