use thiserror::Error;

/// Errors returned while solving or launching an arc.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LaunchError {
    /// The arc peak sits below the lower endpoint, so no real launch speed exists.
    #[error("arc factor too small: peak height {peak} is below launch height {low}")]
    InvalidArc { peak: f64, low: f64 },

    /// Flight time came out zero or non-finite.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// A coordinate or parameter was not usable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The host refused or failed to spawn the projectile.
    #[error("host error: {0}")]
    Host(String),
}

impl From<crate::config::ConfigError> for LaunchError {
    fn from(err: crate::config::ConfigError) -> Self {
        LaunchError::InvalidInput(err.to_string())
    }
}
