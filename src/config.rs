use crate::error::{Result, ShamirError};
use crate::polynomial::DEFAULT_MAX_LEADING_DRAWS;

/// Processing mode for split and combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// Everything runs on the calling thread
    #[default]
    Sequential,
    /// Share evaluation and byte reconstruction fan out over the rayon pool
    Parallel,
}

/// Configuration options for splitting and reconstruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Processing mode
    pub mode: SplitMode,
    /// Cap on redraws of a zero leading polynomial coefficient
    pub max_leading_draws: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: SplitMode::default(),
            max_leading_draws: DEFAULT_MAX_LEADING_DRAWS,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the processing mode
    pub fn with_mode(mut self, mode: SplitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the leading coefficient redraw cap
    pub fn with_max_leading_draws(mut self, draws: usize) -> Result<Self> {
        if draws == 0 {
            return Err(ShamirError::InvalidConfig(
                "Leading coefficient draws cannot be zero".into(),
            ));
        }
        self.max_leading_draws = draws;
        Ok(self)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_leading_draws == 0 {
            return Err(ShamirError::InvalidConfig(
                "Leading coefficient draws cannot be zero".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.mode, SplitMode::Sequential);
        assert_eq!(config.max_leading_draws, DEFAULT_MAX_LEADING_DRAWS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_max_leading_draws(16)
            .unwrap()
            .with_mode(SplitMode::Parallel);

        assert_eq!(config.max_leading_draws, 16);
        assert_eq!(config.mode, SplitMode::Parallel);
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::new().with_max_leading_draws(0).is_err());

        let config = Config {
            max_leading_draws: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ShamirError::InvalidConfig(_))
        ));
    }
}
