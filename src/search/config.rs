//! Search configuration.

/// Configuration for the exhaustive loadout search.
///
/// # Defaults
///
/// ```
/// use loadopt::search::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.workers, 8);
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of parallel search workers.
    ///
    /// The first lane's index range is sliced into this many windows.
    /// More workers than items in the first lane is allowed; the excess
    /// workers simply do no work.
    pub workers: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { workers: 8 }
    }
}

impl SearchConfig {
    /// Sets the worker count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.workers == 0 {
            return Err("workers must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = SearchConfig::default();
        assert_eq!(config.workers, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SearchConfig::default().with_workers(3);
        assert_eq!(config.workers, 3);
    }

    #[test]
    fn test_zero_workers_invalid() {
        assert!(SearchConfig::default().with_workers(0).validate().is_err());
    }
}
