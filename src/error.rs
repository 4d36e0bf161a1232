//! Error types for loadout optimization.

use thiserror::Error;

/// Error type covering catalog ingestion, search setup, and the search
/// itself.
///
/// A search is a pure function of its inputs: none of these variants are
/// retryable, and a failure inside any worker aborts the whole run.
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// A catalog line could not be parsed.
    #[error("catalog parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the catalog source.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// Invalid search configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A slot ended up with no eligible items, so the search space is empty.
    #[error("slot '{0}' has no items; the search space is empty")]
    EmptySlot(String),

    /// A requested key stat does not occur on any item in the search.
    #[error("unknown key stat '{0}'")]
    UnknownKeyStat(String),

    /// No key stats were selected, so there is no objective to maximize.
    #[error("no key stats selected")]
    NoKeyStats,

    /// Stat accumulation overflowed the 64-bit total.
    #[error("stat total overflowed the 64-bit accumulator")]
    StatOverflow,

    /// I/O failure while reading a catalog or writing a report.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OptimizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = OptimizeError::Parse {
            line: 7,
            message: "invalid stat amount 'ten'".into(),
        };
        assert_eq!(
            err.to_string(),
            "catalog parse error at line 7: invalid stat amount 'ten'"
        );
    }

    #[test]
    fn test_empty_slot_display() {
        let err = OptimizeError::EmptySlot("Weapon".into());
        assert!(err.to_string().contains("Weapon"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: OptimizeError = io.into();
        assert!(matches!(err, OptimizeError::Io(_)));
    }
}
