use thiserror::Error;

/// Errors produced while querying color sources or resolving colors.
///
/// `Unavailable` and `QueryFailed` are expected on older systems and make the
/// resolver move on to the next source. Only `Fatal` leaves the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The source does not exist on this platform or version.
    #[error("{0} is not available")]
    Unavailable(&'static str),
    /// The source exists but the call failed.
    #[error("querying {what} failed (code {code:#010x})")]
    QueryFailed { what: &'static str, code: u32 },
    /// Every fallback was exhausted.
    #[error("no color source produced a usable value")]
    Fatal,
}

impl ColorError {
    /// Whether the resolver should try the next source instead of failing.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ColorError::Fatal)
    }
}

pub type Result<T> = std::result::Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fatal_is_unrecoverable() {
        assert!(ColorError::Unavailable("WinRT").is_recoverable());
        assert!(ColorError::QueryFailed { what: "registry", code: 5 }.is_recoverable());
        assert!(!ColorError::Fatal.is_recoverable());
    }

    #[test]
    fn query_failure_shows_hex_code() {
        let err = ColorError::QueryFailed {
            what: "UISettings",
            code: 0x8000_4001,
        };
        assert_eq!(err.to_string(), "querying UISettings failed (code 0x80004001)");
    }
}
