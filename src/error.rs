// file: src/error.rs
// version: 1.2.0
// guid: 3f8c21da-6b44-4c19-9e02-a75d10c4b8e1

use thiserror::Error;

/// Result type alias for the command layer
pub type Result<T> = std::result::Result<T, CommandError>;

/// Error taxonomy for the POSIX command bindings.
///
/// Every failure a command can report falls into one of these classes.
/// Argument problems are always detected before any OS call is made, so a
/// failed invocation never leaves a partial side effect behind.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Wrong count, type, or shape of arguments
    #[error("{0}")]
    Argument(String),

    /// A syscall or libc call failed; message and code come from errno
    #[error("{op}: {source}")]
    Os {
        op: String,
        #[source]
        source: std::io::Error,
    },

    /// Home-directory or variable substitution on a path failed
    #[error("path expansion failed: {0}")]
    PathExpansion(String),

    /// A referenced stream handle is unknown or open in the wrong direction
    #[error("{0}")]
    Channel(String),

    /// Name-service lookup failed
    #[error(transparent)]
    Resolver(#[from] ResolverError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CommandError {
    /// Create an argument error
    pub fn argument(msg: impl Into<String>) -> Self {
        Self::Argument(msg.into())
    }

    /// Wrong-argument-count error in the interpreter's conventional shape
    pub fn wrong_args(command: &str, synopsis: &str) -> Self {
        Self::Argument(format!("wrong # args: {command} {synopsis}"))
    }

    /// Wrap an OS-level failure, naming the operation that hit it
    pub fn os(op: impl Into<String>, source: std::io::Error) -> Self {
        Self::Os {
            op: op.into(),
            source,
        }
    }

    /// OS failure for the errno currently in effect
    pub fn last_os(op: impl Into<String>) -> Self {
        Self::os(op, std::io::Error::last_os_error())
    }

    /// Create a channel error
    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }

    /// The raw errno value, when this error carries one
    pub fn os_code(&self) -> Option<i32> {
        match self {
            Self::Os { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }
}

/// The closed set of name-service failure kinds, mirroring `h_errno`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverErrorKind {
    HostNotFound,
    TryAgain,
    NoRecovery,
    NoData,
}

impl ResolverErrorKind {
    /// Stable machine-readable tag for this failure kind
    pub fn tag(&self) -> &'static str {
        match self {
            Self::HostNotFound => "HOST_NOT_FOUND",
            Self::TryAgain => "TRY_AGAIN",
            Self::NoRecovery => "NO_RECOVERY",
            Self::NoData => "NO_DATA",
        }
    }

    /// Human-readable description of this failure kind
    pub fn description(&self) -> &'static str {
        match self {
            Self::HostNotFound => "host not found",
            Self::TryAgain => "try again",
            Self::NoRecovery => "unrecordable server error",
            Self::NoData => "no data",
        }
    }
}

/// A failed host lookup, tagged with the resolver's failure kind
#[derive(Error, Debug)]
#[error("host lookup failure: {host} ({})", .kind.description())]
pub struct ResolverError {
    pub host: String,
    pub kind: ResolverErrorKind,
}

impl ResolverError {
    pub fn new(host: impl Into<String>, kind: ResolverErrorKind) -> Self {
        Self {
            host: host.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_args_shape() {
        let err = CommandError::wrong_args("alarm", "seconds");
        assert_eq!(err.to_string(), "wrong # args: alarm seconds");
    }

    #[test]
    fn test_os_error_carries_code() {
        let err = CommandError::os("link", std::io::Error::from_raw_os_error(libc::EEXIST));
        assert_eq!(err.os_code(), Some(libc::EEXIST));
        assert!(err.to_string().starts_with("link: "));
    }

    #[test]
    fn test_resolver_tags() {
        assert_eq!(ResolverErrorKind::HostNotFound.tag(), "HOST_NOT_FOUND");
        assert_eq!(ResolverErrorKind::TryAgain.tag(), "TRY_AGAIN");
        assert_eq!(ResolverErrorKind::NoRecovery.tag(), "NO_RECOVERY");
        assert_eq!(ResolverErrorKind::NoData.tag(), "NO_DATA");
    }

    #[test]
    fn test_resolver_error_message() {
        let err = ResolverError::new("bogus.invalid", ResolverErrorKind::HostNotFound);
        assert_eq!(
            err.to_string(),
            "host lookup failure: bogus.invalid (host not found)"
        );
    }
}
