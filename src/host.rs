//! Remote host strings

use std::fmt;

/// A remote login target in `user@host` form
///
/// A bare host defaults the user to `root`, which is how these endpoints
/// are administered in practice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostSpec {
    pub user: String,
    pub host: String,
}

impl HostSpec {
    /// Parses `user@host` or a bare `host`
    ///
    /// Splits at the first `@` only, so user names containing `@` are not
    /// supported but host strings carrying one still come through whole.
    pub fn parse(value: &str) -> Self {
        match value.split_once('@') {
            Some((user, host)) => HostSpec {
                user: user.to_string(),
                host: host.to_string(),
            },
            None => HostSpec {
                user: "root".to_string(),
                host: value.to_string(),
            },
        }
    }
}

impl fmt::Display for HostSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.user, self.host)
    }
}
