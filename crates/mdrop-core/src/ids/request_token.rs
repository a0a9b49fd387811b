use std::fmt::{Display, Formatter};

/// Generation number of a preview request.
///
/// Tokens are handed out in strictly increasing order by a single
/// coordinator, so comparing two tokens tells which request is newer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    pub const fn initial() -> Self {
        Self(0)
    }

    /// Token of the request that supersedes this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for RequestToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_is_strictly_newer() {
        let first = RequestToken::initial();
        let second = first.next();
        assert!(second > first);
        assert_eq!(second.get(), 1);
    }
}
