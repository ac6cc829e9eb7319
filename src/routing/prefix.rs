/// The fixed base path the console is served under.
///
/// Normalized to either the empty string or a `/`-leading, non-`/`-trailing
/// segment sequence, so that [`RoutePrefix::apply`] always yields a single
/// slash at the join point.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoutePrefix {
    prefix: String,
}

impl RoutePrefix {
    pub fn new(prefix: &str) -> Self {
        let trimmed = prefix.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }

        let prefix = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };

        Self { prefix }
    }

    /// Roots `path` under the prefix. Pure, no side effects.
    pub fn apply(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if self.prefix.is_empty() {
            format!("/{path}")
        } else {
            format!("{}/{path}", self.prefix)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_prefix_roots_paths() {
        let prefix = RoutePrefix::new("");
        assert_eq!(prefix.apply("/foo"), "/foo");
        assert_eq!(prefix.apply("foo"), "/foo");
    }

    #[test]
    fn prefix_is_normalized() {
        assert_eq!(RoutePrefix::new("console"), RoutePrefix::new("/console/"));
        assert_eq!(RoutePrefix::new("  "), RoutePrefix::default());
    }

    #[test]
    fn apply_joins_with_a_single_slash() {
        let prefix = RoutePrefix::new("/console");
        assert_eq!(prefix.apply("/foo"), "/console/foo");
        assert_eq!(prefix.apply("foo/bar"), "/console/foo/bar");
    }
}
