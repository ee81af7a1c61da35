//! Gate exclusion filter.
//!
//! Paths matching any configured prefix are served by their own handlers
//! (API routes, build assets, image optimization, favicon) and never reach
//! the access gate.

use crate::routing::matcher::{AnyMatcher, Matcher, PathPrefixMatcher};

/// Compiled set of excluded path prefixes.
#[derive(Debug, Default)]
pub struct ExclusionFilter {
    matcher: AnyMatcher,
}

impl ExclusionFilter {
    /// Compile the filter from configured prefixes.
    pub fn from_prefixes<S: AsRef<str>>(prefixes: &[S]) -> Self {
        let matchers = prefixes
            .iter()
            .map(|p| Box::new(PathPrefixMatcher::new(p.as_ref())) as Box<dyn Matcher>)
            .collect();

        Self {
            matcher: AnyMatcher::new(matchers),
        }
    }

    /// Returns true if the gate must not see this path.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.matcher.matches(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GateConfig;

    fn default_filter() -> ExclusionFilter {
        ExclusionFilter::from_prefixes(&GateConfig::default().excluded_prefixes)
    }

    #[test]
    fn test_default_prefixes_excluded() {
        let filter = default_filter();

        assert!(filter.is_excluded("/api/images/ai-brain"));
        assert!(filter.is_excluded("/_next/static/chunks/main.js"));
        assert!(filter.is_excluded("/_next/image"));
        assert!(filter.is_excluded("/favicon.ico"));
    }

    #[test]
    fn test_navigation_paths_not_excluded() {
        let filter = default_filter();

        assert!(!filter.is_excluded("/"));
        assert!(!filter.is_excluded("/dashboard"));
        assert!(!filter.is_excluded("/auth/login"));
        assert!(!filter.is_excluded("/_next"));
    }

    #[test]
    fn test_raw_prefix_semantics() {
        let filter = default_filter();
        // Prefix, not path segment.
        assert!(filter.is_excluded("/api-docs"));
    }
}
