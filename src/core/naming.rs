//! core::naming
//!
//! Branch token normalization.
//!
//! Users name branches the short way (`main`, `feature/foo`) or the
//! fully-qualified way (`refs/heads/main`). Everything below the CLI works
//! with fully-qualified names, so tokens pass through [`branch_ref`] first.
//! Normalization is purely textual and never consults the repository.

use super::types::RefName;

/// Normalize a branch token into a fully-qualified branch ref name.
///
/// Tokens that already carry the `refs/heads/` prefix are returned
/// unchanged; anything else gets the prefix prepended.
///
/// # Example
///
/// ```
/// use git_summarize_branch::core::naming::branch_ref;
///
/// assert_eq!(branch_ref("main").as_str(), "refs/heads/main");
/// assert_eq!(branch_ref("refs/heads/main").as_str(), "refs/heads/main");
/// assert_eq!(branch_ref("feature/foo").as_str(), "refs/heads/feature/foo");
/// ```
pub fn branch_ref(token: &str) -> RefName {
    if token.starts_with(RefName::BRANCH_PREFIX) {
        RefName::from_normalized(token.to_string())
    } else {
        RefName::from_normalized(format!("{}{}", RefName::BRANCH_PREFIX, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_token_gets_prefix() {
        assert_eq!(branch_ref("develop").as_str(), "refs/heads/develop");
    }

    #[test]
    fn qualified_token_unchanged() {
        assert_eq!(branch_ref("refs/heads/develop").as_str(), "refs/heads/develop");
    }

    #[test]
    fn short_and_qualified_are_equal() {
        assert_eq!(branch_ref("feature/x"), branch_ref("refs/heads/feature/x"));
    }

    #[test]
    fn idempotent() {
        let once = branch_ref("topic");
        let twice = branch_ref(once.as_str());
        assert_eq!(once, twice);
    }

    #[test]
    fn other_namespaces_are_treated_as_branch_names() {
        // Only the branch namespace is recognized; a tag path becomes a branch path.
        assert_eq!(
            branch_ref("refs/tags/v1").as_str(),
            "refs/heads/refs/tags/v1"
        );
    }

    #[test]
    fn partial_prefix_is_not_recognized() {
        assert_eq!(branch_ref("heads/main").as_str(), "refs/heads/heads/main");
    }
}
