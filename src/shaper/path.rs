//! Path template resolution.
//!
//! Endpoint paths embed the scoping identifier as a dedicated segment, e.g.
//! `/v1/organizationId/code-rule`. Resolution is segment-wise: the token must
//! occupy a whole path segment, so user data containing the token as a
//! substring is never rewritten.

/// Substitute or remove the placeholder segment in `template`.
///
/// With an id, every segment equal to `token` becomes the id's string form.
/// Without one, those segments are dropped together with their separator,
/// leaving a shorter, still-valid path. Neither branch leaves the token
/// behind.
pub(crate) fn resolve(template: &str, token: &str, scoping_id: Option<&str>) -> String {
    match scoping_id {
        Some(id) => template
            .split('/')
            .map(|segment| if segment == token { id } else { segment })
            .collect::<Vec<_>>()
            .join("/"),
        None => template
            .split('/')
            .filter(|segment| *segment != token)
            .collect::<Vec<_>>()
            .join("/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "organizationId";

    #[test]
    fn substitutes_the_placeholder_segment() {
        let url = resolve("/v1/organizationId/code-rule", TOKEN, Some("5"));
        assert_eq!(url, "/v1/5/code-rule");
    }

    #[test]
    fn substitutes_every_occurrence() {
        let url = resolve(
            "/v1/organizationId/code-rule/organizationId/copy",
            TOKEN,
            Some("42"),
        );
        assert_eq!(url, "/v1/42/code-rule/42/copy");
        assert!(!url.contains(TOKEN));
    }

    #[test]
    fn removes_the_segment_when_unscoped() {
        let url = resolve("/v1/organizationId/code-rule", TOKEN, None);
        assert_eq!(url, "/v1/code-rule");
        assert!(!url.contains("//"));
    }

    #[test]
    fn leaves_templates_without_the_token_alone() {
        assert_eq!(resolve("/v1/lovs/value", TOKEN, Some("5")), "/v1/lovs/value");
        assert_eq!(resolve("/v1/lovs/value", TOKEN, None), "/v1/lovs/value");
    }

    #[test]
    fn does_not_rewrite_substring_collisions() {
        // A trailing segment that merely contains the token is user data.
        let url = resolve(
            "/v1/organizationId/rules/organizationIdHistory",
            TOKEN,
            Some("7"),
        );
        assert_eq!(url, "/v1/7/rules/organizationIdHistory");
    }
}
