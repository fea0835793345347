//! lichess.org endpoint URL templates.
//!
//! Templates are fully qualified URLs. Path segments that depend on the call
//! are written as named placeholders (`{username}`) and filled in with
//! [`expand`].

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{ClientError, Result};

/// Base URL of the public lichess.org service.
pub const DEFAULT_BASE_URL: &str = "https://lichess.org";

/// Table of endpoint URL templates used by a client.
///
/// The table is plain data owned by each client, so tests and alternative
/// deployments can point individual endpoints (or all of them, through
/// [`Endpoints::with_base_url`]) somewhere else.
///
/// # Example
///
/// ```
/// use knightline_client::Endpoints;
///
/// let endpoints = Endpoints::with_base_url("http://127.0.0.1:8080/");
/// assert_eq!(endpoints.user_profile, "http://127.0.0.1:8080/api/user/{username}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Authenticated account profile.
    pub account_profile: String,
    /// Authenticated account email.
    pub account_email: String,
    /// Authenticated account preferences.
    pub account_preferences: String,
    /// Kid mode status (GET) and toggle (POST).
    pub account_kid_mode: String,
    /// Online status of several users.
    pub user_status: String,
    /// Top 10 players of every category.
    pub top_all_players: String,
    /// Top `{count}` players of category `{perf}`.
    pub top_players: String,
    /// Public profile of `{username}`.
    pub user_profile: String,
    /// Rating history of `{username}`.
    pub user_rating_history: String,
    /// Activity feed of `{username}`.
    pub user_activity: String,
    /// Bulk user lookup by id.
    pub users_by_id: String,
    /// Members of team `{team}` (NDJSON).
    pub team_members: String,
    /// Users streaming right now.
    pub live_streamers: String,
    /// Crosstable of `{user1}` against `{user2}`.
    pub crosstable: String,
    /// Users followed by `{username}` (NDJSON).
    pub relation_following: String,
    /// Users following `{username}` (NDJSON).
    pub relation_followers: String,
}

impl Endpoints {
    /// Builds the endpoint table rooted at the given base URL.
    ///
    /// A trailing slash on `base` is ignored.
    #[must_use]
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        let at = |path: &str| format!("{base}{path}");

        Self {
            account_profile: at("/api/account"),
            account_email: at("/api/account/email"),
            account_preferences: at("/api/account/preferences"),
            account_kid_mode: at("/api/account/kid"),
            user_status: at("/api/users/status"),
            top_all_players: at("/player"),
            top_players: at("/player/top/{count}/{perf}"),
            user_profile: at("/api/user/{username}"),
            user_rating_history: at("/api/user/{username}/rating-history"),
            user_activity: at("/api/user/{username}/activity"),
            users_by_id: at("/api/users"),
            team_members: at("/api/team/{team}/users"),
            live_streamers: at("/streamer/live"),
            crosstable: at("/api/crosstable/{user1}/{user2}"),
            relation_following: at("/api/user/{username}/following"),
            relation_followers: at("/api/user/{username}/followers"),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

/// Characters left as-is in a path segment: RFC 3986 unreserved.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Substitutes `{name}` placeholders in a URL template.
///
/// Every value is percent-encoded as one path segment, so `/`, `?` or `#`
/// in a username cannot reach another endpoint. Placeholders without a
/// matching parameter are left untouched, which makes the resulting URL fail
/// loudly at request construction or on the server.
///
/// # Errors
///
/// Returns [`ClientError::InvalidPathSegment`] for an empty value and for `.`
/// or `..`, which URL parsing would resolve as dot segments even when
/// encoded.
///
/// # Example
///
/// ```
/// use knightline_client::endpoint::expand;
///
/// let url = expand("https://lichess.org/api/crosstable/{user1}/{user2}", &[
///     ("user1", "neio"),
///     ("user2", "thibault"),
/// ])?;
/// assert_eq!(url, "https://lichess.org/api/crosstable/neio/thibault");
/// # Ok::<(), knightline_client::ClientError>(())
/// ```
pub fn expand(template: &str, params: &[(&str, &str)]) -> Result<String> {
    params
        .iter()
        .try_fold(template.to_string(), |url, (name, value)| {
            if matches!(*value, "" | "." | "..") {
                return Err(ClientError::InvalidPathSegment {
                    name: (*name).to_string(),
                    value: (*value).to_string(),
                });
            }
            let segment = utf8_percent_encode(value, PATH_SEGMENT).to_string();
            Ok(url.replace(&format!("{{{name}}}"), &segment))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.account_profile, "https://lichess.org/api/account");
        assert_eq!(endpoints.top_all_players, "https://lichess.org/player");
        assert_eq!(
            endpoints.relation_followers,
            "https://lichess.org/api/user/{username}/followers"
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let a = Endpoints::with_base_url("http://localhost:9000");
        let b = Endpoints::with_base_url("http://localhost:9000/");
        assert_eq!(a, b);
        assert_eq!(a.users_by_id, "http://localhost:9000/api/users");
    }

    #[test]
    fn test_expand_two_segments() {
        let endpoints = Endpoints::default();
        let url = expand(&endpoints.top_players, &[("count", "100"), ("perf", "bullet")]).unwrap();
        assert_eq!(url, "https://lichess.org/player/top/100/bullet");
    }

    #[test]
    fn test_expand_leaves_unknown_placeholders() {
        let url = expand("https://lichess.org/api/user/{username}", &[("team", "x")]).unwrap();
        assert_eq!(url, "https://lichess.org/api/user/{username}");
    }

    #[test]
    fn test_expand_without_placeholders() {
        let url = expand("https://lichess.org/streamer/live", &[]).unwrap();
        assert_eq!(url, "https://lichess.org/streamer/live");
    }

    #[test]
    fn test_expand_encodes_reserved_characters() {
        let template = "https://lichess.org/api/user/{username}/activity";

        let url = expand(template, &[("username", "../account")]).unwrap();
        assert_eq!(url, "https://lichess.org/api/user/..%2Faccount/activity");

        let url = expand(template, &[("username", "a?b#c")]).unwrap();
        assert_eq!(url, "https://lichess.org/api/user/a%3Fb%23c/activity");

        let url = expand(template, &[("username", "Jean Dupont")]).unwrap();
        assert_eq!(url, "https://lichess.org/api/user/Jean%20Dupont/activity");

        let url = expand(template, &[("username", "the-real_one.~")]).unwrap();
        assert_eq!(url, "https://lichess.org/api/user/the-real_one.~/activity");
    }

    #[test]
    fn test_expanded_url_keeps_its_path() {
        let template = "https://lichess.org/api/user/{username}";
        for value in ["../account", "x/../../api/account", "a?b", "a#b", "...", "%2e%2e"] {
            let url = url::Url::parse(&expand(template, &[("username", value)]).unwrap()).unwrap();
            let segments: Vec<_> = url.path_segments().unwrap().collect();
            assert_eq!(segments.len(), 3, "{value} -> {url}");
            assert_eq!(segments[..2], ["api", "user"]);
            assert!(url.query().is_none());
            assert!(url.fragment().is_none());
        }
    }

    #[test]
    fn test_expand_rejects_dot_and_empty_segments() {
        for value in ["", ".", ".."] {
            let err = expand("https://lichess.org/api/user/{username}", &[("username", value)])
                .unwrap_err();
            assert!(matches!(
                err,
                ClientError::InvalidPathSegment { ref name, .. } if name == "username"
            ));
        }
    }
}
