//! Id batches for bulk lookups.

use crate::{ClientError, Result};

/// Maximum number of ids accepted by the user status endpoint.
pub const MAX_STATUS_IDS: usize = 50;

/// Maximum number of ids accepted by the bulk user lookup endpoint.
pub const MAX_USERS_BY_ID: usize = 300;

/// Joins ids with commas after checking them against `max`.
///
/// Returns `Ok(None)` for an empty batch so callers can skip the request.
pub(crate) fn join_ids<S: AsRef<str>>(ids: &[S], max: usize) -> Result<Option<String>> {
    if ids.is_empty() {
        return Ok(None);
    }
    if ids.len() > max {
        return Err(ClientError::TooManyIds {
            requested: ids.len(),
            max,
        });
    }

    let joined = ids.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(",");
    Ok(Some(joined))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch() {
        let ids: [&str; 0] = [];
        assert_eq!(join_ids(&ids, MAX_STATUS_IDS).unwrap(), None);
    }

    #[test]
    fn test_single_id() {
        assert_eq!(
            join_ids(&["thibault"], MAX_STATUS_IDS).unwrap().as_deref(),
            Some("thibault")
        );
    }

    #[test]
    fn test_order_preserved() {
        let ids = vec!["c".to_string(), "a".to_string(), "b".to_string()];
        assert_eq!(join_ids(&ids, MAX_USERS_BY_ID).unwrap().as_deref(), Some("c,a,b"));
    }

    #[test]
    fn test_ceiling_inclusive() {
        let ids: Vec<String> = (0..MAX_STATUS_IDS).map(|i| format!("u{i}")).collect();
        assert!(join_ids(&ids, MAX_STATUS_IDS).is_ok());

        let ids: Vec<String> = (0..=MAX_STATUS_IDS).map(|i| format!("u{i}")).collect();
        assert!(matches!(
            join_ids(&ids, MAX_STATUS_IDS),
            Err(ClientError::TooManyIds {
                requested: 51,
                max: 50
            })
        ));
    }
}
