use chrono::{Duration, Utc};
use log::error;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::delivery::DeliveryService;
use crate::error::EngineError;
use crate::models::assignment::{Assignment, ParentLink};
use crate::AppState;

pub const LINK_BASE: &str = "https://neuroom.app/parent";

/// Links expire two days after issuance.
const LINK_TTL_HOURS: i64 = 48;

pub(crate) fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Issue a fresh capability link bound to the current version set. Returns
/// the stored record and the shareable URL carrying the raw token; the raw
/// token is not retained anywhere else.
pub(crate) fn issue(version_count: usize) -> (ParentLink, String) {
    let token = Uuid::new_v4().to_string();
    let now = Utc::now();
    let link = ParentLink {
        token_hash: hash_token(&token),
        issued_at: now,
        expires_at: now + Duration::hours(LINK_TTL_HOURS),
        version_count,
    };
    (link, format!("{LINK_BASE}/{token}"))
}

/// Resolve a presented token to the assignment awaiting parent review.
///
/// A token that is unknown, expired, or bound to a version set that has
/// since changed resolves to `NotFound`; a stale capability is
/// indistinguishable from one that never existed.
pub fn resolve<'a>(state: &'a AppState, token: &str) -> Result<&'a Assignment, EngineError> {
    let token_hash = hash_token(token);
    let found = state.assignments.iter().find_map(|assignment| {
        assignment
            .parent_link
            .as_ref()
            .filter(|link| link.token_hash == token_hash)
            .map(|link| (assignment, link))
    });

    let (assignment, link) = match found {
        Some(pair) => pair,
        None => return Err(EngineError::NotFound(format!("parent link {token}"))),
    };

    if link.expires_at < Utc::now() {
        return Err(EngineError::NotFound(format!("parent link {token}")));
    }
    if link.version_count != assignment.versions.len() {
        return Err(EngineError::NotFound(format!("parent link {token}")));
    }

    Ok(assignment)
}

/// Send a freshly issued link out of band (messenger, SMS). Purely a
/// delegated I/O step; link state does not change on failure.
pub async fn deliver(delivery: &dyn DeliveryService, url: &str) -> Result<(), EngineError> {
    delivery.deliver_parent_link(url).await.map_err(|err| {
        error!("parent link delivery failed: {err}");
        EngineError::ExternalFailure(err.to_string())
    })
}
