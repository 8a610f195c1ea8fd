//! Session-stored visitor identity.
//!
//! The session holds a single visitor id. Both cart pages of that visitor are
//! looked up by it in [`crate::carts::CartRegistry`], so the session record is
//! written once and never rewritten by cart changes.

use tower_sessions::Session;
use tower_sessions::session::Error;
use uuid::Uuid;

/// Session keys.
pub mod keys {
    /// Key for the visitor id.
    pub const VISITOR_ID: &str = "visitor_id";
}

/// Return the visitor id for this session, assigning a new one on first visit.
///
/// # Errors
///
/// Returns an error if the session store fails or holds an undecodable id.
pub async fn visitor_id(session: &Session) -> Result<Uuid, Error> {
    if let Some(id) = session.get::<Uuid>(keys::VISITOR_ID).await? {
        return Ok(id);
    }

    let id = Uuid::new_v4();
    session.insert(keys::VISITOR_ID, id).await?;
    tracing::debug!(visitor_id = %id, "Assigned visitor id");
    Ok(id)
}
