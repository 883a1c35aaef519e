//! Role guard for protected areas.

use kar_core::roles::{Area, Role};

use crate::error::AuthError;
use crate::expiry::is_expired;
use crate::session::Session;

/// Check that `session` may open `area`.
///
/// No session, or a session without a known user, is `NotAuthenticated`. A
/// token past its `exp` is `TokenExpired`. A role that is unknown or not in
/// the area's allow-list is `Forbidden`.
///
/// # Errors
///
/// See above.
pub fn require(session: Option<&Session>, area: Area) -> Result<&Session, AuthError> {
    let session = session.ok_or(AuthError::NotAuthenticated)?;
    if is_expired(&session.token) {
        return Err(AuthError::TokenExpired);
    }
    let user = session.user.as_ref().ok_or(AuthError::NotAuthenticated)?;
    let forbidden = || AuthError::Forbidden {
        role: user.role.clone(),
        area: area.to_string(),
    };
    let role: Role = user.role().map_err(|_| forbidden())?;
    if !area.allows(role) {
        return Err(forbidden());
    }
    tracing::debug!(role = %role, %area, "access granted");
    Ok(session)
}

/// Every area `session` may open, in declaration order.
#[must_use]
pub fn accessible_areas(session: &Session) -> Vec<Area> {
    Area::ALL
        .iter()
        .copied()
        .filter(|area| require(Some(session), *area).is_ok())
        .collect()
}
