use shared::error::{AppError, AppResult};

use crate::model::id::UserId;

/// Ownership half of the authorization gate: the token subject must match the
/// owner reference recorded on the target entity. The order of checks is fixed
/// by the callers: token validity, then target existence, then this.
pub fn check_owner(subject: UserId, owner: UserId) -> AppResult<()> {
    if subject == owner {
        Ok(())
    } else {
        Err(AppError::ForbiddenOperation)
    }
}
