use crate::errors::domain::{ConflictKind, DomainError};

/// A couple is two people.
pub const MAX_COUPLE_MEMBERS: u64 = 2;

/// Whether a user currently in `current` may enter a couple that has `members` people.
pub fn check_can_join(current: Option<&str>, members: u64) -> Result<(), DomainError> {
    if current.is_some() {
        return Err(DomainError::conflict(
            ConflictKind::AlreadyInCouple,
            "You already belong to a couple",
        ));
    }
    if members >= MAX_COUPLE_MEMBERS {
        return Err(DomainError::conflict(
            ConflictKind::CoupleFull,
            "This couple already has two members",
        ));
    }
    Ok(())
}
