use thiserror::Error;

use storefront_core::MemberId;

/// Session-level error: operations that require a signed-in member.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("no member is signed in")]
    NotSignedIn,
}

/// Explicit holder of the current member for one interactive session.
///
/// Passed into order flows instead of being looked up from ambient state;
/// there is deliberately no global instance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    current_member: Option<MemberId>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self {
            current_member: None,
        }
    }

    pub fn signed_in(member_id: MemberId) -> Self {
        Self {
            current_member: Some(member_id),
        }
    }

    pub fn sign_in(&mut self, member_id: MemberId) {
        self.current_member = Some(member_id);
    }

    pub fn sign_out(&mut self) {
        self.current_member = None;
    }

    pub fn current_member(&self) -> Option<MemberId> {
        self.current_member
    }

    /// Resolve the current member or fail the operation.
    pub fn require_member(&self) -> Result<MemberId, SessionError> {
        self.current_member.ok_or(SessionError::NotSignedIn)
    }
}
