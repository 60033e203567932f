//! Patent lifecycle transitions.
//!
//! The table is static and consulted on every transition; anything not listed
//! is rejected.

use super::error::ValidationError;
use super::types::PatentStatus;

use PatentStatus::*;

const TRANSITIONS: &[(PatentStatus, &[PatentStatus])] = &[
    (Draft, &[Filed]),
    (Filed, &[Published, Withdrawn, Abandoned]),
    (Published, &[UnderExamination, Withdrawn, Abandoned]),
    (
        UnderExamination,
        &[Granted, Rejected, Withdrawn, Abandoned],
    ),
    (Rejected, &[UnderExamination, Abandoned]),
    (Granted, &[Lapsed, Expired, Revoked]),
    (Lapsed, &[Granted]),
    (Withdrawn, &[]),
    (Abandoned, &[]),
    (Expired, &[]),
    (Revoked, &[]),
];

impl PatentStatus {
    /// States reachable from `self` in one step.
    pub fn allowed_transitions(&self) -> &'static [PatentStatus] {
        TRANSITIONS
            .iter()
            .find(|(from, _)| from == self)
            .map(|(_, to)| *to)
            .unwrap_or(&[])
    }

    pub fn can_transition_to(&self, next: PatentStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Returns `next` if the lifecycle table allows moving there from `self`.
    pub fn transition(self, next: PatentStatus) -> Result<PatentStatus, ValidationError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(ValidationError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_table_row() {
        let all = [
            Draft,
            Filed,
            Published,
            UnderExamination,
            Granted,
            Rejected,
            Withdrawn,
            Abandoned,
            Lapsed,
            Expired,
            Revoked,
        ];
        for status in all {
            assert!(TRANSITIONS.iter().any(|(from, _)| *from == status));
        }
    }

    #[test]
    fn happy_path_to_grant() {
        let status = Draft
            .transition(Filed)
            .and_then(|s| s.transition(Published))
            .and_then(|s| s.transition(UnderExamination))
            .and_then(|s| s.transition(Granted))
            .unwrap();
        assert_eq!(status, Granted);
    }

    #[test]
    fn rejects_transitions_not_in_table() {
        assert_eq!(
            Granted.transition(Filed),
            Err(ValidationError::InvalidTransition {
                from: Granted,
                to: Filed
            })
        );
        assert!(Draft.transition(Granted).is_err());
        assert!(Filed.transition(Filed).is_err());
    }

    #[test]
    fn restoration_and_appeal_are_allowed() {
        assert!(Lapsed.can_transition_to(Granted));
        assert!(Rejected.can_transition_to(UnderExamination));
    }

    #[test]
    fn terminal_states() {
        assert!(Expired.is_terminal());
        assert!(Revoked.is_terminal());
        assert!(Abandoned.is_terminal());
        assert!(!Granted.is_terminal());
    }
}
