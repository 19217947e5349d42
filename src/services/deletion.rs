//! Two-step confirmation flow guarding destructive actions.

use crate::domain::Resource;

/// Where the delete dialog currently stands.
#[derive(Clone, Debug, PartialEq)]
pub enum DeleteState<T> {
    Idle,
    /// Waiting for the operator to confirm removal of this entity.
    PendingConfirmation(T),
    /// Delete request in flight; confirm and cancel are disabled.
    Deleting(T),
}

/// State machine `Idle -> PendingConfirmation -> Deleting -> Idle`.
///
/// The collection is never mutated from here; [`DeleteFlow::settle`]
/// reports which id to drop and only on success.
#[derive(Clone, Debug)]
pub struct DeleteFlow<T> {
    state: DeleteState<T>,
}

impl<T: Resource> DeleteFlow<T> {
    pub fn new() -> Self {
        Self {
            state: DeleteState::Idle,
        }
    }

    pub fn state(&self) -> &DeleteState<T> {
        &self.state
    }

    /// True while a request is in flight; the dialog controls are
    /// disabled for the duration.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, DeleteState::Deleting(_))
    }

    /// Selects an entity for deletion, opening the confirmation dialog.
    /// Re-selecting while pending retargets the dialog; ignored while a
    /// request is in flight.
    pub fn request(&mut self, entity: T) {
        if !self.is_busy() {
            self.state = DeleteState::PendingConfirmation(entity);
        }
    }

    /// Backs out of the pending confirmation with no side effects.
    pub fn cancel(&mut self) {
        if let DeleteState::PendingConfirmation(_) = self.state {
            self.state = DeleteState::Idle;
        }
    }

    /// Confirms the pending deletion, returning the doomed entity's id.
    pub fn begin(&mut self) -> Option<i64> {
        match std::mem::replace(&mut self.state, DeleteState::Idle) {
            DeleteState::PendingConfirmation(entity) => {
                let id = entity.id();
                self.state = DeleteState::Deleting(entity);
                Some(id)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Resolves the in-flight request. Returns the id to drop from the
    /// collection on success; on failure the row stays visible.
    pub fn settle(&mut self, success: bool) -> Option<i64> {
        match std::mem::replace(&mut self.state, DeleteState::Idle) {
            DeleteState::Deleting(entity) if success => Some(entity.id()),
            DeleteState::Deleting(_) => None,
            other => {
                self.state = other;
                None
            }
        }
    }
}

impl<T: Resource> Default for DeleteFlow<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::partner::Partner;

    fn partner(id: i64) -> Partner {
        Partner {
            id,
            nom: format!("Partenaire {id}"),
            ..Partner::default()
        }
    }

    #[test]
    fn cancel_returns_to_idle_without_side_effects() {
        let mut flow = DeleteFlow::new();
        flow.request(partner(1));
        assert!(matches!(flow.state(), DeleteState::PendingConfirmation(_)));

        flow.cancel();
        assert!(matches!(flow.state(), DeleteState::Idle));
        assert_eq!(flow.begin(), None);
    }

    #[test]
    fn confirm_then_success_reports_the_id() {
        let mut flow = DeleteFlow::new();
        flow.request(partner(7));

        assert_eq!(flow.begin(), Some(7));
        assert!(flow.is_busy());
        assert_eq!(flow.settle(true), Some(7));
        assert!(matches!(flow.state(), DeleteState::Idle));
    }

    #[test]
    fn failure_reports_nothing_and_returns_to_idle() {
        let mut flow = DeleteFlow::new();
        flow.request(partner(7));
        flow.begin();

        assert_eq!(flow.settle(false), None);
        assert!(matches!(flow.state(), DeleteState::Idle));
    }

    #[test]
    fn requests_are_ignored_while_busy() {
        let mut flow = DeleteFlow::new();
        flow.request(partner(1));
        flow.begin();

        flow.request(partner(2));
        assert!(flow.is_busy());
        assert_eq!(flow.settle(true), Some(1));
    }

    #[test]
    fn begin_without_pending_is_a_no_op() {
        let mut flow: DeleteFlow<Partner> = DeleteFlow::new();
        assert_eq!(flow.begin(), None);
        assert_eq!(flow.settle(true), None);
    }
}
