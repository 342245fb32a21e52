//! Pure transition functions for [`UiConfigAction`].

use crate::action::UiConfigAction;
use crate::state::UiConfigState;

/// Apply `action` to `state` in place. Returns whether the state changed.
pub fn apply(state: &mut UiConfigState, action: &UiConfigAction) -> bool {
    match action {
        UiConfigAction::Update(patch) => {
            let before = state.clone();
            state.apply_patch(patch);
            *state != before
        }
        UiConfigAction::ReceivedUserRoles(Some(roles)) => {
            if state.user_sql_roles == *roles {
                return false;
            }
            state.user_sql_roles = roles.clone();
            true
        }
        UiConfigAction::ReceivedUserRoles(None) => false,
        UiConfigAction::InvalidatedUserRoles => {
            if state.user_sql_roles.is_empty() {
                return false;
            }
            state.user_sql_roles.clear();
            true
        }
        UiConfigAction::RefreshUserRoles | UiConfigAction::RequestUserRoles => false,
    }
}

/// Produce the state that results from applying `action` to `state`.
pub fn reduce(state: &UiConfigState, action: &UiConfigAction) -> UiConfigState {
    let mut next = state.clone();
    apply(&mut next, action);
    next
}
