use verifier_core::{update, AppState, Effect, Msg, RequestFailure};

/// Drives the state into a visible auto-hiding notification and returns
/// the generation its timer was armed with.
fn failed_submit(state: AppState) -> (AppState, u64) {
    let (state, _) = update(state, Msg::UrlEdited("https://example.com".to_string()));
    let (state, _) = update(state, Msg::WordsEdited(vec!["rust".to_string()]));
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, effects) = update(
        state,
        Msg::SubmitFinished {
            result: Err(RequestFailure::Server("rejected".to_string())),
        },
    );
    let generation = match effects.as_slice() {
        [Effect::ScheduleAutoHide { generation, .. }] => *generation,
        other => panic!("expected one auto-hide effect, got {other:?}"),
    };
    (state, generation)
}

#[test]
fn timer_hides_the_notification() {
    let (state, generation) = failed_submit(AppState::new());
    assert!(state.view().notification.visible);

    let (state, effects) = update(state, Msg::HideTimerElapsed { generation });
    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.notification.visible);
    // Content survives the hide so a fade-out can still read it.
    assert_eq!(view.notification.message, "rejected");
}

#[test]
fn a_newer_notification_supersedes_the_pending_timer() {
    let (state, first_generation) = failed_submit(AppState::new());
    let (state, second_generation) = failed_submit(state);
    assert!(second_generation > first_generation);

    // The first timer fires late and must not hide the second banner.
    let (state, _) = update(
        state,
        Msg::HideTimerElapsed {
            generation: first_generation,
        },
    );
    assert!(state.view().notification.visible);

    // Only the timer armed by the most recent show counts.
    let (state, _) = update(
        state,
        Msg::HideTimerElapsed {
            generation: second_generation,
        },
    );
    assert!(!state.view().notification.visible);
}

#[test]
fn explicit_dismissal_cancels_the_timer() {
    let (state, generation) = failed_submit(AppState::new());

    let (mut state, _) = update(state, Msg::NotificationDismissed);
    assert!(!state.view().notification.visible);
    assert!(state.consume_dirty());

    // The stale timer is a no-op and must not mark the state dirty.
    let (mut state, effects) = update(state, Msg::HideTimerElapsed { generation });
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn dismissing_a_hidden_banner_is_a_noop() {
    let (state, effects) = update(AppState::new(), Msg::NotificationDismissed);
    assert!(effects.is_empty());
    assert!(!state.view().notification.visible);
}

#[test]
fn repeated_timer_expiry_hides_only_once() {
    let (state, generation) = failed_submit(AppState::new());
    let (mut state, _) = update(state, Msg::HideTimerElapsed { generation });
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::HideTimerElapsed { generation });
    assert!(!state.view().notification.visible);
    assert!(!state.consume_dirty());
}
