use verifier_core::{
    update, AppState, Effect, Msg, NotificationKind, RequestFailure, RequestStatus,
    REMOVE_FAILURE_MESSAGE, REMOVE_SUCCESS_MESSAGE, SERVER_DOWN_MESSAGE,
};

fn loaded(items: &[&str]) -> AppState {
    let (state, _) = update(AppState::new(), Msg::ListOpened);
    let (state, _) = update(
        state,
        Msg::ListLoaded {
            result: Ok(items.iter().map(|item| item.to_string()).collect()),
        },
    );
    state
}

#[test]
fn opening_the_list_loads_lazily() {
    let (state, effects) = update(AppState::new(), Msg::ListOpened);
    assert_eq!(state.view().collection, RequestStatus::Pending);
    assert_eq!(effects, vec![Effect::LoadUrls]);

    // A second open while the request is in flight does nothing.
    let (state, effects) = update(state, Msg::ListOpened);
    assert!(effects.is_empty());

    // Nor does one after a successful load.
    let (state, _) = update(state, Msg::ListLoaded { result: Ok(vec![]) });
    let (_, effects) = update(state, Msg::ListOpened);
    assert!(effects.is_empty());
}

#[test]
fn empty_response_succeeds_with_no_items() {
    let state = loaded(&[]);
    let view = state.view();
    assert_eq!(view.collection, RequestStatus::Succeeded);
    assert!(view.items.is_empty());
}

#[test]
fn items_are_shown_in_server_order() {
    let state = loaded(&["https://b.example.com", "https://a.example.com"]);
    assert_eq!(
        state.view().items,
        vec![
            "https://b.example.com".to_string(),
            "https://a.example.com".to_string(),
        ]
    );
}

#[test]
fn unreachable_server_shows_the_fixed_message() {
    let (state, _) = update(AppState::new(), Msg::ListOpened);
    let (state, effects) = update(
        state,
        Msg::ListLoaded {
            result: Err(RequestFailure::ServerUnreachable),
        },
    );

    let view = state.view();
    assert_eq!(view.collection, RequestStatus::Failed);
    assert_eq!(view.collection_error.as_deref(), Some(SERVER_DOWN_MESSAGE));
    assert_eq!(view.notification.kind, NotificationKind::Error);
    assert_eq!(view.notification.message, SERVER_DOWN_MESSAGE);
    assert!(matches!(
        effects.as_slice(),
        [Effect::ScheduleAutoHide { .. }]
    ));
}

#[test]
fn server_reported_load_failure_stays_until_dismissed() {
    let (state, _) = update(AppState::new(), Msg::ListOpened);
    let (state, effects) = update(
        state,
        Msg::ListLoaded {
            result: Err(RequestFailure::Server("database offline".to_string())),
        },
    );

    let view = state.view();
    assert_eq!(view.collection_error.as_deref(), Some("database offline"));
    assert_eq!(view.notification.message, "database offline");
    // No auto-hide for server-reported list failures.
    assert!(effects.is_empty());
}

#[test]
fn failed_load_can_be_retried() {
    let (state, _) = update(AppState::new(), Msg::ListOpened);
    let (state, _) = update(
        state,
        Msg::ListLoaded {
            result: Err(RequestFailure::ServerUnreachable),
        },
    );

    let (state, effects) = update(state, Msg::ListOpened);
    assert_eq!(effects, vec![Effect::LoadUrls]);
    assert_eq!(state.view().collection, RequestStatus::Pending);
    assert_eq!(state.view().collection_error, None);
}

#[test]
fn remove_waits_for_server_confirmation() {
    let state = loaded(&["https://a.example.com", "https://b.example.com"]);
    let (state, effects) = update(
        state,
        Msg::RemoveClicked {
            url: "https://a.example.com".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::DeleteUrl {
            url: "https://a.example.com".to_string(),
        }]
    );
    // Nothing removed yet.
    assert_eq!(state.view().items.len(), 2);

    let (state, _) = update(
        state,
        Msg::RemoveFinished {
            url: "https://a.example.com".to_string(),
            result: Ok(()),
        },
    );
    let view = state.view();
    assert_eq!(view.items, vec!["https://b.example.com".to_string()]);
    assert_eq!(view.notification.kind, NotificationKind::Success);
    assert_eq!(view.notification.message, REMOVE_SUCCESS_MESSAGE);
}

#[test]
fn remove_drops_every_occurrence_of_the_url() {
    let state = loaded(&["https://a.example.com", "https://b.example.com", "https://a.example.com"]);
    let (state, _) = update(
        state,
        Msg::RemoveClicked {
            url: "https://a.example.com".to_string(),
        },
    );
    let (state, _) = update(
        state,
        Msg::RemoveFinished {
            url: "https://a.example.com".to_string(),
            result: Ok(()),
        },
    );

    assert_eq!(state.view().items, vec!["https://b.example.com".to_string()]);
}

#[test]
fn rejected_remove_leaves_items_untouched() {
    let state = loaded(&["https://a.example.com"]);
    let (state, _) = update(
        state,
        Msg::RemoveClicked {
            url: "https://a.example.com".to_string(),
        },
    );
    let (state, _) = update(
        state,
        Msg::RemoveFinished {
            url: "https://a.example.com".to_string(),
            result: Err(RequestFailure::Server("not found".to_string())),
        },
    );

    let view = state.view();
    assert_eq!(view.items, vec!["https://a.example.com".to_string()]);
    assert_eq!(view.notification.kind, NotificationKind::Error);
    assert_eq!(view.notification.message, REMOVE_FAILURE_MESSAGE);
}

#[test]
fn only_one_removal_may_be_in_flight() {
    let state = loaded(&["https://a.example.com", "https://b.example.com"]);
    let (state, _) = update(
        state,
        Msg::RemoveClicked {
            url: "https://a.example.com".to_string(),
        },
    );
    let (state, effects) = update(
        state,
        Msg::RemoveClicked {
            url: "https://b.example.com".to_string(),
        },
    );
    assert!(effects.is_empty());

    // A completion for some other URL is not ours to apply.
    let (state, effects) = update(
        state,
        Msg::RemoveFinished {
            url: "https://b.example.com".to_string(),
            result: Ok(()),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.view().items.len(), 2);
}

#[test]
fn remove_is_refused_before_the_list_loads() {
    let (state, effects) = update(
        AppState::new(),
        Msg::RemoveClicked {
            url: "https://a.example.com".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.view().collection, RequestStatus::Idle);
}
