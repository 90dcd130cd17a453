use super::*;

#[test]
fn cleanup_discards_a_check_that_settles_later() {
    let liveness = Liveness::new();
    let cleanup = invalidate_on_cleanup(&liveness);
    cleanup();
    let mut navigated = false;
    assert!(liveness.try_act(|| navigated = true).is_none());
    assert!(!navigated);
}

#[test]
fn cleanup_after_redirect_is_harmless() {
    let liveness = Liveness::new();
    let cleanup = invalidate_on_cleanup(&liveness);
    assert_eq!(liveness.try_act(cleanup), Some(()));
    assert!(liveness.try_act(|| ()).is_none());
}

#[test]
fn gate_redirects_replace_history() {
    assert!(navigate_options(HistoryMode::Replace).replace);
    assert!(!navigate_options(HistoryMode::Push).replace);
}

#[test]
fn optimistic_policy_shows_children_while_checking() {
    assert!(should_render(GateState::Checking, RenderPolicy::Optimistic));
    assert!(!should_render(GateState::Redirecting, RenderPolicy::Optimistic));
}

#[test]
fn placeholder_policy_waits_for_confirmed_session() {
    assert!(!should_render(GateState::Checking, RenderPolicy::Placeholder));
    assert!(should_render(GateState::Authenticated, RenderPolicy::Placeholder));
}
