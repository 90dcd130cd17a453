use std::future::ready;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::*;

#[derive(Clone, Default)]
struct RecordingNavigator {
    calls: Arc<Mutex<Vec<(String, HistoryMode)>>>,
}

impl RecordingNavigator {
    fn calls(&self) -> Vec<(String, HistoryMode)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str, mode: HistoryMode) {
        self.calls.lock().unwrap().push((path.to_owned(), mode));
    }
}

// =============================================================
// classify
// =============================================================

#[test]
fn classify_present_user_is_authenticated() {
    let outcome = classify(Ok(Some("u1")));
    assert_eq!(outcome, GateOutcome::Authenticated("u1"));
    assert_eq!(outcome.state(), GateState::Authenticated);
    assert_eq!(outcome.user(), Some(&"u1"));
}

#[test]
fn classify_absent_user_redirects() {
    let outcome = classify::<&str>(Ok(None));
    assert_eq!(outcome, GateOutcome::Unauthenticated);
    assert_eq!(outcome.state(), GateState::Redirecting);
    assert!(outcome.user().is_none());
}

#[test]
fn classify_error_redirects() {
    let outcome = classify::<&str>(Err(GateError::AuthCheckFailed("boom".to_owned())));
    assert_eq!(outcome.state(), GateState::Redirecting);
    assert!(matches!(outcome, GateOutcome::Failed(GateError::AuthCheckFailed(_))));
}

#[test]
fn classify_timeout_redirects() {
    let outcome = classify::<&str>(Err(GateError::AuthCheckTimedOut(Duration::from_secs(1))));
    assert_eq!(outcome.state(), GateState::Redirecting);
}

// =============================================================
// run_check
// =============================================================

#[tokio::test]
async fn authenticated_check_never_navigates() {
    let nav = RecordingNavigator::default();
    let token = Liveness::new();
    let outcome = run_check(&token, ready(Ok(Some("u1"))), &nav).await;
    assert_eq!(outcome.map(|o| o.state()), Some(GateState::Authenticated));
    assert!(nav.calls().is_empty());
}

#[tokio::test]
async fn absent_session_redirects_once_with_replace() {
    let nav = RecordingNavigator::default();
    let token = Liveness::new();
    let outcome = run_check::<&str, _, _>(&token, ready(Ok(None)), &nav).await;
    assert_eq!(outcome, Some(GateOutcome::Unauthenticated));
    assert_eq!(nav.calls(), vec![("/login".to_owned(), HistoryMode::Replace)]);
}

#[tokio::test]
async fn failed_check_behaves_like_absent_session() {
    let nav = RecordingNavigator::default();
    let token = Liveness::new();
    let outcome = run_check::<&str, _, _>(
        &token,
        ready(Err(GateError::AuthCheckFailed("connection refused".to_owned()))),
        &nav,
    )
    .await;
    assert_eq!(outcome.map(|o| o.state()), Some(GateState::Redirecting));
    assert_eq!(nav.calls(), vec![(LOGIN_PATH.to_owned(), HistoryMode::Replace)]);
}

#[tokio::test]
async fn torn_down_mount_discards_result() {
    let nav = RecordingNavigator::default();
    let token = Liveness::new();
    token.invalidate();
    let outcome = run_check::<&str, _, _>(&token, ready(Ok(None)), &nav).await;
    assert!(outcome.is_none());
    assert!(nav.calls().is_empty());
}

#[tokio::test]
async fn navigator_unmounting_its_own_gate_returns() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();
    let token = Liveness::new();
    let teardown = token.clone();
    // Routers unmount the gated view while handling the redirect.
    let nav = move |path: &str, mode: HistoryMode| {
        sink.lock().unwrap().push((path.to_owned(), mode));
        teardown.invalidate();
    };
    let outcome = tokio::time::timeout(
        Duration::from_secs(1),
        run_check::<&str, _, _>(&token, ready(Ok(None)), &nav),
    )
    .await
    .expect("run_check must not block on a re-entrant unmount");
    assert_eq!(outcome, Some(GateOutcome::Unauthenticated));
    assert!(token.is_torn_down());
    assert_eq!(calls.lock().unwrap().len(), 1);
    assert!(run_check::<&str, _, _>(&token, ready(Ok(None)), &nav).await.is_none());
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn second_check_on_same_token_cannot_redirect_again() {
    let nav = RecordingNavigator::default();
    let token = Liveness::new();
    run_check::<&str, _, _>(&token, ready(Ok(None)), &nav).await;
    let again = run_check::<&str, _, _>(&token, ready(Ok(None)), &nav).await;
    assert!(again.is_none());
    assert_eq!(nav.calls().len(), 1);
}

#[tokio::test]
async fn closures_work_as_navigators() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();
    let nav = move |path: &str, mode: HistoryMode| sink.lock().unwrap().push((path.to_owned(), mode));
    let token = Liveness::new();
    run_check::<&str, _, _>(&token, ready(Ok(None)), &nav).await;
    assert_eq!(calls.lock().unwrap().as_slice(), &[("/login".to_owned(), HistoryMode::Replace)]);
}
