use crate::ScreenLifetime;

use tokio::time::{Duration, timeout};

#[tokio::test]
async fn given_lifetime_when_teardown_triggered_then_guard_notified() {
    let lifetime = ScreenLifetime::new();
    let mut guard = lifetime.subscribe();

    let handle = lifetime.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        handle.teardown();
    });

    let result = timeout(Duration::from_millis(500), guard.wait()).await;
    assert!(result.is_ok(), "Teardown signal should be received");
}

#[tokio::test]
async fn given_multiple_guards_when_teardown_then_all_notified() {
    let lifetime = ScreenLifetime::new();
    let mut guard1 = lifetime.subscribe();
    let mut guard2 = lifetime.subscribe();

    lifetime.teardown();

    assert!(timeout(Duration::from_millis(10), guard1.wait()).await.is_ok());
    assert!(timeout(Duration::from_millis(10), guard2.wait()).await.is_ok());
}

#[tokio::test]
async fn given_torn_down_lifetime_when_subscribing_later_then_wait_returns() {
    let lifetime = ScreenLifetime::new();
    lifetime.teardown();

    let mut guard = lifetime.subscribe();

    assert!(guard.is_torn_down());
    assert!(timeout(Duration::from_millis(10), guard.wait()).await.is_ok());
}

#[tokio::test]
async fn given_dropped_lifetime_when_waiting_then_not_treated_as_teardown() {
    let lifetime = ScreenLifetime::new();
    let mut guard = lifetime.subscribe();
    drop(lifetime);

    let result = timeout(Duration::from_millis(20), guard.wait()).await;

    assert!(result.is_err());
    assert!(!guard.is_torn_down());
}

#[test]
fn given_new_lifetime_when_checked_then_not_torn_down() {
    let lifetime = ScreenLifetime::new();
    let guard = lifetime.subscribe();

    assert!(!lifetime.is_torn_down());
    assert!(!guard.is_torn_down());
}
