//! Timer behaviour of the banner carousel and the join page word ticker
//!
//! All tests run on tokio's paused clock, so intervals elapse instantly.

use std::sync::Arc;
use std::time::Duration;
use storefront::prelude::*;

fn build_host() -> Arc<StorefrontHost> {
    Arc::new(
        StorefrontBuilder::new()
            .without_autostart()
            .build_host()
            .expect("Failed to build host"),
    )
}

#[tokio::test(start_paused = true)]
async fn test_rotators_follow_their_intervals() {
    let host = build_host();
    let mut rx = host.event_bus.subscribe();
    assert!(host.activate());

    let mut rotators = Vec::new();
    for _ in 0..5 {
        let envelope = rx.recv().await.unwrap();
        assert_eq!(envelope.event.trigger, Trigger::Timer);
        rotators.push(envelope.event.rotator);
    }

    // words every 2s, banner every 5s: t=2, 4, 5, 6, 8
    assert_eq!(
        rotators,
        vec![
            Rotator::Words,
            Rotator::Words,
            Rotator::Banner,
            Rotator::Words,
            Rotator::Words,
        ]
    );
    assert_eq!(host.words.state().await.index, 4);
    assert_eq!(host.banner.state().await.index, 1);
}

#[tokio::test(start_paused = true)]
async fn test_banner_wraps_after_full_cycle() {
    let host = build_host();
    host.banner.start();

    tokio::time::sleep(Duration::from_millis(6 * 5000 + 100)).await;

    let state = host.banner.state().await;
    assert_eq!(state.index, 0);
    assert_eq!(state.direction, Direction::Forward);
}

#[tokio::test(start_paused = true)]
async fn test_deactivate_stops_changes() {
    let host = build_host();
    let mut rx = host.event_bus.subscribe();
    host.activate();

    rx.recv().await.unwrap();
    host.deactivate();
    assert!(!host.is_active());

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_host_mid_interval_stops_changes() {
    let host = build_host();
    let mut rx = host.event_bus.subscribe();
    host.activate();

    tokio::time::sleep(Duration::from_millis(1500)).await;
    drop(host);

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_manual_jump_then_timer_continues_from_there() {
    let host = build_host();
    let mut rx = host.event_bus.subscribe();

    let change = host.banner.jump(4).await.unwrap();
    assert_eq!(change.direction, Direction::Forward);
    assert_eq!(rx.recv().await.unwrap().event.trigger, Trigger::Manual);

    host.banner.start();
    let envelope = rx.recv().await.unwrap();
    assert_eq!(envelope.event.index, 5);
    assert_eq!(envelope.event.trigger, Trigger::Timer);
}

#[test]
fn test_controller_wraps_both_ways() {
    let mut carousel = CarouselController::new(6).unwrap();
    for _ in 0..6 {
        carousel.advance();
    }
    assert_eq!(carousel.current_index(), 0);

    carousel.retreat();
    assert_eq!(carousel.current_index(), 5);
    assert_eq!(carousel.direction(), Direction::Backward);
}
