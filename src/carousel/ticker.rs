//! Timer-driven rotation of a [`CarouselController`]
//!
//! A `CarouselTicker` owns the recurring timer task. The task is spawned by
//! [`CarouselTicker::start`] and aborted by [`CarouselTicker::stop`] or when
//! the ticker is dropped. Each run holds a gate that is closed before `stop`
//! returns; the task advances and publishes only while holding the open gate,
//! so no timer change is published after `stop` returns.

use super::controller::{CarouselController, SlideState};
use crate::core::events::{EventBus, Rotator, SlideChange, Trigger};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Shared carousel state plus its recurring timer
pub struct CarouselTicker {
    rotator: Rotator,
    period: Duration,
    state: Arc<RwLock<CarouselController>>,
    bus: EventBus,
    task: Mutex<Option<TimerRun>>,
}

/// A spawned timer task and the gate it publishes through
struct TimerRun {
    handle: JoinHandle<()>,
    open: Arc<Mutex<bool>>,
}

impl TimerRun {
    fn cancel(self) {
        *self.open.lock().unwrap_or_else(PoisonError::into_inner) = false;
        self.handle.abort();
    }
}

impl CarouselTicker {
    /// Create a stopped ticker
    pub fn new(
        rotator: Rotator,
        controller: CarouselController,
        period: Duration,
        bus: EventBus,
    ) -> Self {
        Self {
            rotator,
            period,
            state: Arc::new(RwLock::new(controller)),
            bus,
            task: Mutex::new(None),
        }
    }

    pub fn rotator(&self) -> Rotator {
        self.rotator
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start the timer
    ///
    /// Returns `false` when the timer is already running or when called
    /// outside a tokio runtime.
    pub fn start(&self) -> bool {
        let mut task = self.lock_task();
        if task.as_ref().is_some_and(|run| !run.handle.is_finished()) {
            return false;
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(rotator = self.rotator.as_str(), "No runtime, ticker not started");
            return false;
        };

        let state = self.state.clone();
        let bus = self.bus.clone();
        let rotator = self.rotator;
        let period = self.period;
        let open = Arc::new(Mutex::new(true));
        let gate = open.clone();

        let handle = runtime.spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let mut carousel = state.write().await;
                let published = {
                    let open = gate.lock().unwrap_or_else(PoisonError::into_inner);
                    if *open {
                        carousel.advance();
                        bus.publish(SlideChange::new(rotator, carousel.state(), Trigger::Timer));
                    }
                    *open
                };
                if !published {
                    break;
                }
            }
        });
        *task = Some(TimerRun { handle, open });

        tracing::info!(
            rotator = self.rotator.as_str(),
            period_ms = self.period.as_millis() as u64,
            "Carousel ticker started"
        );
        true
    }

    /// Cancel the timer
    ///
    /// Returns `true` if a running timer was cancelled.
    pub fn stop(&self) -> bool {
        match self.lock_task().take() {
            Some(run) => {
                run.cancel();
                tracing::info!(rotator = self.rotator.as_str(), "Carousel ticker stopped");
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.lock_task()
            .as_ref()
            .is_some_and(|run| !run.handle.is_finished())
    }

    /// Current slide
    pub async fn state(&self) -> SlideState {
        self.state.read().await.state()
    }

    /// Manually move to the next slide
    pub async fn next(&self) -> SlideChange {
        let snapshot = {
            let mut carousel = self.state.write().await;
            carousel.advance();
            carousel.state()
        };
        self.publish_manual(snapshot)
    }

    /// Manually move to the previous slide
    pub async fn previous(&self) -> SlideChange {
        let snapshot = {
            let mut carousel = self.state.write().await;
            carousel.retreat();
            carousel.state()
        };
        self.publish_manual(snapshot)
    }

    /// Manually jump to a slide, `None` when the index is out of range
    pub async fn jump(&self, index: usize) -> Option<SlideChange> {
        let snapshot = {
            let mut carousel = self.state.write().await;
            if !carousel.jump_to(index) {
                return None;
            }
            carousel.state()
        };
        Some(self.publish_manual(snapshot))
    }

    fn publish_manual(&self, snapshot: SlideState) -> SlideChange {
        let change = SlideChange::new(self.rotator, snapshot, Trigger::Manual);
        self.bus.publish(change.clone());
        change
    }

    fn lock_task(&self) -> MutexGuard<'_, Option<TimerRun>> {
        self.task.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for CarouselTicker {
    fn drop(&mut self) {
        let task = self
            .task
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(run) = task {
            run.cancel();
            tracing::debug!(rotator = self.rotator.as_str(), "Carousel ticker dropped");
        }
    }
}

impl std::fmt::Debug for CarouselTicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselTicker")
            .field("rotator", &self.rotator)
            .field("period", &self.period)
            .field("running", &self.is_running())
            .finish()
    }
}
