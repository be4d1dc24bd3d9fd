// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Frame loop host.
//!
//! The host owns a [`Scheduler`] and a [`GameClock`], turns [`TimerPlan`]s
//! into timers, and once per frame advances the game clock, applies each
//! plan's schedule (delayed start, pause window, cancel deadline) and ticks
//! the scheduler. Timer callbacks report lifecycle events over a channel
//! that the loop drains after every frame.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::{Interval, MissedTickBehavior};
use tw_core::{
    link_tokens, CancellationToken, Clock, FakeClock, GameClock, RealTime, SharedTimeSource,
};
use tw_engine::{Scheduler, Timer, TimerSnapshot};

use crate::plan::TimerPlan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Started,
    Paused,
    Resumed,
    Completed,
    Cancelled,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::Paused => "paused",
            Self::Resumed => "resumed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// One lifecycle event of a hosted timer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostEvent {
    /// Wall-clock seconds since the host started.
    pub time: f64,
    pub timer: String,
    pub event: EventKind,
    /// Completion count, set on completions of looping timers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<u32>,
}

/// Final state of a hosted timer.
#[derive(Debug, Clone, Serialize)]
pub struct TimerReport {
    pub name: String,
    pub completions: u32,
    #[serde(flatten)]
    pub snapshot: TimerSnapshot,
}

/// Drives the frame rate: real sleeps, or a fake clock stepped per frame.
pub enum Pacer {
    Realtime(Interval),
    Simulated { clock: FakeClock, tick: Duration },
}

impl Pacer {
    /// Must be called inside a tokio runtime. `tick` must be non-zero.
    pub fn realtime(tick: Duration) -> Self {
        let mut interval = tokio::time::interval(tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self::Realtime(interval)
    }

    pub fn simulated(clock: FakeClock, tick: Duration) -> Self {
        Self::Simulated { clock, tick }
    }

    async fn wait(&mut self) {
        match self {
            Self::Realtime(interval) => {
                interval.tick().await;
            }
            Self::Simulated { clock, tick } => clock.advance(*tick),
        }
    }
}

#[derive(Clone)]
struct Emitter {
    name: String,
    clock: SharedTimeSource,
    tx: UnboundedSender<HostEvent>,
}

impl Emitter {
    fn send(&self, event: EventKind, cycle: Option<u32>) {
        // The receiver lives as long as the host; a closed channel only
        // happens after the run has ended.
        let _ = self.tx.send(HostEvent {
            time: self.clock.seconds(),
            timer: self.name.clone(),
            event,
            cycle,
        });
    }
}

struct Entry {
    plan: TimerPlan,
    timer: Timer,
    cancel: CancellationToken,
    completions: Arc<AtomicU32>,
    emitter: Emitter,
    started_at: Option<f64>,
    paused: bool,
    resumed: bool,
}

impl Entry {
    fn completions(&self) -> u32 {
        self.completions.load(Ordering::SeqCst)
    }
}

pub struct Host<C: Clock> {
    game: GameClock<C>,
    wall: SharedTimeSource,
    scheduler: Scheduler,
    shutdown: CancellationToken,
    entries: Vec<Entry>,
    tx: UnboundedSender<HostEvent>,
    rx: UnboundedReceiver<HostEvent>,
}

impl<C: Clock> Host<C> {
    /// Create a host whose clocks read from `clock`.
    ///
    /// Cancelling `shutdown` cancels every started timer on the next frame
    /// and keeps pending timers from starting.
    pub fn new(clock: C, time_scale: f64, shutdown: CancellationToken) -> Self {
        let game = GameClock::new(clock.clone());
        game.set_time_scale(time_scale);
        let wall: SharedTimeSource = Arc::new(RealTime::new(clock));
        let scheduler = Scheduler::new(game.clone());
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            game,
            wall,
            scheduler,
            shutdown,
            entries: Vec::new(),
            tx,
            rx,
        }
    }

    #[cfg(test)]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Wall-clock seconds since the host was created.
    pub fn now(&self) -> f64 {
        self.wall.seconds()
    }

    pub fn add(&mut self, plan: TimerPlan) {
        let timer = if plan.real_time {
            Timer::with_time_source(&self.scheduler, plan.duration, Arc::clone(&self.wall))
        } else {
            self.scheduler.timer(plan.duration)
        };
        let cancel = CancellationToken::new();
        let completions = Arc::new(AtomicU32::new(0));
        let emitter = Emitter {
            name: plan.name.clone(),
            clock: Arc::clone(&self.wall),
            tx: self.tx.clone(),
        };

        let looping = plan.loops();
        timer
            .looped(looping)
            .with_cancellation(link_tokens(&self.shutdown, &[cancel.clone()]));
        timer.on_start({
            let emitter = emitter.clone();
            move || emitter.send(EventKind::Started, None)
        });
        timer.on_complete({
            let emitter = emitter.clone();
            let completions = Arc::clone(&completions);
            move || {
                let count = completions.fetch_add(1, Ordering::SeqCst) + 1;
                emitter.send(EventKind::Completed, looping.then_some(count));
            }
        });
        timer.on_cancel({
            let emitter = emitter.clone();
            move || emitter.send(EventKind::Cancelled, None)
        });

        tracing::debug!(timer = %timer.id(), name = %plan.name, "plan added");
        self.entries.push(Entry {
            plan,
            timer,
            cancel,
            completions,
            emitter,
            started_at: None,
            paused: false,
            resumed: false,
        });
    }

    /// Run frames until every plan has finished, reporting events as they
    /// happen. Returns the final state of every timer in plan order.
    pub async fn run(
        mut self,
        pacer: &mut Pacer,
        mut on_event: impl FnMut(&HostEvent),
    ) -> Vec<TimerReport> {
        self.apply_schedule();
        self.drain(&mut on_event);

        while !self.finished() {
            tokio::select! {
                _ = pacer.wait() => {}
                _ = self.shutdown.cancelled() => {}
            }
            self.game.update();
            self.apply_schedule();
            let report = self.scheduler.tick();
            if report.failed > 0 {
                tracing::warn!(failed = report.failed, "frame had failing timers");
            }
            self.drain(&mut on_event);
        }

        tracing::debug!(frames = self.game.frame_count(), "host finished");
        self.reports()
    }

    fn apply_schedule(&mut self) {
        let now = self.now();
        let shutting_down = self.shutdown.is_cancelled();

        for entry in &mut self.entries {
            let started_at = match entry.started_at {
                Some(at) => at,
                None if shutting_down || now < entry.plan.start_after => continue,
                None => {
                    entry.started_at = Some(now);
                    entry.timer.start();
                    now
                }
            };

            if let Some(cycles) = entry.plan.cycles {
                if entry.completions() + 1 >= cycles {
                    entry.timer.looped(false);
                }
            }
            if entry.timer.is_done() {
                continue;
            }

            let since = now - started_at;
            if entry.plan.cancel_after.is_some_and(|after| since >= after) {
                entry.cancel.cancel();
            }
            if let (Some(pause_at), Some(resume_at)) = (entry.plan.pause_at, entry.plan.resume_at())
            {
                if !entry.paused && since >= pause_at {
                    entry.paused = true;
                    entry.timer.pause();
                    entry.emitter.send(EventKind::Paused, None);
                }
                if entry.paused && !entry.resumed && since >= resume_at {
                    entry.resumed = true;
                    entry.timer.resume();
                    entry.emitter.send(EventKind::Resumed, None);
                }
            }
        }
    }

    fn finished(&self) -> bool {
        let shutting_down = self.shutdown.is_cancelled();
        self.entries.iter().all(|entry| match entry.started_at {
            Some(_) => entry.timer.is_done(),
            None => shutting_down,
        })
    }

    fn drain(&mut self, on_event: &mut impl FnMut(&HostEvent)) {
        while let Ok(event) = self.rx.try_recv() {
            on_event(&event);
        }
    }

    fn reports(&self) -> Vec<TimerReport> {
        self.entries
            .iter()
            .map(|entry| TimerReport {
                name: entry.plan.name.clone(),
                completions: entry.completions(),
                snapshot: entry.timer.snapshot(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
