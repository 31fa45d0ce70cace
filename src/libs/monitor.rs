//! Live activity monitoring session.
//!
//! A session runs from monitor start until the first key press. Raw input
//! notifications arrive on the capture thread and are pushed through the
//! threshold filter, the recorder, and the idle detector under a single
//! mutex, so identifier assignment and gap computation always observe the
//! same total order of accepted events. The coordination loop only polls the
//! stop flag with a bounded sleep; it performs no I/O of its own.
//!
//! State machine: `Active` until a key press is recorded, then `Stopping`
//! (capture callbacks become no-ops), then `Stopped` once the idle tail has
//! been flushed.

use crate::libs::config::MonitorConfig;
use crate::libs::event::RawEvent;
use crate::libs::filter::{FilterState, ThresholdFilter};
use crate::libs::formatter::format_minutes;
use crate::libs::idle::IdleDetector;
use crate::libs::messages::Message;
use crate::libs::recorder::EventRecorder;
use crate::libs::summary::IdleSummary;
use crate::{msg_error, msg_print};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use parking_lot::Mutex;
use rdev::{listen, Event, EventType};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::time::{self, Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Stopping,
    Stopped,
}

/// One recording session's mutable state.
///
/// All mutation happens through [`Session::handle`] and [`Session::finish`],
/// which the monitor serializes behind a mutex. The struct is public so
/// tests can drive it with synthetic event sequences without a capture
/// backend.
pub struct Session {
    filter: ThresholdFilter,
    filter_state: FilterState,
    recorder: EventRecorder,
    detector: IdleDetector,
    summary: IdleSummary,
    state: SessionState,
}

impl Session {
    /// Opens the event store and summary sink for a new session.
    ///
    /// An event store that cannot be opened aborts startup; everything later
    /// is recoverable.
    pub fn new(config: &MonitorConfig) -> Result<Self> {
        Ok(Self {
            filter: ThresholdFilter::new(config),
            filter_state: FilterState::default(),
            recorder: EventRecorder::new()?,
            detector: IdleDetector::new(config.idle_threshold),
            summary: IdleSummary::new()?,
            state: SessionState::Active,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Identifier of the most recently recorded event.
    pub fn last_id(&self) -> Option<i64> {
        self.recorder.last_id()
    }

    /// Processes one raw notification.
    ///
    /// No-ops unless the session is `Active`. A key press is recorded like
    /// any other accepted event and then moves the session to `Stopping`,
    /// whether or not the record itself persisted.
    pub fn handle(&mut self, event: RawEvent, now: NaiveDateTime) {
        if self.state != SessionState::Active {
            return;
        }
        let is_stop_trigger = matches!(event, RawEvent::KeyPress { .. });

        if let Some(accepted) = self.filter.apply(&mut self.filter_state, &event, now) {
            match self.recorder.record(accepted.kind, &accepted.details, now) {
                Ok(id) => {
                    msg_print!(Message::EventRecorded(
                        id,
                        now.format(crate::libs::event::TIMESTAMP_FORMAT).to_string(),
                        accepted.kind.to_string(),
                        accepted.details.clone()
                    ));
                    if let Some(interval) = self.detector.observe(now) {
                        let from = interval.from.format("%H:%M:%S").to_string();
                        let to = interval.to.format("%H:%M:%S").to_string();
                        match self.summary.append(&interval) {
                            Ok(()) => msg_print!(Message::IdleRecorded {
                                from,
                                to,
                                minutes: format_minutes(interval.minutes),
                            }),
                            Err(e) => msg_error!(Message::IdlePersistFailed(e.to_string())),
                        }
                    }
                }
                Err(e) => msg_error!(Message::EventPersistFailed(e.to_string())),
            }
        }

        if is_stop_trigger {
            msg_print!(Message::StopKeyPressed);
            self.state = SessionState::Stopping;
        }
    }

    /// Flushes the idle tail and moves the session to `Stopped`.
    ///
    /// When the gap between the last recorded event and `now` exceeds the
    /// idle threshold, one final interval is written. Idempotent.
    pub fn finish(&mut self, now: NaiveDateTime) {
        if self.state == SessionState::Stopped {
            return;
        }
        if let Some(interval) = self.detector.tail(now) {
            let from = interval.from.format("%H:%M:%S").to_string();
            let to = interval.to.format("%H:%M:%S").to_string();
            match self.summary.append(&interval) {
                Ok(()) => msg_print!(Message::FinalIdleRecorded { from, to }),
                Err(e) => msg_error!(Message::IdlePersistFailed(e.to_string())),
            }
        }
        self.state = SessionState::Stopped;
    }
}

/// Drives a [`Session`] from live input capture.
pub struct Monitor {
    session: Arc<Mutex<Session>>,
    stop: Arc<AtomicBool>,
    idle_threshold: u64,
    poll_interval: u64,
}

impl Monitor {
    pub fn new(config: MonitorConfig) -> Result<Self> {
        let session = Arc::new(Mutex::new(Session::new(&config)?));
        Ok(Monitor {
            session,
            stop: Arc::new(AtomicBool::new(false)),
            idle_threshold: config.idle_threshold,
            poll_interval: config.poll_interval,
        })
    }

    /// Runs the session until a key press stops it.
    ///
    /// Input capture happens on a dedicated thread; the capture hook is
    /// blocking and is torn down with the process after the session ends.
    /// This task waits on the stop flag with a bounded sleep and then
    /// flushes the idle tail.
    pub async fn run(&mut self) -> Result<()> {
        msg_print!(Message::MonitorStarted {
            idle_threshold: self.idle_threshold,
            poll_interval: self.poll_interval,
        });

        let shared_session = self.session.clone();
        let shared_stop = self.stop.clone();
        std::thread::spawn(move || {
            loop {
                let session = shared_session.clone();
                let stop = shared_stop.clone();
                // Click and scroll notifications carry no coordinates of
                // their own; the last observed pointer position stands in.
                let mut cursor: Option<(f64, f64)> = None;
                let result = listen(move |event: Event| {
                    if stop.load(Ordering::SeqCst) {
                        return;
                    }
                    let raw = match event.event_type {
                        EventType::MouseMove { x, y } => {
                            cursor = Some((x, y));
                            Some(RawEvent::Move { x, y })
                        }
                        EventType::ButtonPress(button) => {
                            let (x, y) = cursor.unwrap_or((0.0, 0.0));
                            Some(RawEvent::Click { x, y, button, pressed: true })
                        }
                        EventType::ButtonRelease(button) => {
                            let (x, y) = cursor.unwrap_or((0.0, 0.0));
                            Some(RawEvent::Click { x, y, button, pressed: false })
                        }
                        EventType::Wheel { delta_x, delta_y } => {
                            let (x, y) = cursor.unwrap_or((0.0, 0.0));
                            Some(RawEvent::Scroll {
                                x,
                                y,
                                dx: delta_x,
                                dy: delta_y,
                            })
                        }
                        EventType::KeyPress(key) => Some(RawEvent::KeyPress { key }),
                        _ => None,
                    };
                    if let Some(raw) = raw {
                        let now = Local::now().naive_local();
                        let mut session = session.lock();
                        session.handle(raw, now);
                        if session.state() != SessionState::Active {
                            stop.store(true, Ordering::SeqCst);
                        }
                    }
                });

                match result {
                    Err(e) => {
                        msg_error!(Message::ListenerFailed(format!("{:?}", e)));
                        std::thread::sleep(std::time::Duration::from_secs(1));
                    }
                    // listen only returns without error when the hook is torn down.
                    Ok(()) => break,
                }
                if shared_stop.load(Ordering::SeqCst) {
                    break;
                }
            }
        });

        while !self.stop.load(Ordering::SeqCst) {
            time::sleep(Duration::from_millis(self.poll_interval)).await;
        }

        self.session.lock().finish(Local::now().naive_local());
        msg_print!(Message::MonitorStopped);
        Ok(())
    }
}
