//! Display implementation for amon application messages.
//!
//! Converts structured `Message` values into the human-readable text shown in
//! the terminal. All user-facing message text lives here, so wording can be
//! adjusted in one place without touching call sites.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === MONITOR MESSAGES ===
            Message::TrackingStarted => "🟢 Activity tracking started. Press any key to stop.".to_string(),
            Message::MonitorStarted { idle_threshold, poll_interval } => {
                format!("Monitor started (idle threshold: {}s, poll interval: {}ms)", idle_threshold, poll_interval)
            }
            Message::MonitorStopped => "Monitor stopped".to_string(),
            Message::StopKeyPressed => "Key pressed. Stopping tracking.".to_string(),
            Message::ListenerFailed(e) => format!("Failed to listen for input events: {}. Retrying in 1 second...", e),

            // === EVENT MESSAGES ===
            Message::EventRecorded(id, timestamp, event_type, details) => {
                format!("Logged: {}, {}, {}, {}", id, timestamp, event_type, details)
            }
            Message::EventPersistFailed(e) => format!("Failed to persist event: {}", e),
            Message::EventMirrorFailed(e) => format!("Failed to mirror event to CSV: {}", e),
            Message::EventStoreOpenFailed(e) => format!("Failed to open event store: {}", e),
            Message::NoEventsRecorded => "No events recorded".to_string(),
            Message::EventsTitle(date) => format!("Events for {}", date),

            // === IDLE MESSAGES ===
            Message::IdleRecorded { from, to, minutes } => {
                format!("Idle period recorded from {} to {}, duration {} minutes", from, to, minutes)
            }
            Message::FinalIdleRecorded { from, to } => format!("📥 Final idle period saved from {} to {}", from, to),
            Message::IdlePersistFailed(e) => format!("Failed to persist idle interval: {}", e),
            Message::NoIdleIntervalsFound => "No idle intervals found".to_string(),
            Message::IdleTitle => "Idle intervals".to_string(),

            // === ANALYZE MESSAGES ===
            Message::AnnotatedEventsSaved(path) => format!("Idle time analysis saved to {}", path),
            Message::IdleSummarySaved(path) => format!("📊 Daily idle summary saved to: {}", path),
            Message::TimestampParseFailed(id, cause) => {
                format!("Skipping idle computation for event {}: invalid timestamp ({})", id, cause)
            }

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),
            Message::ExportingAllData => "Exporting all data...".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleMonitor => "Monitor configuration".to_string(),
            Message::PromptMoveThreshold => "Pointer movement threshold in pixels".to_string(),
            Message::PromptLogInterval => "Minimum interval between recorded movements in seconds".to_string(),
            Message::PromptClickDebounce => "Minimum interval between recorded clicks in seconds".to_string(),
            Message::PromptScrollThreshold => "Scroll delta threshold".to_string(),
            Message::PromptIdleThreshold => "Inactivity threshold in seconds before a gap counts as idle".to_string(),
            Message::PromptPollInterval => "Stop-flag poll interval in milliseconds".to_string(),

            // === GENERIC MESSAGES ===
            Message::InvalidDate(date) => format!("Invalid date: {} (expected YYYY-MM-DD)", date),
        };
        write!(f, "{}", text)
    }
}
