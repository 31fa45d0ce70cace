#[derive(Debug, Clone)]
pub enum Message {
    // === MONITOR MESSAGES ===
    TrackingStarted,
    MonitorStarted {
        idle_threshold: u64,
        poll_interval: u64,
    },
    MonitorStopped,
    StopKeyPressed,
    ListenerFailed(String),

    // === EVENT MESSAGES ===
    EventRecorded(i64, String, String, String), // id, timestamp, event type, details
    EventPersistFailed(String),
    EventMirrorFailed(String),
    EventStoreOpenFailed(String),
    NoEventsRecorded,
    EventsTitle(String), // date

    // === IDLE MESSAGES ===
    IdleRecorded {
        from: String,
        to: String,
        minutes: String,
    },
    FinalIdleRecorded {
        from: String,
        to: String,
    },
    IdlePersistFailed(String),
    NoIdleIntervalsFound,
    IdleTitle,

    // === ANALYZE MESSAGES ===
    AnnotatedEventsSaved(String),    // path
    IdleSummarySaved(String),        // path
    TimestampParseFailed(i64, String), // event id, cause

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportingAllData,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleMonitor,
    PromptMoveThreshold,
    PromptLogInterval,
    PromptClickDebounce,
    PromptScrollThreshold,
    PromptIdleThreshold,
    PromptPollInterval,

    // === GENERIC MESSAGES ===
    InvalidDate(String),
}
