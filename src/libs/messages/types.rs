/// Every user-facing message the application can emit.
///
/// Keeping the full catalog in one enum keeps wording consistent and makes
/// the text trivially greppable; the `msg_*!` macros take care of routing
/// each message to the console or the tracing subscriber.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    PromptServerHost,
    PromptServerPort,

    // === SERVER MESSAGES ===
    ServerStarted(String),
    InvalidBindAddress(String),
    StoreLoaded(usize),

    // === TASK MESSAGES ===
    TasksHeader,
    TasksNotFound,

    // === EXPORT MESSAGES ===
    TasksExportedTo(String),

    // === ERROR MESSAGES ===
    UnexpectedError(String),
}
