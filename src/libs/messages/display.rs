use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::PromptServerHost => "Host to bind the web interface to".to_string(),
            Message::PromptServerPort => "Port to bind the web interface to".to_string(),

            // === SERVER MESSAGES ===
            Message::ServerStarted(addr) => format!("Task tracker listening on http://{}", addr),
            Message::InvalidBindAddress(addr) => format!("Invalid bind address: {}", addr),
            Message::StoreLoaded(count) => format!("Loaded {} task(s) from the document store", count),

            // === TASK MESSAGES ===
            Message::TasksHeader => "📋 Tasks".to_string(),
            Message::TasksNotFound => "Tasks not found((".to_string(),

            // === EXPORT MESSAGES ===
            Message::TasksExportedTo(path) => format!("Tasks exported to: {}", path),

            // === ERROR MESSAGES ===
            Message::UnexpectedError(err) => format!("Unexpected error: {}", err),
        };
        write!(f, "{}", text)
    }
}
