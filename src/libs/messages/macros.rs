//! Convenient macros for application messaging and logging.
//!
//! In debug mode (`WORKLOG_DEBUG` or `RUST_LOG` set) messages are routed
//! through `tracing` for structured logging; otherwise they go straight to
//! the console.

/// Displays a general message.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Displays an informational message with an ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $crate::libs::messages::info($msg));
        }
    };
}

/// Displays an error message with an ❌ prefix.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::debug_mode() {
            tracing::error!("{}", $msg);
        } else {
            eprintln!("{}", $crate::libs::messages::error($msg));
        }
    };
}
