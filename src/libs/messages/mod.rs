pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether message macros should route through `tracing` instead of the
/// console. Detected once from `WORKLOG_DEBUG` or `RUST_LOG`.
pub fn debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("WORKLOG_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

// Convenience functions for common message patterns
pub fn error(msg: Message) -> String {
    format!("❌ {}", msg)
}

pub fn info(msg: Message) -> String {
    format!("ℹ️  {}", msg)
}

pub fn wrap_msg(msg: Message) -> String {
    format!("\n{}\n", msg)
}
