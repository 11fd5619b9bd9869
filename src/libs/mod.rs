pub mod attendance;
pub mod config;
pub mod event;
pub mod formatter;
pub mod interval;
pub mod messages;
pub mod report;
pub mod shift;
pub mod snapshot;
pub mod view;
