//! Bounded fan-out log shared by every chat subscriber.
//!
//! Producers append through [`SharedLog::push`]; each subscriber owns a
//! [`Cursor`] and drains the log with [`catch_up`] whenever its
//! [`Notifier`] wakes it. Eviction is oldest-first and never blocks a reader.

mod catch_up;
mod catch_up_report;
mod chat_log;
mod cursor;
mod entry;
mod error;
mod log_capacity;
mod log_stats;
mod notifier;
mod push_outcome;
mod shared_log;
mod signal;
mod transport;

pub use catch_up::catch_up;
pub use catch_up_report::CatchUpReport;
pub use chat_log::{ChatLog, HEAD_SEQ};
pub use cursor::Cursor;
pub use entry::Entry;
pub use error::{LogError, Result};
pub use log_capacity::LogCapacity;
pub use log_stats::LogStats;
pub use notifier::Notifier;
pub use push_outcome::PushOutcome;
pub use shared_log::SharedLog;
pub use signal::Signal;
pub use transport::Transport;

#[cfg(test)]
mod tests;

pub const DEFAULT_BYTE_CAPACITY: usize = 1 << 16;
pub const DEFAULT_ENTRY_CAPACITY: usize = 1000;
