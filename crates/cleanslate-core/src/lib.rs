//! # Cleanslate Core Library
//!
//! Core logic for Cleanslate, a personal addiction-recovery tracker. The CLI
//! binary is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Progress Engine**: pure functions turning a start date and a relapse
//!   log into elapsed time, level, badges, savings and report figures. The
//!   caller passes `now` explicitly and may call it on every tick
//! - **Storage**: an [`AddictionStore`] port with SQLite and in-memory
//!   backends, plus TOML-based configuration
//! - **State**: [`AppState`] keeps the loaded records and the store in step
//! - **Chat**: context summary and client for a chat-completions endpoint
//! - **Urgency**: crisis-support copy picked from the addiction's name
//!
//! ## Key Components
//!
//! - [`ProgressSnapshot`]: everything the detail view shows at one instant
//! - [`Database`]: SQLite persistence
//! - [`Config`]: user settings

pub mod addiction;
pub mod chat;
pub mod error;
pub mod progress;
pub mod quotes;
pub mod state;
pub mod storage;
pub mod urgency;

pub use addiction::{
    Addiction, AddictionKind, AddictionPatch, ColorStyle, ColorTag, Losses, NewAddiction,
};
pub use chat::{ChatClient, ChatMessage, ChatRole};
pub use error::{ChatError, ConfigError, CoreError, DatabaseError, ValidationError};
pub use progress::{
    classify_level, compute_elapsed, compute_report_stats, compute_savings, is_relapse_day,
    is_success_day, Elapsed, LevelInfo, ProgressSnapshot, RelapseCalendar, ReportStats, Savings,
};
pub use state::AppState;
pub use storage::{AddictionStore, Config, Currency, Database, MemoryStore};
pub use urgency::{UrgencyContent, UrgencyTopic};
