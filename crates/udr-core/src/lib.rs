//! udr-core: usage data record parsing core.
//!
//! This crate exposes the three pipeline layers as public modules, plus the
//! shared types and configuration used across them.
//!
//! # Architecture
//!
//! ```text
//! raw line ──► Dispatcher ──► Format handler ──► Normalizer ──► UsageRecord
//!                 │              (hex, extended,
//!                 │               default)
//!                 └──► DispatchError (whole line rejected)
//! ```
//!
//! Every layer is synchronous and stateless; handlers are zero-sized
//! statics shared by all callers.

pub mod config;
pub mod dispatch;
pub mod formats;
pub mod normalizer;
pub mod types;

pub use dispatch::{classify_and_split, dispatch, dispatch_bytes, DispatchError, SplitLine};
pub use formats::FormatHandler;
pub use normalizer::normalize;
pub use types::{FormatKind, RawFields, RawValue, UsageRecord};
