//! Per-engine request construction.
//!
//! Each module builds the request URL for one suggestion endpoint. The
//! shared GET and decode steps live in [`crate::http`] and
//! [`crate::envelope`].

pub mod daum;
pub mod naver;
