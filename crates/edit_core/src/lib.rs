//! # edit_core
//!
//! UI-agnostic single-line text editing engine.
//!
//! This crate provides the fundamental building blocks for line editing:
//! - [`LineEditor`]: Buffer, cursor, selection and horizontal scroll state,
//!   mutated through a validated, notice-producing API
//! - [`EditNotice`]: Value-typed change reports returned by every mutation
//! - [`SelectionSpan`]: A canonical `(begin, length)` selection
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any graphics or font stack
//! - Layout or hit-testing systems
//! - Platform-specific APIs
//!
//! It depends only on `std`. Wherever pixels matter (caret hit-testing,
//! viewport scrolling) the caller measures and passes the numbers in, so the
//! editing semantics stay testable without a font in sight.
//!
//! All positions are byte offsets into UTF-8 text. Out-of-range or
//! mid-character offsets clamp to the nearest boundary at or before them
//! instead of failing.

mod editor;
mod notice;
mod selection;
mod text;

pub use editor::{LineEditor, VIEWPORT_THRESHOLD_LEFT, VIEWPORT_THRESHOLD_RIGHT, Validator};
pub use notice::EditNotice;
pub use selection::SelectionSpan;

// Re-export text utilities for integration layers that need caret
// positioning or word navigation against their own measurements.
pub use text::{
    caret_from_x, clamp_to_char_boundary, contains_control, next_char_boundary,
    next_word_position, prev_char_boundary, prev_word_position,
};
