//! glint: retained-mode text widgets and the engines underneath them.
//!
//! This crate is the umbrella over the workspace members and re-exports
//! them wholesale. Depend on the members directly when you only need one
//! layer:
//!
//! - [`edit_core`]: single-line text editing (cursor, selection, viewport),
//!   no UI or font types.
//! - [`text_layout`]: glyph-metric-aware measurement and wrapping behind
//!   the [`text_layout::FontMetrics`] trait.
//! - [`fonts`]: the fontdue-backed [`text_layout::FontMetrics`] provider.
//! - [`widgets`]: the `EditLine` and `Label` widgets that tie the engines
//!   to host-supplied input events and draw lists.

pub use edit_core;
pub use fonts;
pub use text_layout;
pub use widgets;
