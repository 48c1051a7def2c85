//! # widgets
//!
//! The host-facing text widgets: event routing, blink, measurement caches
//! and draw-list emission.
//!
//! - [`EditLine`]: single-line text input over `edit_core`
//! - [`Label`]: static wrapped text over `text_layout`
//! - [`InputEvent`] / [`EventOutcome`]: the closed event set and what
//!   routing one event produced
//! - [`DrawCmd`]: the primitives a host forwards to its renderer
//!
//! The host keeps geometry, focus management and flex negotiation; widgets
//! only see local pixel coordinates, a [`FontMetrics`] provider and the
//! events the host routes in.
//!
//! [`FontMetrics`]: text_layout::FontMetrics

mod blink;
mod draw;
mod edit_line;
mod event;
mod label;

pub use blink::CursorBlink;
pub use draw::{Color, DrawCmd, Rect};
pub use edit_line::EditLine;
pub use event::{EventOutcome, InputEvent, Key, Modifiers, PointerButton, PointerButtons};
pub use label::Label;
