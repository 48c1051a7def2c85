//! # text_layout
//!
//! Glyph-metric-aware text measurement and line wrapping.
//!
//! This crate turns a string plus font metrics and constraints into measured
//! rows and a block size:
//! - [`FontMetrics`]: the narrow trait a font backend implements; the
//!   engine never sees the backend itself
//! - [`RowCursor`] / [`prefix_advances`]: the incremental metrics
//!   accumulator shared by measurement, wrapping and cursor geometry
//! - [`wrap_text`]: greedy longest-fit row packing under a width limit
//! - [`measure_text`]: the flex-style measure entry point (natural size
//!   plus per-axis [`Constraint`] overrides)
//!
//! Everything here is stateless across calls; callers own any caching of
//! the produced rows.

mod bounds;
mod measure;
mod metrics;
mod style;
mod wrap;

#[cfg(test)]
mod test_support;

pub use bounds::{RowBounds, RowCursor, prefix_advances};
pub use measure::{MeasuredRow, MeasuredText, layout_rows, measure_text};
pub use metrics::{FontMetrics, GlyphBounds, ITALIC_SHEAR, ScaledMetrics};
pub use style::{Constraint, TextStyle, WrapMode};
