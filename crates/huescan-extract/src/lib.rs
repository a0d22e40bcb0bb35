//! # huescan-extract: color literals out of arbitrary text
//!
//! Finds hex, `rgb()`, `hsl()` and `oklch()` literals in any text, reduces
//! each one to a canonical key, drops visually identical repeats, and
//! renders the survivors in any of thirteen target notations.
//!
//! # Architecture
//!
//! ```text
//! text (or a batch of texts)
//!     │
//!     ▼
//! matcher.rs:  one left-to-right regex pass, typed raw captures
//!     │
//!     ▼
//! parse.rs:    range-checked ColorValue, or a silently dropped candidate
//!     │
//!     ▼
//! extract.rs:  canonical key per color, order-preserving dedup
//!     │
//!     ├──▶ order.rs:   hue seed + greedy nearest-neighbor walk (swatch layout)
//!     │
//!     ▼
//! format.rs:   hex / rgb / hsl / hwb / lab / lch / oklab / oklch / platform strings
//! ```
//!
//! The math lives in `huescan-space`; nothing here holds mutable state
//! beyond a single call, so separate inputs can be processed on separate
//! threads with no coordination.
//!
//! # Examples
//!
//! ```
//! use huescan_extract::{TargetFormat, convert, extract};
//!
//! let colors = extract("a { color: #FF5733 } b { color: rgb(255, 87, 51) }");
//! assert_eq!(colors.len(), 1);
//! assert_eq!(colors[0].canonical_key(), "#FF5733");
//! assert_eq!(convert(&colors[0], TargetFormat::Rgb), "rgb(255, 87, 51)");
//! ```

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod extract;
pub mod format;
pub mod matcher;
pub mod notation;
pub mod order;
pub mod parse;

pub use error::{FormatError, ParseError};
pub use extract::{Deduplicator, ExtractedColor, Extractor, SourceSpan, extract, extract_all};
pub use format::{TargetFormat, convert};
pub use matcher::Matcher;
pub use notation::{ColorNotation, ColorValue};
pub use order::order_for_layout;
