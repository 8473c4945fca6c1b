//! # tagmint
//!
//! A Rust library for generating AprilTag fiducial markers from the official
//! tag36h11 family (all 587 codes). Markers render to PNG-ready greyscale
//! bitmaps, print-to-scale SVG, and vector PDF, individually or as labeled
//! calibration grids.
//!
//! ## Features
//!
//! - **Official tag36h11 codes**: the full 587-entry family, looked up by id
//! - **Square or disc styles**: standard square tags, or disc-cropped tags
//!   with a circular silhouette
//! - **Three backends**: raster bitmap, SVG markup, and paginated vector PDF,
//!   all derived from one shared cell geometry
//! - **Physical sizing**: pixel, or physical length + DPI, with the
//!   payload-span/full-span ratio resolved in one place
//! - **Grid layouts**: row-major arrays with uniform spacing and per-tag id
//!   labels, for calibration boards
//!
//! ## Quick Start
//!
//! ### Single marker
//!
//! ```rust
//! use tagmint::TagBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tag = TagBuilder::new(42)
//!     .size_px(400)   // payload+border span; the white margin is added on top
//!     .build()?;
//!
//! let img = tag.to_image();           // 500x500 greyscale bitmap
//! let svg = tag.to_svg();             // print-to-scale vector markup
//! # Ok(())
//! # }
//! ```
//!
//! ### Physical sizing for print
//!
//! ```rust
//! use tagmint::{RenderStyle, TagBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tag = TagBuilder::new(7)
//!     .physical(10.0, 300)            // 10cm at 300 DPI
//!     .style(RenderStyle::Disc)
//!     .full_size(true)                // 10cm includes the white margin
//!     .build()?;
//!
//! # #[cfg(feature = "pdf")]
//! let pdf_bytes = tag.to_pdf()?;      // page sized exactly 10cm x 10cm
//! # Ok(())
//! # }
//! ```
//!
//! ### Calibration board
//!
//! ```rust
//! use tagmint::ArrayBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let board = ArrayBuilder::new(0, 3, 4)  // ids 0..12, 3 rows x 4 cols
//!     .tag_size(200)
//!     .spacing(50)
//!     .labels(true)
//!     .build()?;
//!
//! let composed = board.to_image();
//! assert!(composed.skipped.is_empty()); // out-of-domain ids are skipped, not fatal
//! # Ok(())
//! # }
//! ```
//!
//! ## Scope
//!
//! This crate only generates markers; it contains no detector. DPI metadata
//! on a saved PNG is the caller's save-time concern. Label text is drawn
//! where the backend has a native text primitive (SVG, PDF); the raster
//! backend reserves the label band but does not rasterize glyphs.

pub mod batch;
pub mod builder;
pub(crate) mod codes;
pub mod error;
pub mod family;
pub mod geometry;
pub mod layout;
pub mod pattern;
pub mod render;
pub mod units;

pub use builder::{ArrayBuilder, Tag, TagArray, TagBuilder};
pub use error::{TagError, TagResult};
pub use family::{CodeTable, Tag36h11};
pub use geometry::RenderStyle;
pub use layout::{Composed, LayoutSpec};
pub use pattern::{BitMatrix, CanonicalGrid};
