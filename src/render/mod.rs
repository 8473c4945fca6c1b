//! Output backends. All three consume the shared filled-cell geometry from
//! [`crate::geometry`] and are only responsible for coordinate-system mapping
//! and primitive emission.

pub mod pdf;
pub mod raster;
pub mod svg;
