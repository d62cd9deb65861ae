//! Land-surface emissivity from NDVI and red-band reflectance rasters.
//!
//! Emissivity feeds land-surface temperature retrieval from thermal bands.
//! Three methods are provided:
//!
//! - `avdan`: mono-window NDVI thresholds
//! - `xiaolei`: NBEM mixture with cavity-effect correction (needs the red band)
//! - `gopinadh`: split-window fractional vegetation cover blend
//!
//! Rasters are dense in-memory `ndarray` arrays; NaN marks missing NDVI and
//! is carried through to the output.

pub mod types;
pub mod core;

#[cfg(feature = "python")]
mod python;

// Re-export main types and functions for easier access
pub use crate::types::{
    EmissivityError, EmissivityImage, EmissivityResult, LandCoverClass, NdviImage, RedBandImage,
};

pub use crate::core::{
    compute_emissivity, compute_emissivity_dyn, Emissivity, EmissivityConfig, EmissivityMethod,
    EmissivityModel, EMISSIVITY_METHODS,
};
