use crate::core::classify::NDVI_SOIL_THRESHOLD;
use crate::core::raster::map_pixels;
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

/// NDVI at which fractional vegetation cover saturates
pub const NDVI_FULL_CANOPY: f64 = 0.8;

/// NDVI endpoints for the fractional vegetation cover transform.
///
/// The canopy endpoint sits above the 0.5 vegetation class threshold, so
/// vegetation pixels below full canopy keep a non-zero cavity effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VegetationCoverParams {
    /// NDVI of fully bare soil (FVC = 0 at and below)
    pub ndvi_soil: f64,
    /// NDVI of full canopy (FVC = 1 at and above)
    pub ndvi_vegetation: f64,
}

impl Default for VegetationCoverParams {
    fn default() -> Self {
        Self {
            ndvi_soil: NDVI_SOIL_THRESHOLD,
            ndvi_vegetation: NDVI_FULL_CANOPY,
        }
    }
}

/// Cavity effect parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CavityEffectParams {
    /// Soil emissivity
    pub emissivity_soil: f64,
    /// Vegetation emissivity
    pub emissivity_veg: f64,
    /// Shape factor of the surface geometry, 0.55 for mixed canopies
    pub geometrical_factor: f64,
}

impl Default for CavityEffectParams {
    fn default() -> Self {
        Self {
            emissivity_soil: 0.9668,
            emissivity_veg: 0.9863,
            geometrical_factor: 0.55,
        }
    }
}

/// Fractional vegetation cover of a single NDVI value.
///
/// Scaled NDVI is clamped to [0, 1] before squaring, so the result saturates
/// at both endpoints and stays monotonic outside [-1, 1]. NaN propagates.
pub fn fvc_pixel(ndvi: f64, params: &VegetationCoverParams) -> f64 {
    let scaled = (ndvi - params.ndvi_soil) / (params.ndvi_vegetation - params.ndvi_soil);
    scaled.clamp(0.0, 1.0).powi(2)
}

/// Cavity effect of a single FVC value
pub fn cavity_effect_pixel(fvc: f64, params: &CavityEffectParams) -> f64 {
    (1.0 - params.emissivity_soil)
        * params.emissivity_veg
        * params.geometrical_factor
        * (1.0 - fvc)
}

/// Compute the fractional vegetation cover raster from NDVI
pub fn fractional_vegetation_cover(
    ndvi: &ArrayView2<f64>,
    params: &VegetationCoverParams,
) -> Array2<f64> {
    log::debug!("Computing fractional vegetation cover: {:?}", params);
    map_pixels(ndvi, |v| fvc_pixel(v, params))
}

/// Compute the cavity effect raster from fractional vegetation cover
pub fn cavity_effect(fvc: &ArrayView2<f64>, params: &CavityEffectParams) -> Array2<f64> {
    log::debug!("Computing cavity effect: {:?}", params);
    map_pixels(fvc, |f| cavity_effect_pixel(f, params))
}
