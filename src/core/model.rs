//! Shared contract of the emissivity models.
//!
//! Every model runs the same sequence: validate the input rasters, blend
//! per-pixel emissivity, then overlay NaN wherever NDVI was NaN. The overlay
//! is unconditional and always last, so it overrides any class-derived value.

use crate::core::classify::{LandCoverMasks, LandSurfaceClassifier};
use crate::core::raster::{nan_mask, overlay_nan};
use crate::core::vegetation::{
    cavity_effect, fractional_vegetation_cover, CavityEffectParams, VegetationCoverParams,
};
use crate::types::{EmissivityError, EmissivityImage, EmissivityResult, PixelMask};
use ndarray::{Array2, ArrayView2, ArrayViewD, Ix2};
use std::cell::OnceCell;

/// Validated inputs of a single model invocation
pub struct ModelInputs<'a> {
    ndvi: ArrayView2<'a, f64>,
    red_band: Option<ArrayView2<'a, f64>>,
    nan_mask: PixelMask,
    land_cover: OnceCell<LandCoverMasks>,
}

impl<'a> ModelInputs<'a> {
    /// Validate NDVI and the optional red band. Shapes must match exactly.
    pub fn new(
        ndvi: ArrayView2<'a, f64>,
        red_band: Option<ArrayView2<'a, f64>>,
    ) -> EmissivityResult<Self> {
        if let Some(red) = &red_band {
            if red.shape() != ndvi.shape() {
                return Err(EmissivityError::ShapeMismatch {
                    ndvi: ndvi.shape().to_vec(),
                    red_band: red.shape().to_vec(),
                });
            }
        }

        let nan_mask = nan_mask(&ndvi);
        Ok(Self {
            ndvi,
            red_band,
            nan_mask,
            land_cover: OnceCell::new(),
        })
    }

    /// Validate dynamically-dimensioned rasters; NDVI must be 2-D
    pub fn from_dyn(
        ndvi: ArrayViewD<'a, f64>,
        red_band: Option<ArrayViewD<'a, f64>>,
    ) -> EmissivityResult<Self> {
        let ndvi_shape = ndvi.shape().to_vec();
        let ndvi = ndvi
            .into_dimensionality::<Ix2>()
            .map_err(|_| EmissivityError::InvalidShape {
                shape: ndvi_shape.clone(),
            })?;

        let red_band = match red_band {
            Some(red) => {
                let red_shape = red.shape().to_vec();
                let red = red.into_dimensionality::<Ix2>().map_err(|_| {
                    EmissivityError::ShapeMismatch {
                        ndvi: ndvi_shape,
                        red_band: red_shape,
                    }
                })?;
                Some(red)
            }
            None => None,
        };

        Self::new(ndvi, red_band)
    }

    pub fn ndvi(&self) -> &ArrayView2<'a, f64> {
        &self.ndvi
    }

    pub fn red_band(&self) -> Option<&ArrayView2<'a, f64>> {
        self.red_band.as_ref()
    }

    /// Red band, or a missing-input error naming `model`
    pub fn require_red_band(&self, model: &'static str) -> EmissivityResult<&ArrayView2<'a, f64>> {
        self.red_band.as_ref().ok_or(EmissivityError::MissingInput {
            model,
            input: "red band",
        })
    }

    pub fn nan_mask(&self) -> &PixelMask {
        &self.nan_mask
    }

    pub fn dim(&self) -> (usize, usize) {
        self.ndvi.dim()
    }

    /// Zero-filled output raster shaped like NDVI
    pub fn zeros(&self) -> EmissivityImage {
        Array2::zeros(self.ndvi.raw_dim())
    }

    /// Land-cover masks, classified on first use
    pub fn land_cover_masks(&self) -> &LandCoverMasks {
        self.land_cover
            .get_or_init(|| LandSurfaceClassifier::classify(&self.ndvi))
    }

    pub fn fractional_vegetation_cover(&self, params: &VegetationCoverParams) -> Array2<f64> {
        fractional_vegetation_cover(&self.ndvi, params)
    }

    pub fn cavity_effect(
        &self,
        fvc: &Array2<f64>,
        params: &CavityEffectParams,
    ) -> Array2<f64> {
        cavity_effect(&fvc.view(), params)
    }
}

/// An emissivity estimation method
pub trait EmissivityModel {
    /// Short method name used in logs and errors
    fn name(&self) -> &'static str;

    /// Whether `blend` needs the red band
    fn requires_red_band(&self) -> bool {
        false
    }

    /// Model-specific blending of per-class emissivity into a raster
    fn blend(&self, _inputs: &ModelInputs<'_>) -> EmissivityResult<EmissivityImage> {
        Err(EmissivityError::Unimplemented {
            model: self.name().to_string(),
        })
    }

    /// Validate inputs, blend, then overlay NaN from the NDVI mask
    fn compute<'a>(
        &self,
        ndvi: ArrayView2<'a, f64>,
        red_band: Option<ArrayView2<'a, f64>>,
    ) -> EmissivityResult<EmissivityImage> {
        let inputs = ModelInputs::new(ndvi, red_band)?;
        self.run(&inputs)
    }

    /// Blend already-validated inputs and finalize the NaN overlay
    fn run(&self, inputs: &ModelInputs<'_>) -> EmissivityResult<EmissivityImage> {
        let (rows, cols) = inputs.dim();
        log::info!("Computing {} emissivity for {}x{} raster", self.name(), rows, cols);

        if self.requires_red_band() {
            inputs.require_red_band(self.name())?;
        }

        let mut emissivity = self.blend(inputs)?;
        overlay_nan(&mut emissivity, inputs.nan_mask());

        log::info!("{} emissivity completed", self.name());
        Ok(emissivity)
    }
}
