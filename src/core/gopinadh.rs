use crate::core::model::{EmissivityModel, ModelInputs};
use crate::core::raster::map_pixels;
use crate::core::vegetation::VegetationCoverParams;
use crate::types::{EmissivityImage, EmissivityResult};
use serde::{Deserialize, Serialize};

/// Split-window (Gopinadh) emissivity parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GopinadhParams {
    pub emissivity_soil: f64,
    pub emissivity_veg: f64,
    pub vegetation_cover: VegetationCoverParams,
}

impl Default for GopinadhParams {
    fn default() -> Self {
        Self {
            emissivity_soil: 0.9668,
            emissivity_veg: 0.9747,
            vegetation_cover: VegetationCoverParams::default(),
        }
    }
}

/// FVC-weighted soil/vegetation blend applied to every pixel, no classification.
///
/// Reference: Rongali, G. et al. "Split-window algorithm for retrieval of
/// land surface temperature using Landsat 8 thermal infrared data."
/// Journal of Geovisualization and Spatial Analysis 2.2 (2018): 1-19.
pub struct GopinadhEmissivity {
    params: GopinadhParams,
}

impl GopinadhEmissivity {
    pub fn new() -> Self {
        Self {
            params: GopinadhParams::default(),
        }
    }

    pub fn with_params(params: GopinadhParams) -> Self {
        Self { params }
    }
}

impl Default for GopinadhEmissivity {
    fn default() -> Self {
        Self::new()
    }
}

impl EmissivityModel for GopinadhEmissivity {
    fn name(&self) -> &'static str {
        "gopinadh"
    }

    fn blend(&self, inputs: &ModelInputs<'_>) -> EmissivityResult<EmissivityImage> {
        log::debug!("Gopinadh parameters: {:?}", self.params);

        let fvc = inputs.fractional_vegetation_cover(&self.params.vegetation_cover);
        let soil = self.params.emissivity_soil;
        let veg = self.params.emissivity_veg;

        Ok(map_pixels(&fvc.view(), |f| soil * (1.0 - f) + veg * f))
    }
}
