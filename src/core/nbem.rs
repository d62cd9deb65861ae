use crate::core::model::{EmissivityModel, ModelInputs};
use crate::core::raster::{fill_masked_with, fill_masked_with2};
use crate::core::vegetation::{CavityEffectParams, VegetationCoverParams};
use crate::types::{EmissivityImage, EmissivityResult, LandCoverClass};
use serde::{Deserialize, Serialize};

/// NBEM mixture emissivity parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NbemParams {
    /// Soil emissivity used in the mixed-pixel blend
    pub emissivity_soil: f64,
    /// Vegetation emissivity
    pub emissivity_veg: f64,
    /// Baresoil intercept of the red-band regression
    pub soil_intercept: f64,
    /// Baresoil slope of the red-band regression
    pub soil_red_slope: f64,
    /// Geometrical factor of the cavity effect
    pub geometrical_factor: f64,
    pub vegetation_cover: VegetationCoverParams,
}

impl NbemParams {
    /// Cavity effect parameters built from this model's emissivities
    pub fn cavity_params(&self) -> CavityEffectParams {
        CavityEffectParams {
            emissivity_soil: self.emissivity_soil,
            emissivity_veg: self.emissivity_veg,
            geometrical_factor: self.geometrical_factor,
        }
    }
}

impl Default for NbemParams {
    fn default() -> Self {
        Self {
            emissivity_soil: 0.9668,
            emissivity_veg: 0.9863,
            soil_intercept: 0.973,
            soil_red_slope: 0.047,
            geometrical_factor: CavityEffectParams::default().geometrical_factor,
            vegetation_cover: VegetationCoverParams::default(),
        }
    }
}

/// NDVI-based emissivity method (NBEM) with cavity-effect correction.
///
/// References:
/// 1. Li, T. and Meng, Q. "A mixture emissivity analysis method for urban
///    land surface temperature retrieval from Landsat 8 data."
///    Landscape and Urban Planning 179 (2018): 63-71.
/// 2. Yu, X., Guo, X. and Wu, Z. "Land surface temperature retrieval from
///    Landsat 8 TIRS." Remote Sensing 6.10 (2014): 9829-9852.
///
/// Requires the red band (0.63-0.69 micrometers).
pub struct NbemEmissivity {
    params: NbemParams,
}

impl NbemEmissivity {
    pub fn new() -> Self {
        Self {
            params: NbemParams::default(),
        }
    }

    pub fn with_params(params: NbemParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &NbemParams {
        &self.params
    }
}

impl Default for NbemEmissivity {
    fn default() -> Self {
        Self::new()
    }
}

impl EmissivityModel for NbemEmissivity {
    fn name(&self) -> &'static str {
        "xiaolei"
    }

    fn requires_red_band(&self) -> bool {
        true
    }

    fn blend(&self, inputs: &ModelInputs<'_>) -> EmissivityResult<EmissivityImage> {
        let red_band = inputs.require_red_band(self.name())?;
        log::debug!("NBEM parameters: {:?}", self.params);

        let masks = inputs.land_cover_masks();
        // Shared by the mixed and vegetation branches
        let fvc = inputs.fractional_vegetation_cover(&self.params.vegetation_cover);
        let cavity = inputs.cavity_effect(&fvc, &self.params.cavity_params());

        let p = &self.params;
        let mut emissivity = inputs.zeros();

        fill_masked_with(
            &mut emissivity,
            masks.mask(LandCoverClass::Baresoil),
            red_band,
            |red| p.soil_intercept - p.soil_red_slope * red,
        );
        fill_masked_with2(
            &mut emissivity,
            masks.mask(LandCoverClass::Mixed),
            &fvc.view(),
            &cavity.view(),
            |f, c| p.emissivity_veg * f + p.emissivity_soil * (1.0 - f) + c,
        );
        fill_masked_with(
            &mut emissivity,
            masks.mask(LandCoverClass::Vegetation),
            &cavity.view(),
            |c| p.emissivity_veg + c,
        );

        Ok(emissivity)
    }
}
