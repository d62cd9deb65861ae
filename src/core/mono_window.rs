use crate::core::model::{EmissivityModel, ModelInputs};
use crate::core::raster::{fill_masked, fill_masked_with};
use crate::types::{EmissivityImage, EmissivityResult, LandCoverClass};
use serde::{Deserialize, Serialize};

/// Mono-window (Avdan) emissivity constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonoWindowParams {
    /// Emissivity assigned to baresoil pixels
    pub emissivity_soil: f64,
    /// Emissivity assigned to vegetation pixels
    pub emissivity_veg: f64,
}

impl Default for MonoWindowParams {
    fn default() -> Self {
        Self {
            emissivity_soil: 0.97,
            emissivity_veg: 0.99,
        }
    }
}

/// NDVI threshold emissivity for the mono-window algorithm.
///
/// Reference: Avdan, U. and Jovanovska, G. "Algorithm for automated mapping
/// of land surface temperature using LANDSAT 8 satellite data."
/// Journal of Sensors (2016).
///
/// Mixed pixels follow `0.004 * ((ndvi - 0.2) / 0.3)^2 + 0.986`. This does
/// not meet the soil or vegetation constants at 0.2 and 0.5; the published
/// method is kept as is.
pub struct MonoWindowEmissivity {
    params: MonoWindowParams,
}

impl MonoWindowEmissivity {
    pub fn new() -> Self {
        Self {
            params: MonoWindowParams::default(),
        }
    }

    pub fn with_params(params: MonoWindowParams) -> Self {
        Self { params }
    }

    /// Emissivity of a mixed pixel
    pub fn mixed_emissivity(ndvi: f64) -> f64 {
        0.004 * ((ndvi - 0.2) / (0.5 - 0.2)).powi(2) + 0.986
    }
}

impl Default for MonoWindowEmissivity {
    fn default() -> Self {
        Self::new()
    }
}

impl EmissivityModel for MonoWindowEmissivity {
    fn name(&self) -> &'static str {
        "avdan"
    }

    fn blend(&self, inputs: &ModelInputs<'_>) -> EmissivityResult<EmissivityImage> {
        log::debug!("Mono-window parameters: {:?}", self.params);

        let masks = inputs.land_cover_masks();
        let mut emissivity = inputs.zeros();

        fill_masked(
            &mut emissivity,
            masks.mask(LandCoverClass::Baresoil),
            self.params.emissivity_soil,
        );
        fill_masked(
            &mut emissivity,
            masks.mask(LandCoverClass::Vegetation),
            self.params.emissivity_veg,
        );
        fill_masked_with(
            &mut emissivity,
            masks.mask(LandCoverClass::Mixed),
            inputs.ndvi(),
            Self::mixed_emissivity,
        );

        Ok(emissivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_class_constants() {
        let ndvi = array![[-1.0, 0.0, 0.19], [0.51, 0.8, 1.0]];
        let result = MonoWindowEmissivity::new().compute(ndvi.view(), None).unwrap();

        assert!(result.row(0).iter().all(|&e| e == 0.97));
        assert!(result.row(1).iter().all(|&e| e == 0.99));
    }

    #[test]
    fn test_mixed_formula_keeps_discontinuity() {
        assert_abs_diff_eq!(MonoWindowEmissivity::mixed_emissivity(0.2), 0.986, epsilon = 1e-12);
        assert_abs_diff_eq!(MonoWindowEmissivity::mixed_emissivity(0.5), 0.990, epsilon = 1e-12);

        let ndvi = array![[0.199999, 0.2]];
        let result = MonoWindowEmissivity::new().compute(ndvi.view(), None).unwrap();
        assert_eq!(result[[0, 0]], 0.97);
        assert_abs_diff_eq!(result[[0, 1]], 0.986, epsilon = 1e-12);
    }

    #[test]
    fn test_red_band_is_ignored() {
        let ndvi = array![[-0.5, 0.3], [0.7, 0.45]];
        let red = array![[0.2, 0.25], [0.1, 0.3]];
        let model = MonoWindowEmissivity::new();

        let with_red = model.compute(ndvi.view(), Some(red.view())).unwrap();
        let without_red = model.compute(ndvi.view(), None).unwrap();
        assert_eq!(with_red, without_red);
    }

    #[test]
    fn test_out_of_range_keeps_zero() {
        let ndvi = array![[1.5, -1.5, f64::NAN]];
        let result = MonoWindowEmissivity::new().compute(ndvi.view(), None).unwrap();

        assert_eq!(result[[0, 0]], 0.0);
        assert_eq!(result[[0, 1]], 0.0);
        assert!(result[[0, 2]].is_nan());
    }

    #[test]
    fn test_custom_params() {
        let params = MonoWindowParams {
            emissivity_soil: 0.96,
            emissivity_veg: 0.985,
        };
        let ndvi = array![[0.0, 0.9]];
        let result = MonoWindowEmissivity::with_params(params)
            .compute(ndvi.view(), None)
            .unwrap();

        assert_eq!(result, array![[0.96, 0.985]]);
    }
}
