use crate::types::{LandCoverClass, PixelMask};
use ndarray::ArrayView2;

/// Lower NDVI bound of the baresoil class (inclusive)
pub const NDVI_MIN: f64 = -1.0;
/// Upper NDVI bound of the vegetation class (inclusive)
pub const NDVI_MAX: f64 = 1.0;
/// Baresoil/mixed boundary; 0.2 itself is mixed
pub const NDVI_SOIL_THRESHOLD: f64 = 0.2;
/// Mixed/vegetation boundary; 0.5 itself is mixed
pub const NDVI_VEGETATION_THRESHOLD: f64 = 0.5;

impl LandCoverClass {
    /// Classify a single NDVI value. NaN and values outside [-1, 1] have no class.
    pub fn from_ndvi(ndvi: f64) -> Option<Self> {
        if (NDVI_MIN..NDVI_SOIL_THRESHOLD).contains(&ndvi) {
            Some(LandCoverClass::Baresoil)
        } else if ndvi > NDVI_VEGETATION_THRESHOLD && ndvi <= NDVI_MAX {
            Some(LandCoverClass::Vegetation)
        } else if (NDVI_SOIL_THRESHOLD..=NDVI_VEGETATION_THRESHOLD).contains(&ndvi) {
            Some(LandCoverClass::Mixed)
        } else {
            None
        }
    }

    fn contains(&self, ndvi: f64) -> bool {
        LandCoverClass::from_ndvi(ndvi) == Some(*self)
    }
}

/// Non-overlapping land-cover masks over an NDVI raster
#[derive(Debug, Clone)]
pub struct LandCoverMasks {
    pub baresoil: PixelMask,
    pub vegetation: PixelMask,
    pub mixed: PixelMask,
}

impl LandCoverMasks {
    /// Mask for a single class
    pub fn mask(&self, class: LandCoverClass) -> &PixelMask {
        match class {
            LandCoverClass::Baresoil => &self.baresoil,
            LandCoverClass::Vegetation => &self.vegetation,
            LandCoverClass::Mixed => &self.mixed,
        }
    }

    /// (row, col) coordinates of every pixel in `class`, in row-major order
    pub fn indices(&self, class: LandCoverClass) -> Vec<(usize, usize)> {
        self.mask(class)
            .indexed_iter()
            .filter(|&(_, &selected)| selected)
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of pixels in `class`
    pub fn count(&self, class: LandCoverClass) -> usize {
        self.mask(class).iter().filter(|&&selected| selected).count()
    }

    /// Number of pixels belonging to no class (NaN or NDVI outside [-1, 1])
    pub fn unclassified_count(&self) -> usize {
        let classified: usize = LandCoverClass::ALL.iter().map(|&c| self.count(c)).sum();
        self.baresoil.len() - classified
    }
}

/// NDVI threshold classifier
pub struct LandSurfaceClassifier;

impl LandSurfaceClassifier {
    /// Partition an NDVI raster into baresoil, vegetation and mixed masks
    pub fn classify(ndvi: &ArrayView2<f64>) -> LandCoverMasks {
        let masks = LandCoverMasks {
            baresoil: ndvi.mapv(|v| LandCoverClass::Baresoil.contains(v)),
            vegetation: ndvi.mapv(|v| LandCoverClass::Vegetation.contains(v)),
            mixed: ndvi.mapv(|v| LandCoverClass::Mixed.contains(v)),
        };

        log::debug!(
            "Land cover: {} baresoil, {} vegetation, {} mixed, {} unclassified",
            masks.count(LandCoverClass::Baresoil),
            masks.count(LandCoverClass::Vegetation),
            masks.count(LandCoverClass::Mixed),
            masks.unclassified_count()
        );

        let out_of_range = Self::out_of_range_count(ndvi);
        if out_of_range > 0 {
            log::warn!(
                "{} non-NaN NDVI pixels outside [{}, {}] are left unclassified",
                out_of_range,
                NDVI_MIN,
                NDVI_MAX
            );
        }

        masks
    }

    /// Number of non-NaN pixels outside the valid NDVI range
    pub fn out_of_range_count(ndvi: &ArrayView2<f64>) -> usize {
        ndvi.iter()
            .filter(|&&v| !v.is_nan() && !(NDVI_MIN..=NDVI_MAX).contains(&v))
            .count()
    }
}
