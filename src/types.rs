use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// NDVI raster, nominally in [-1, 1], NaN where data is missing
pub type NdviImage = Array2<f64>;

/// Red-band reflectance raster (0.63-0.69 micrometers)
pub type RedBandImage = Array2<f64>;

/// Land-surface emissivity raster
pub type EmissivityImage = Array2<f64>;

/// Boolean pixel mask
pub type PixelMask = Array2<bool>;

/// Land-cover classes derived from NDVI thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandCoverClass {
    /// -1 <= NDVI < 0.2
    Baresoil,
    /// 0.5 < NDVI <= 1
    Vegetation,
    /// 0.2 <= NDVI <= 0.5
    Mixed,
}

impl LandCoverClass {
    pub const ALL: [LandCoverClass; 3] = [
        LandCoverClass::Baresoil,
        LandCoverClass::Vegetation,
        LandCoverClass::Mixed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LandCoverClass::Baresoil => "baresoil",
            LandCoverClass::Vegetation => "vegetation",
            LandCoverClass::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for LandCoverClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error types for emissivity computation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmissivityError {
    #[error("Input must be a single band image with two dimensions only, got shape {shape:?}")]
    InvalidShape { shape: Vec<usize> },

    #[error("Input images (NDVI and red band) must be of equal dimension: NDVI {ndvi:?}, red band {red_band:?}")]
    ShapeMismatch {
        ndvi: Vec<usize>,
        red_band: Vec<usize>,
    },

    #[error("Missing input: {model} emissivity requires a {input}")]
    MissingInput {
        model: &'static str,
        input: &'static str,
    },

    #[error("Unknown emissivity method '{name}'. Choose among available methods: {valid:?}")]
    UnknownMethod {
        name: String,
        valid: Vec<&'static str>,
    },

    #[error("No emissivity computation logic implemented for {model}")]
    Unimplemented { model: String },
}

/// Result type for emissivity operations
pub type EmissivityResult<T> = Result<T, EmissivityError>;
