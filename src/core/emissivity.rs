use crate::core::gopinadh::{GopinadhEmissivity, GopinadhParams};
use crate::core::model::{EmissivityModel, ModelInputs};
use crate::core::mono_window::{MonoWindowEmissivity, MonoWindowParams};
use crate::core::nbem::{NbemEmissivity, NbemParams};
use crate::types::{EmissivityError, EmissivityImage, EmissivityResult};
use ndarray::{ArrayView2, ArrayViewD};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Names accepted by the dispatcher
pub const EMISSIVITY_METHODS: [&str; 3] = ["avdan", "xiaolei", "gopinadh"];

/// Available emissivity methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmissivityMethod {
    /// Mono-window NDVI threshold method
    Avdan,
    /// NBEM mixture with cavity effect, needs the red band
    Xiaolei,
    /// Split-window FVC blend
    Gopinadh,
}

impl EmissivityMethod {
    pub const ALL: [EmissivityMethod; 3] = [
        EmissivityMethod::Avdan,
        EmissivityMethod::Xiaolei,
        EmissivityMethod::Gopinadh,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EmissivityMethod::Avdan => "avdan",
            EmissivityMethod::Xiaolei => "xiaolei",
            EmissivityMethod::Gopinadh => "gopinadh",
        }
    }

    pub fn requires_red_band(&self) -> bool {
        matches!(self, EmissivityMethod::Xiaolei)
    }
}

impl std::fmt::Display for EmissivityMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for EmissivityMethod {
    type Err = EmissivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "avdan" => Ok(EmissivityMethod::Avdan),
            "xiaolei" => Ok(EmissivityMethod::Xiaolei),
            "gopinadh" => Ok(EmissivityMethod::Gopinadh),
            _ => Err(EmissivityError::UnknownMethod {
                name: s.to_string(),
                valid: EMISSIVITY_METHODS.to_vec(),
            }),
        }
    }
}

/// Parameters for every emissivity method
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissivityConfig {
    pub mono_window: MonoWindowParams,
    pub nbem: NbemParams,
    pub gopinadh: GopinadhParams,
}

impl EmissivityConfig {
    /// Model implementing `method` with these parameters
    pub fn model(&self, method: EmissivityMethod) -> Box<dyn EmissivityModel> {
        match method {
            EmissivityMethod::Avdan => {
                Box::new(MonoWindowEmissivity::with_params(self.mono_window.clone()))
            }
            EmissivityMethod::Xiaolei => Box::new(NbemEmissivity::with_params(self.nbem.clone())),
            EmissivityMethod::Gopinadh => {
                Box::new(GopinadhEmissivity::with_params(self.gopinadh.clone()))
            }
        }
    }
}

/// NDVI (and optional red band) ready to be turned into emissivity
pub struct Emissivity<'a> {
    ndvi: ArrayView2<'a, f64>,
    red_band: Option<ArrayView2<'a, f64>>,
    config: EmissivityConfig,
}

impl<'a> Emissivity<'a> {
    pub fn new(ndvi: ArrayView2<'a, f64>, red_band: Option<ArrayView2<'a, f64>>) -> Self {
        Self {
            ndvi,
            red_band,
            config: EmissivityConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EmissivityConfig) -> Self {
        self.config = config;
        self
    }

    pub fn compute(&self, method: EmissivityMethod) -> EmissivityResult<EmissivityImage> {
        log::info!("Dispatching emissivity method '{}'", method);
        self.config.model(method).compute(self.ndvi, self.red_band)
    }

    pub fn compute_by_name(&self, method: &str) -> EmissivityResult<EmissivityImage> {
        self.compute(method.parse()?)
    }
}

/// Compute emissivity with the method named `method`, using default parameters
pub fn compute_emissivity<'a>(
    method: &str,
    ndvi: ArrayView2<'a, f64>,
    red_band: Option<ArrayView2<'a, f64>>,
) -> EmissivityResult<EmissivityImage> {
    Emissivity::new(ndvi, red_band).compute_by_name(method)
}

/// As [`compute_emissivity`], for rasters whose dimensionality is only known at runtime
pub fn compute_emissivity_dyn<'a>(
    method: &str,
    ndvi: ArrayViewD<'a, f64>,
    red_band: Option<ArrayViewD<'a, f64>>,
    config: &EmissivityConfig,
) -> EmissivityResult<EmissivityImage> {
    let method: EmissivityMethod = method.parse()?;
    let inputs = ModelInputs::from_dyn(ndvi, red_band)?;

    config.model(method).run(&inputs)
}
