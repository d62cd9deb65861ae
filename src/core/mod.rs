//! Core emissivity estimation modules

pub mod raster;
pub mod classify;
pub mod vegetation;
pub mod model;
pub mod mono_window;
pub mod nbem;
pub mod gopinadh;
pub mod emissivity;

// Re-export main types
pub use classify::{LandCoverMasks, LandSurfaceClassifier};
pub use vegetation::{
    cavity_effect, fractional_vegetation_cover, CavityEffectParams, VegetationCoverParams,
};
pub use model::{EmissivityModel, ModelInputs};
pub use mono_window::{MonoWindowEmissivity, MonoWindowParams};
pub use nbem::{NbemEmissivity, NbemParams};
pub use gopinadh::{GopinadhEmissivity, GopinadhParams};
pub use emissivity::{
    compute_emissivity, compute_emissivity_dyn, Emissivity, EmissivityConfig, EmissivityMethod,
    EMISSIVITY_METHODS,
};
