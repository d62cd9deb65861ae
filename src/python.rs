//! Python bindings

use crate::core::vegetation::{
    cavity_effect, fractional_vegetation_cover, CavityEffectParams, VegetationCoverParams,
};
use crate::core::{compute_emissivity_dyn, Emissivity, EmissivityConfig, ModelInputs, EMISSIVITY_METHODS};
use crate::types::EmissivityError;
use ndarray::Array2;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2, PyReadonlyArrayDyn};
use pyo3::exceptions::{PyNotImplementedError, PyValueError};
use pyo3::prelude::*;

impl From<EmissivityError> for PyErr {
    fn from(err: EmissivityError) -> Self {
        match &err {
            EmissivityError::Unimplemented { .. } => PyNotImplementedError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Python module definition
#[pymodule]
fn _emissivity(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_compute_emissivity, m)?)?;
    m.add_function(wrap_pyfunction!(py_fractional_vegetation_cover, m)?)?;
    m.add_function(wrap_pyfunction!(py_cavity_effect, m)?)?;
    m.add_class::<PyEmissivity>()?;
    m.add("EMISSIVITY_METHODS", EMISSIVITY_METHODS.to_vec())?;
    Ok(())
}

/// Compute emissivity from NDVI (and the red band for 'xiaolei')
#[pyfunction]
#[pyo3(name = "compute_emissivity", signature = (ndvi, method, red_band=None))]
fn py_compute_emissivity<'py>(
    py: Python<'py>,
    ndvi: PyReadonlyArrayDyn<'py, f64>,
    method: &str,
    red_band: Option<PyReadonlyArrayDyn<'py, f64>>,
) -> PyResult<&'py PyArray2<f64>> {
    let emissivity = compute_emissivity_dyn(
        method,
        ndvi.as_array(),
        red_band.as_ref().map(|r| r.as_array()),
        &EmissivityConfig::default(),
    )?;
    Ok(emissivity.into_pyarray(py))
}

#[pyfunction]
#[pyo3(name = "fractional_vegetation_cover")]
fn py_fractional_vegetation_cover<'py>(
    py: Python<'py>,
    ndvi: PyReadonlyArray2<'py, f64>,
) -> &'py PyArray2<f64> {
    fractional_vegetation_cover(&ndvi.as_array(), &VegetationCoverParams::default()).into_pyarray(py)
}

#[pyfunction]
#[pyo3(name = "cavity_effect")]
fn py_cavity_effect<'py>(py: Python<'py>, fvc: PyReadonlyArray2<'py, f64>) -> &'py PyArray2<f64> {
    cavity_effect(&fvc.as_array(), &CavityEffectParams::default()).into_pyarray(py)
}

/// Python wrapper holding NDVI and the optional red band, called with a method name
#[pyclass(name = "Emissivity")]
struct PyEmissivity {
    ndvi: Array2<f64>,
    red_band: Option<Array2<f64>>,
}

#[pymethods]
impl PyEmissivity {
    #[new]
    #[pyo3(signature = (ndvi, red_band=None))]
    fn new(
        ndvi: PyReadonlyArrayDyn<'_, f64>,
        red_band: Option<PyReadonlyArrayDyn<'_, f64>>,
    ) -> PyResult<Self> {
        let inputs = ModelInputs::from_dyn(ndvi.as_array(), red_band.as_ref().map(|r| r.as_array()))?;

        Ok(PyEmissivity {
            ndvi: inputs.ndvi().to_owned(),
            red_band: inputs.red_band().map(|r| r.to_owned()),
        })
    }

    fn __call__<'py>(&self, py: Python<'py>, method: &str) -> PyResult<&'py PyArray2<f64>> {
        let emissivity = Emissivity::new(self.ndvi.view(), self.red_band.as_ref().map(|r| r.view()))
            .compute_by_name(method)?;
        Ok(emissivity.into_pyarray(py))
    }

    #[getter]
    fn shape(&self) -> (usize, usize) {
        self.ndvi.dim()
    }

    fn __repr__(&self) -> String {
        let (rows, cols) = self.ndvi.dim();
        format!(
            "Emissivity(shape=({}, {}), red_band={})",
            rows,
            cols,
            self.red_band.is_some()
        )
    }
}
