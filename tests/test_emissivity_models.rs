use approx::assert_abs_diff_eq;
use ndarray::{array, Array2};
use surface_emissivity::core::vegetation::{
    cavity_effect_pixel, fvc_pixel, CavityEffectParams, VegetationCoverParams,
};
use surface_emissivity::core::{GopinadhEmissivity, MonoWindowEmissivity, NbemEmissivity};
use surface_emissivity::{
    compute_emissivity, EmissivityError, EmissivityMethod, EmissivityModel, EMISSIVITY_METHODS,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn scenario() -> (Array2<f64>, Array2<f64>) {
    let ndvi = array![[-0.5, 0.3], [0.7, f64::NAN]];
    let red = array![[0.2, 0.25], [0.1, 0.3]];
    (ndvi, red)
}

#[test]
fn test_mono_window_scenario() {
    init_logging();
    let (ndvi, red) = scenario();

    let result = compute_emissivity("avdan", ndvi.view(), Some(red.view())).unwrap();

    assert_eq!(result.dim(), (2, 2));
    assert_eq!(result[[0, 0]], 0.97);
    assert_abs_diff_eq!(
        result[[0, 1]],
        0.004 * ((0.3 - 0.2) / 0.3_f64).powi(2) + 0.986,
        epsilon = 1e-12
    );
    assert_eq!(result[[1, 0]], 0.99);
    assert!(result[[1, 1]].is_nan());
}

#[test]
fn test_nbem_scenario() {
    init_logging();
    let (ndvi, red) = scenario();
    let fvc_params = VegetationCoverParams::default();
    let cavity_params = CavityEffectParams::default();

    let result = compute_emissivity("xiaolei", ndvi.view(), Some(red.view())).unwrap();

    // baresoil
    assert_abs_diff_eq!(result[[0, 0]], 0.973 - 0.047 * 0.2, epsilon = 1e-12);

    // mixed
    let f = fvc_pixel(0.3, &fvc_params);
    let c = cavity_effect_pixel(f, &cavity_params);
    assert_abs_diff_eq!(result[[0, 1]], 0.9863 * f + 0.9668 * (1.0 - f) + c, epsilon = 1e-12);

    // vegetation
    let f = fvc_pixel(0.7, &fvc_params);
    let c = cavity_effect_pixel(f, &cavity_params);
    assert_abs_diff_eq!(result[[1, 0]], 0.9863 + c, epsilon = 1e-12);

    assert!(result[[1, 1]].is_nan());
}

#[test]
fn test_gopinadh_scenario() {
    init_logging();
    let (ndvi, red) = scenario();
    let params = VegetationCoverParams::default();

    let result = compute_emissivity("gopinadh", ndvi.view(), Some(red.view())).unwrap();

    for ((i, j), &v) in ndvi.indexed_iter() {
        if v.is_nan() {
            assert!(result[[i, j]].is_nan());
        } else {
            let f = fvc_pixel(v, &params);
            assert_abs_diff_eq!(result[[i, j]], 0.9668 * (1.0 - f) + 0.9747 * f, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_nan_mask_fidelity_for_every_method() {
    init_logging();
    let (rows, cols) = (17, 23);
    let ndvi = Array2::from_shape_fn((rows, cols), |(i, j)| {
        if (i * cols + j) % 7 == 0 {
            f64::NAN
        } else {
            -1.0 + 2.0 * ((i * cols + j) as f64) / ((rows * cols) as f64)
        }
    });
    let red = Array2::from_shape_fn((rows, cols), |(i, j)| 0.05 + 0.001 * (i + j) as f64);

    for method in EMISSIVITY_METHODS {
        let result = compute_emissivity(method, ndvi.view(), Some(red.view())).unwrap();
        assert_eq!(result.dim(), ndvi.dim());

        for (&e, &v) in result.iter().zip(ndvi.iter()) {
            assert_eq!(e.is_nan(), v.is_nan(), "method {} at NDVI {}", method, v);
            if !v.is_nan() {
                assert!(e > 0.9 && e <= 1.0, "method {} gave {} at NDVI {}", method, e, v);
            }
        }
    }
}

#[test]
fn test_dispatcher_matches_direct_invocation() {
    let (ndvi, red) = scenario();

    let pairs: Vec<(EmissivityMethod, Box<dyn EmissivityModel>)> = vec![
        (EmissivityMethod::Avdan, Box::new(MonoWindowEmissivity::new())),
        (EmissivityMethod::Xiaolei, Box::new(NbemEmissivity::new())),
        (EmissivityMethod::Gopinadh, Box::new(GopinadhEmissivity::new())),
    ];

    for (method, model) in pairs {
        let dispatched = compute_emissivity(method.name(), ndvi.view(), Some(red.view())).unwrap();
        let direct = model.compute(ndvi.view(), Some(red.view())).unwrap();

        for (a, b) in dispatched.iter().zip(direct.iter()) {
            assert!(a == b || (a.is_nan() && b.is_nan()));
        }
    }
}

#[test]
fn test_unknown_method() {
    let (ndvi, _) = scenario();

    let err = compute_emissivity("unknown", ndvi.view(), None).unwrap_err();
    assert!(matches!(err, EmissivityError::UnknownMethod { .. }));
}

#[test]
fn test_nbem_requires_red_band() {
    let (ndvi, _) = scenario();

    let err = compute_emissivity("xiaolei", ndvi.view(), None).unwrap_err();
    assert!(matches!(err, EmissivityError::MissingInput { .. }));
}

#[test]
fn test_shape_mismatch_is_not_broadcast() {
    let ndvi = Array2::<f64>::from_elem((3, 3), 0.3);
    let red = Array2::<f64>::from_elem((3, 4), 0.1);

    for method in EMISSIVITY_METHODS {
        let err = compute_emissivity(method, ndvi.view(), Some(red.view())).unwrap_err();
        assert_eq!(
            err,
            EmissivityError::ShapeMismatch {
                ndvi: vec![3, 3],
                red_band: vec![3, 4]
            }
        );
    }
}
