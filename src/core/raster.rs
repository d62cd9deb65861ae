//! Per-pixel raster kernels shared by the emissivity models.
//!
//! With the `parallel` feature enabled the kernels run through
//! `Zip::par_for_each`; otherwise they fall back to `Zip::for_each`.
//! Both paths produce identical output.

use crate::types::PixelMask;
use ndarray::{Array2, ArrayView2, Zip};

/// Apply `f` to every pixel of `image`, producing a new raster of the same shape
pub fn map_pixels<F>(image: &ArrayView2<f64>, f: F) -> Array2<f64>
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    let mut output = Array2::<f64>::zeros(image.raw_dim());
    let zip = Zip::from(&mut output).and(image);

    #[cfg(feature = "parallel")]
    zip.par_for_each(|out, &value| *out = f(value));
    #[cfg(not(feature = "parallel"))]
    zip.for_each(|out, &value| *out = f(value));

    output
}

/// Mask of pixels whose value is NaN
pub fn nan_mask(image: &ArrayView2<f64>) -> PixelMask {
    image.mapv(f64::is_nan)
}

/// Write a constant into every masked pixel
pub fn fill_masked(output: &mut Array2<f64>, mask: &PixelMask, value: f64) {
    let zip = Zip::from(output).and(mask);

    #[cfg(feature = "parallel")]
    zip.par_for_each(|out, &selected| {
        if selected {
            *out = value;
        }
    });
    #[cfg(not(feature = "parallel"))]
    zip.for_each(|out, &selected| {
        if selected {
            *out = value;
        }
    });
}

/// Write `f(source)` into every masked pixel
pub fn fill_masked_with<F>(
    output: &mut Array2<f64>,
    mask: &PixelMask,
    source: &ArrayView2<f64>,
    f: F,
) where
    F: Fn(f64) -> f64 + Sync + Send,
{
    let zip = Zip::from(output).and(mask).and(source);

    #[cfg(feature = "parallel")]
    zip.par_for_each(|out, &selected, &value| {
        if selected {
            *out = f(value);
        }
    });
    #[cfg(not(feature = "parallel"))]
    zip.for_each(|out, &selected, &value| {
        if selected {
            *out = f(value);
        }
    });
}

/// Write `f(first, second)` into every masked pixel
pub fn fill_masked_with2<F>(
    output: &mut Array2<f64>,
    mask: &PixelMask,
    first: &ArrayView2<f64>,
    second: &ArrayView2<f64>,
    f: F,
) where
    F: Fn(f64, f64) -> f64 + Sync + Send,
{
    let zip = Zip::from(output).and(mask).and(first).and(second);

    #[cfg(feature = "parallel")]
    zip.par_for_each(|out, &selected, &a, &b| {
        if selected {
            *out = f(a, b);
        }
    });
    #[cfg(not(feature = "parallel"))]
    zip.for_each(|out, &selected, &a, &b| {
        if selected {
            *out = f(a, b);
        }
    });
}

/// Set every masked pixel to NaN
pub fn overlay_nan(output: &mut Array2<f64>, mask: &PixelMask) {
    fill_masked(output, mask, f64::NAN);
}
