//! Zero-padded square moving average.

/// Applies an `size x size` moving average to a row-major `ny x nx` field,
/// treating everything outside the field as zero.
///
/// The window anchored at a cell spans `size / 2` cells behind it and
/// `size - 1 - size / 2` ahead on both axes, so even sizes lean one cell
/// toward lower indices. The divisor is always `size * size` regardless of
/// how much of the window falls outside the field.
pub(crate) fn uniform_filter(field: &[f64], ny: usize, nx: usize, size: usize) -> Vec<f64> {
    debug_assert_eq!(field.len(), ny * nx);
    debug_assert!(size >= 1);

    if size == 1 {
        return field.to_vec();
    }

    // Summed-area table with a zero first row and column, so any clipped
    // window sum is four lookups.
    let mut integral = vec![0.0_f64; (ny + 1) * (nx + 1)];
    for iy in 0..ny {
        let mut row_sum = 0.0;
        for ix in 0..nx {
            row_sum += field[iy * nx + ix];
            integral[(iy + 1) * (nx + 1) + (ix + 1)] = integral[iy * (nx + 1) + (ix + 1)] + row_sum;
        }
    }

    let lo = (size / 2) as isize;
    let hi = (size - 1 - size / 2) as isize;
    let area = (size * size) as f64;

    let mut out = vec![0.0_f64; ny * nx];
    for iy in 0..ny {
        let y0 = (iy as isize - lo).max(0) as usize;
        let y1 = ((iy as isize + hi).min(ny as isize - 1) + 1) as usize;
        for ix in 0..nx {
            let x0 = (ix as isize - lo).max(0) as usize;
            let x1 = ((ix as isize + hi).min(nx as isize - 1) + 1) as usize;
            let sum = integral[y1 * (nx + 1) + x1] - integral[y0 * (nx + 1) + x1]
                - integral[y1 * (nx + 1) + x0]
                + integral[y0 * (nx + 1) + x0];
            out[iy * nx + ix] = sum / area;
        }
    }
    out
}
