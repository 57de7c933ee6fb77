//! 1-D and 2-D Haar transforms
//!
//! The pair transform maps adjacent samples `(a, b)` to the average
//! `(a+b)/√2` and difference `(a−b)/√2`. One forward pass packs the
//! averages into the first half of the active window and the differences
//! into the second half; the full transform repeats over the shrinking
//! average prefix until a single sample remains. The transforms assume a
//! power-of-two length and perform no clamping: callers stay in f64
//! until the very end of the compression pipeline.

use std::f64::consts::SQRT_2;

/// One forward averaging/differencing pass over the first `len` samples.
fn forward_pass(samples: &mut [f64], len: usize) {
    let half = len / 2;
    let mut packed = vec![0.0f64; len];
    for k in (0..len).step_by(2) {
        let a = samples[k];
        let b = samples[k + 1];
        packed[k / 2] = (a + b) / SQRT_2;
        packed[k / 2 + half] = (a - b) / SQRT_2;
    }
    samples[..len].copy_from_slice(&packed);
}

/// One inverse pass reconstructing `2 * n` samples from `n` averages and
/// `n` differences.
fn inverse_pass(samples: &mut [f64], n: usize) {
    let mut unpacked = vec![0.0f64; 2 * n];
    for k in 0..n {
        let avg = samples[k];
        let diff = samples[n + k];
        unpacked[2 * k] = (avg + diff) / SQRT_2;
        unpacked[2 * k + 1] = (avg - diff) / SQRT_2;
    }
    samples[..2 * n].copy_from_slice(&unpacked);
}

/// Full 1-D forward transform of a power-of-two-length signal.
pub fn forward_1d(samples: &mut [f64]) {
    let mut n = samples.len();
    while n > 1 {
        forward_pass(samples, n);
        n /= 2;
    }
}

/// Full 1-D inverse transform of a power-of-two-length signal.
pub fn inverse_1d(samples: &mut [f64]) {
    let mut n = 1;
    while n < samples.len() {
        inverse_pass(samples, n);
        n *= 2;
    }
}

/// 2-D forward transform: every row fully, then every column fully.
pub fn forward_2d(grid: &mut [Vec<f64>]) {
    let side = grid.len();
    for row in grid.iter_mut() {
        forward_1d(row);
    }
    let mut column = vec![0.0f64; side];
    for x in 0..side {
        for (y, row) in grid.iter().enumerate() {
            column[y] = row[x];
        }
        forward_1d(&mut column);
        for (y, row) in grid.iter_mut().enumerate() {
            row[x] = column[y];
        }
    }
}

/// 2-D inverse transform: every column fully, then every row fully.
pub fn inverse_2d(grid: &mut [Vec<f64>]) {
    let side = grid.len();
    let mut column = vec![0.0f64; side];
    for x in 0..side {
        for (y, row) in grid.iter().enumerate() {
            column[y] = row[x];
        }
        inverse_1d(&mut column);
        for (y, row) in grid.iter_mut().enumerate() {
            row[x] = column[y];
        }
    }
    for row in grid.iter_mut() {
        inverse_1d(row);
    }
}
