//! Reference kernels against independent direct implementations.
//!
//! Each candidate here computes the same operation the slow, obvious way in
//! `f64` (a full 2D window instead of separable passes, a plain counting
//! loop, and so on) and is compared through the validator with the task's
//! default tolerance.

use pixref_core::{padded_vector_size, Restriction};
use pixref_ops::blur::{blur, build_gaussian};
use pixref_ops::color_matrix::{color_matrix, GREYSCALE};
use pixref_ops::convolve::convolve;
use pixref_ops::histogram::histogram;
use pixref_validate::random::{random_floats, random_image};
use pixref_validate::{validate_task, Task};

use crate::init_tracing;

fn clamped(v: i64, size: usize) -> usize {
    v.clamp(0, size as i64 - 1) as usize
}

fn round_byte(v: f64) -> u8 {
    (v + 0.5).clamp(0.0, 255.0) as u8
}

/// Full 2D window of `weights(dx, dy)` with clamped reads, byte-range math.
fn direct_window(
    input: &[u8],
    padded: usize,
    size_x: usize,
    size_y: usize,
    radius: i64,
    weights: impl Fn(i64, i64) -> f64,
) -> Vec<u8> {
    let mut out = vec![0u8; input.len()];
    for y in 0..size_y {
        for x in 0..size_x {
            for c in 0..padded {
                let mut sum = 0.0f64;
                for dy in -radius..=radius {
                    for dx in -radius..=radius {
                        let sx = clamped(x as i64 + dx, size_x);
                        let sy = clamped(y as i64 + dy, size_y);
                        sum += input[(sy * size_x + sx) * padded + c] as f64 * weights(dx, dy);
                    }
                }
                out[(y * size_x + x) * padded + c] = round_byte(sum);
            }
        }
    }
    out
}

#[test]
fn test_blur_matches_direct_2d() {
    init_tracing();
    for (vector_size, radius) in [(1, 1), (2, 4), (3, 7), (4, 25)] {
        let (sx, sy) = (19, 13);
        let padded = padded_vector_size(vector_size);
        let input = random_image(radius as u64, vector_size, sx, sy).unwrap();
        let reference = blur(&input, vector_size, sx, sy, radius, None).unwrap();

        let g = build_gaussian(radius).unwrap();
        let r = radius as i64;
        let direct = direct_window(&input, padded, sx, sy, r, |dx, dy| {
            g[(dx + r) as usize] as f64 * g[(dy + r) as usize] as f64
        });

        let report = validate_task(Task::Blur, vector_size, &reference, &[("direct", &direct[..])]).unwrap();
        assert!(report.passed(), "radius {radius}\n{report}");
    }
}

#[test]
fn test_restricted_blur_matches_direct_2d() {
    init_tracing();
    let (sx, sy, radius) = (16, 16, 5);
    let input = random_image(99, 4, sx, sy).unwrap();
    let area = Restriction::new(3, 11, 6, 9);
    let reference = blur(&input, 4, sx, sy, radius, Some(&area)).unwrap();

    let g = build_gaussian(radius).unwrap();
    let r = radius as i64;
    let mut direct = direct_window(&input, 4, sx, sy, r, |dx, dy| {
        g[(dx + r) as usize] as f64 * g[(dy + r) as usize] as f64
    });
    for y in 0..sy {
        for x in 0..sx {
            if !area.contains(x, y) {
                let i = (y * sx + x) * 4;
                direct[i..i + 4].fill(0);
            }
        }
    }

    let report = validate_task(Task::Blur, 4, &reference, &[("direct", &direct[..])]).unwrap();
    assert!(report.passed(), "{report}");
}

#[test]
fn test_convolve_matches_direct() {
    init_tracing();
    for (vector_size, count) in [(1, 9), (4, 9), (2, 25), (3, 25)] {
        let (sx, sy) = (11, 8);
        let padded = padded_vector_size(vector_size);
        let input = random_image(count as u64 + vector_size as u64, vector_size, sx, sy).unwrap();
        let coeffs = random_floats(count as u64, count, -0.2, 0.3).unwrap();
        let reference = convolve(&input, vector_size, sx, sy, &coeffs, None).unwrap();

        let r: i64 = if count == 9 { 1 } else { 2 };
        let side = 2 * r + 1;
        let direct = direct_window(&input, padded, sx, sy, r, |dx, dy| {
            coeffs[((dy + r) * side + dx + r) as usize] as f64
        });

        let report = validate_task(Task::Convolve, vector_size, &reference, &[("direct", &direct[..])]).unwrap();
        assert!(report.passed(), "{count} coefficients, vector size {vector_size}\n{report}");
    }
}

#[test]
fn test_histogram_matches_counting_loop() {
    init_tracing();
    for vector_size in 1..=4 {
        let padded = padded_vector_size(vector_size);
        let input = random_image(500 + vector_size as u64, vector_size, 37, 21).unwrap();
        let reference = histogram(&input, vector_size, 37, 21, None).unwrap();

        let mut direct = vec![0u32; 256 * padded];
        for px in input.chunks(padded) {
            for (c, &v) in px.iter().enumerate().take(vector_size) {
                direct[v as usize * padded + c] += 1;
            }
        }

        let report = validate_task(Task::Histogram, vector_size, &reference, &[("direct", &direct[..])]).unwrap();
        assert!(report.passed(), "{report}");
    }
}

#[test]
fn test_greyscale_matrix_matches_luma() {
    init_tracing();
    let input = random_image(4242, 4, 20, 10).unwrap();
    let reference = color_matrix(&input, 4, 20, 10, 4, &GREYSCALE, &[0.0; 4], None).unwrap();

    let direct: Vec<u8> = input
        .chunks(4)
        .flat_map(|px| {
            let luma = 0.299 * px[0] as f64 + 0.587 * px[1] as f64 + 0.114 * px[2] as f64;
            let l = round_byte(luma);
            [l, l, l, px[3]]
        })
        .collect();

    let report = validate_task(Task::ColorMatrix, 4, &reference, &[("direct", &direct[..])]).unwrap();
    assert!(report.passed(), "{report}");
}
