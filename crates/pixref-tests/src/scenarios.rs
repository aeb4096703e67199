//! Fixed-input scenarios across crates.

use pixref_core::{padded_vector_size, Dimension, Restriction, Rgba3dArray};
use pixref_lut::{lut, lut3d, LookupTable};
use pixref_ops::blend::{blend, BlendMode};
use pixref_ops::blur::blur;
use pixref_ops::histogram::{histogram, histogram_dot};
use pixref_ops::resize::resize;
use pixref_ops::yuv::{yuv_buffer_size, yuv_to_rgb, YuvFormat};
use pixref_validate::random::{random_cube, random_image, random_yuv};
use pixref_validate::{validate, validate_task, Task, ValidationConfig, ValidationReport};

use crate::init_tracing;

#[test]
fn test_blur_uniform_3x4() {
    init_tracing();
    let input = vec![128u8; 3 * 4 * 4];
    let out = blur(&input, 4, 3, 4, 1, None).unwrap();
    assert_eq!(out.len(), 3 * 4 * 4);
    assert_eq!(out, input);
}

#[test]
fn test_nv21_white() {
    init_tracing();
    let len = yuv_buffer_size(YuvFormat::Nv21, 4, 2).unwrap();
    let mut input = vec![235u8; len];
    input[4 * 2..].fill(128);
    let out = yuv_to_rgb(&input, 4, 2, YuvFormat::Nv21, None).unwrap();
    let white = vec![255u8; 4 * 2 * 4];
    let report = validate_task(Task::YuvToRgb, 4, &white, &[("reference", &out[..])]).unwrap();
    assert!(report.passed(), "{report}");
}

#[test]
fn test_yuv_random_shapes() {
    init_tracing();
    for format in [YuvFormat::Nv21, YuvFormat::Yv12] {
        for (sx, sy) in [(2, 1), (16, 9), (34, 7), (64, 32)] {
            let input = random_yuv(5, format, sx, sy).unwrap();
            let out = yuv_to_rgb(&input, sx, sy, format, None).unwrap();
            assert_eq!(out.len(), sx * sy * 4);
            assert!(out.chunks(4).all(|px| px[3] == 255), "{format} {sx}x{sy}");
        }
    }
}

#[test]
fn test_identity_lut_exact() {
    init_tracing();
    let input = random_image(17, 4, 23, 11).unwrap();
    let out = lut(&input, 23, 11, &LookupTable::identity(), None).unwrap();
    let report = validate("lut", &input, &[("reference", &out[..])], &ValidationConfig::exact()).unwrap();
    assert!(report.passed(), "{report}");
}

#[test]
fn test_identity_lut3d_within_one() {
    init_tracing();
    let input = random_image(23, 4, 31, 9).unwrap();
    for (x, y, z) in [(2, 2, 2), (3, 5, 7), (17, 17, 17), (33, 2, 9)] {
        let cube = Rgba3dArray::identity(Dimension::new(x, y, z).unwrap());
        let out = lut3d(&input, 31, 9, &cube, None).unwrap();
        let rgb = ValidationConfig::exact().with_allowed_delta(1).with_skip_alpha(true);
        let report = validate("lut3d", &input, &[("identity", &out[..])], &rgb).unwrap();
        assert!(report.passed(), "cube {x}x{y}x{z}\n{report}");
        for (a, b) in out.chunks(4).zip(input.chunks(4)) {
            assert_eq!(a[3], b[3]);
        }
    }
}

#[test]
fn test_lut3d_random_cube_alpha_passthrough() {
    init_tracing();
    let input = random_image(3, 4, 8, 8).unwrap();
    let cube = random_cube(4, Dimension::new(5, 6, 7).unwrap()).unwrap();
    let out = lut3d(&input, 8, 8, &cube, None).unwrap();
    for (a, b) in out.chunks(4).zip(input.chunks(4)) {
        assert_eq!(a[3], b[3]);
    }
}

#[test]
fn test_resize_unit_scale() {
    init_tracing();
    for vector_size in 1..=4 {
        let input = random_image(31, vector_size, 13, 7).unwrap();
        let out = resize(&input, vector_size, 13, 7, 13, 7, None).unwrap();
        let config = ValidationConfig::for_vector_size(vector_size).with_allowed_delta(1);
        let report = validate("resize", &input, &[("reference", &out[..])], &config).unwrap();
        assert!(report.passed(), "vector size {vector_size}\n{report}");
    }
}

#[test]
fn test_histogram_sums() {
    init_tracing();
    let restriction = Restriction::new(2, 9, 1, 5);
    for vector_size in 1..=4 {
        let padded = padded_vector_size(vector_size);
        let input = random_image(vector_size as u64, vector_size, 10, 6).unwrap();
        for r in [None, Some(&restriction)] {
            let expected = r.map_or(60, |r| r.cell_count()) as u32;
            let counts = histogram(&input, vector_size, 10, 6, r).unwrap();
            for c in 0..vector_size {
                let total: u32 = (0..256).map(|v| counts[v * padded + c]).sum();
                assert_eq!(total, expected);
            }
            let dot = histogram_dot(&input, vector_size, 10, 6, None, r).unwrap();
            assert_eq!(dot.iter().sum::<u32>(), expected);
        }
    }
}

#[test]
fn test_blend_dst_and_clear() {
    init_tracing();
    let source = random_image(1, 4, 9, 9).unwrap();
    let destination = random_image(2, 4, 9, 9).unwrap();

    let mut out = destination.clone();
    blend(BlendMode::Dst, &source, &mut out, 9, 9, None).unwrap();
    assert_eq!(out, destination);

    let mut out = destination.clone();
    blend(BlendMode::Clear, &source, &mut out, 9, 9, None).unwrap();
    assert!(out.iter().all(|&b| b == 0));
}

#[test]
fn test_every_blend_mode_respects_restriction() {
    init_tracing();
    let source = random_image(8, 4, 6, 5).unwrap();
    let destination = random_image(9, 4, 6, 5).unwrap();
    let r = Restriction::new(1, 5, 2, 4);
    for mode in BlendMode::ALL {
        let mut out = destination.clone();
        blend(mode, &source, &mut out, 6, 5, Some(&r)).unwrap();
        for y in 0..5 {
            for x in 0..6 {
                if !r.contains(x, y) {
                    let i = (y * 6 + x) * 4;
                    assert_eq!(&out[i..i + 4], &destination[i..i + 4], "{mode} at ({x}, {y})");
                }
            }
        }
    }
}

#[test]
fn test_validator_self_compare_and_size_mismatch() {
    init_tracing();
    let data = random_image(77, 3, 12, 12).unwrap();
    let report = validate_task(Task::Convolve, 3, &data, &[("toolkit", &data[..]), ("intrinsic", &data[..])]).unwrap();
    assert!(report.passed());
    assert!(report.candidates.iter().all(|c| c.mismatch_count == 0));

    let short = &data[..data.len() - 4];
    let err = validate_task(Task::Convolve, 3, &data, &[("toolkit", &data[..]), ("intrinsic", short)]).unwrap_err();
    assert!(err.is_size_mismatch());
}

#[test]
fn test_report_serializes() {
    init_tracing();
    let reference = vec![10u8; 16];
    let mut candidate = reference.clone();
    candidate[5] = 90;
    let report = validate("blend", &reference, &[("toolkit", &candidate[..])], &Task::Blend.default_config()).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"first_mismatch\""));
    let back: ValidationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
    assert_eq!(back.candidates[0].first_mismatch.map(|m| m.index), Some(5));

    let r = Restriction::new(0, 2, 1, 3);
    let r_json = serde_json::to_string(&r).unwrap();
    assert_eq!(serde_json::from_str::<Restriction>(&r_json).unwrap(), r);
}
