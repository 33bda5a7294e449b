//! End-to-end use of the public API, the way a renderer would use it.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use clg::{interp::*, math::*, *};

#[test]
fn mixture_and_dimension_casts() {
    let v: Vec4<i32> = Vector::mix((1, vec2(2, 3), 4));
    assert_eq!(v, [1, 2, 3, 4]);

    let truncated: Vec2<i32> = v.resize();
    assert_eq!(truncated, vec2(1, 2));
    assert_eq!(truncated.resize::<4>(), vec4(1, 2, 0, 0));

    let m = Mat3x2::<f32>::mix((1.0, vec2(2.0, 3.0), 4.0, [5.0, 6.0]));
    assert_eq!(m.row(0), vec3(1.0, 3.0, 5.0));
    assert_eq!(m.column(2), vec2(5.0, 6.0));
    assert_eq!(bytemuck::cast_slice::<_, f32>(&[m]), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn scenarios() {
    let a = vec3(1.0f32, 2.0, 3.0);
    let b = vec3(4.0, 5.0, 6.0);
    assert_eq!(a.cross(b), vec3(-3.0, 6.0, -3.0));
    assert_eq!(a.dot(b), 32.0);

    let m = Mat2::from_columns([[1, 2], [3, 4]]);
    assert_eq!(m * m, Mat2::from_slice(&[7, 10, 15, 22]));

    let mut n = vec2(3.0f64, 4.0);
    assert_eq!(n.normalize(), 5.0);
    assert_relative_eq!(n, vec2(0.6, 0.8));

    let closed = Rectf::new(0.0, 0.0, 10.0, 10.0);
    assert!(closed.contains(point(10.0, 10.0)));
    let open = Rect::<f32, StandardY, RightOpen>::new(0.0, 0.0, 10.0, 10.0);
    assert!(!open.contains(point(10.0, 10.0)));
}

#[test]
fn camera_pipeline() {
    let projection = perspective_fov_gl(std::f32::consts::FRAC_PI_2, 16.0 / 9.0, 0.1, 100.0);
    let view = translation_3d(vec3(0.0, 0.0, -5.0));
    let model = euler_transform(0.0, 0.0, std::f32::consts::PI) * scaling_3d(vec3(2.0, 2.0, 2.0));
    let mvp = projection * view * model;

    // The origin ends up in the center of the screen, 5 units away from the camera.
    let center = mvp.transform_point(Vec3f::ZERO);
    assert_abs_diff_eq!(center.x(), 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(center.y(), 0.0, epsilon = 1e-6);
    assert!(center.z() > -1.0 && center.z() < 1.0);

    // Upload as raw floats, column by column.
    let raw: &[f32; 16] = bytemuck::cast_ref(&projection);
    assert_eq!(raw[11], -1.0);
    assert_eq!(raw[15], 0.0);
}

#[test]
fn colors_and_interpolation() {
    let from: Rgbaf = vec4(0.0, 0.0, 0.0, 1.0);
    let to: Rgbaf = vec4(1.0, 1.0, 1.0, 1.0);
    let mid = Linear.interpolate(from, to, 0.5);
    assert_eq!(mid.to_rgba32(), 0x7f7f7fff);

    let packed = Rgba8::from_argb32(0x80ff4020);
    assert_eq!((packed.r(), packed.g(), packed.b(), packed.a()), (0xff, 0x40, 0x20, 0x80));
    assert_eq!(packed.to_abgr32(), 0x802040ff);

    assert_eq!(SmoothStep.apply(0.0f32), 0.0);
    assert_eq!(SmoothStep.apply(1.0f32), 1.0);
}

#[test]
fn angles_and_rasters() {
    assert_abs_diff_eq!(to_degrees(clamp_radians(-f64::HALF_PI)), 270.0, epsilon = 1e-9);
    assert_abs_diff_eq!(abs_radial_distance(0.1, f64::TWO_PI - 0.1), 0.2, epsilon = 1e-12);

    let window = Recti::new(10, 10, 100, 50);
    let raster: RasterRecti = to_raster_rect(window, 480);
    assert_eq!(raster.top(), 420);
    assert_eq!(raster.bottom(), 470);
    assert_eq!(from_raster_rect::<i32, _>(raster, 480), window);
}

#[test]
fn fallible_slices() {
    assert_eq!(Vec3::<u8>::try_from_slice(&[1, 2]).ok(), Some(vec3(1, 2, 0)));
    let err = Vec2::<u8>::try_from_slice(&[1, 2, 3]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot create a 2-element vector from a slice of 3 elements"
    );
}
