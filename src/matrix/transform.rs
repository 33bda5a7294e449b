//! Builders for common transformation and projection matrices.
//!
//! All matrices are meant to be multiplied with column vectors from the right (`m * v`), and their
//! flat column-major storage matches what OpenGL and Direct3D expect. Points use homogeneous
//! coordinates, so 2D transforms are [`Mat3`]s and 3D transforms are [`Mat4`]s.

use crate::{Float, Mat3, Mat4, Matrix, One, Vector, Zero};

/// Creates a 2D translation matrix.
///
/// The offset is stored in the last column, at cells `(2, 0)` and `(2, 1)`, so that it moves
/// points with a homogeneous `1` in their last element. In column 1 it would be scaled by the
/// point's y coordinate instead.
///
/// # Examples
///
/// ```
/// # use clg::*;
/// let m = translation_2d(vec2(3.0, -1.0));
/// assert_eq!(m * vec3(1.0, 1.0, 1.0), vec3(4.0, 0.0, 1.0));
/// ```
pub fn translation_2d<T: Zero + One + Copy>(translation: Vector<T, 2>) -> Mat3<T> {
    let mut result = Mat3::identity();
    for (i, t) in translation.into_iter().enumerate() {
        result[(2, i)] = t;
    }
    result
}

/// Creates a 3D translation matrix.
pub fn translation_3d<T: Zero + One + Copy>(translation: Vector<T, 3>) -> Mat4<T> {
    let mut result = Mat4::identity();
    for (i, t) in translation.into_iter().enumerate() {
        result[(3, i)] = t;
    }
    result
}

/// Creates a 2D rotation matrix, rotating counter-clockwise by `radians` about the origin.
pub fn rotation_2d<T: Float>(radians: T) -> Mat3<T> {
    let (s, c) = (radians.sin(), radians.cos());
    let mut result = Mat3::identity();
    result[(0, 0)] = c;
    result[(1, 0)] = -s;
    result[(0, 1)] = s;
    result[(1, 1)] = c;
    result
}

/// Creates a 3D rotation matrix about the X axis.
pub fn rotation_x<T: Float>(radians: T) -> Mat4<T> {
    let (s, c) = (radians.sin(), radians.cos());
    let mut result = Mat4::identity();
    result[(1, 1)] = c;
    result[(2, 1)] = -s;
    result[(1, 2)] = s;
    result[(2, 2)] = c;
    result
}

/// Creates a 3D rotation matrix about the Y axis.
pub fn rotation_y<T: Float>(radians: T) -> Mat4<T> {
    let (s, c) = (radians.sin(), radians.cos());
    let mut result = Mat4::identity();
    result[(0, 0)] = c;
    result[(2, 0)] = s;
    result[(0, 2)] = -s;
    result[(2, 2)] = c;
    result
}

/// Creates a 3D rotation matrix about the Z axis.
pub fn rotation_z<T: Float>(radians: T) -> Mat4<T> {
    let (s, c) = (radians.sin(), radians.cos());
    let mut result = Mat4::identity();
    result[(0, 0)] = c;
    result[(1, 0)] = -s;
    result[(0, 1)] = s;
    result[(1, 1)] = c;
    result
}

/// Creates a 2D scaling matrix.
pub fn scaling_2d<T: Zero + One + Copy>(scale: Vector<T, 2>) -> Mat3<T> {
    Mat3::from_diagonal(scale.extend(T::ONE))
}

/// Creates a 3D scaling matrix.
pub fn scaling_3d<T: Zero + One + Copy>(scale: Vector<T, 3>) -> Mat4<T> {
    Mat4::from_diagonal(scale.extend(T::ONE))
}

/// Reflects 2D points across the X axis (negates Y).
pub fn reflection_about_x<T: Float>() -> Mat3<T> {
    let mut result = Mat3::identity();
    result[(1, 1)] = -T::ONE;
    result
}

/// Reflects 2D points across the Y axis (negates X).
pub fn reflection_about_y<T: Float>() -> Mat3<T> {
    let mut result = Mat3::identity();
    result[(0, 0)] = -T::ONE;
    result
}

/// Reflects 2D points across the line `y = x` (swaps X and Y).
///
/// The homogeneous coordinate is dropped, so the result is only meaningful for directions.
pub fn reflection_about_xy_line<T: Float>() -> Mat3<T> {
    let mut result = Mat3::ZERO;
    result[(0, 1)] = T::ONE;
    result[(1, 0)] = T::ONE;
    result
}

/// Reflects 2D points across the line `y = -x`.
///
/// The homogeneous coordinate is dropped, so the result is only meaningful for directions.
pub fn reflection_about_negative_xy_line<T: Float>() -> Mat3<T> {
    let mut result = Mat3::ZERO;
    result[(0, 1)] = -T::ONE;
    result[(1, 0)] = -T::ONE;
    result
}

/// Reflects 2D points through the origin.
pub fn reflection_about_origin<T: Float>() -> Mat3<T> {
    let mut result = Mat3::identity();
    result[(0, 0)] = -T::ONE;
    result[(1, 1)] = -T::ONE;
    result
}

macro_rules! shear {
    ($( $(#[$attr:meta])* $name:ident -> $mat:ident ($col:literal, $row:literal); )+) => {
        $(
            $(#[$attr])*
            pub fn $name<T: Zero + One + Copy>(shear: T) -> $mat<T> {
                let mut result = $mat::identity();
                result[($col, $row)] = shear;
                result
            }
        )+
    };
}

shear! {
    /// Shears 2D points along X, proportional to their Y coordinate.
    shear_x -> Mat3 (1, 0);
    /// Shears 2D points along Y, proportional to their X coordinate.
    shear_y -> Mat3 (0, 1);
    /// Shears 3D points along X, proportional to Y.
    shear_xy -> Mat4 (1, 0);
    /// Shears 3D points along X, proportional to Z.
    shear_xz -> Mat4 (2, 0);
    /// Shears 3D points along Y, proportional to X.
    shear_yx -> Mat4 (0, 1);
    /// Shears 3D points along Y, proportional to Z.
    shear_yz -> Mat4 (2, 1);
    /// Shears 3D points along Z, proportional to X.
    shear_zx -> Mat4 (0, 2);
    /// Shears 3D points along Z, proportional to Y.
    shear_zy -> Mat4 (1, 2);
}

/// Composes a rotation from heading (about Y), pitch (about X) and roll (about Z).
///
/// The result is `rotation_z(roll) * rotation_x(pitch) * rotation_y(heading)`, so heading is
/// applied first.
pub fn euler_transform<T: Float>(heading: T, pitch: T, roll: T) -> Mat4<T> {
    rotation_z(roll) * rotation_x(pitch) * rotation_y(heading)
}

/// Creates a rotation by `radians` about an arbitrary `axis`.
///
/// `axis` should be a unit vector.
///
/// # Examples
///
/// ```
/// # use approx::assert_relative_eq;
/// # use clg::*;
/// let m = axis_angle_rotation(Vec3f::Z, std::f32::consts::FRAC_PI_3);
/// assert_relative_eq!(m, rotation_z(std::f32::consts::FRAC_PI_3));
/// ```
pub fn axis_angle_rotation<T: Float>(axis: Vector<T, 3>, radians: T) -> Mat4<T> {
    let [x, y, z] = axis.into_array();
    let (s, c) = (radians.sin(), radians.cos());
    let ic = T::ONE - c;

    let mut result = Mat4::identity();
    result[(0, 0)] = c + ic * x * x;
    result[(1, 0)] = ic * x * y - z * s;
    result[(2, 0)] = ic * x * z + y * s;
    result[(0, 1)] = ic * x * y + z * s;
    result[(1, 1)] = c + ic * y * y;
    result[(2, 1)] = ic * y * z - x * s;
    result[(0, 2)] = ic * x * z - y * s;
    result[(1, 2)] = ic * y * z + x * s;
    result[(2, 2)] = c + ic * z * z;
    result
}

fn check_volume<T: Float>(builder: &str, left: T, right: T, bottom: T, top: T, near: T, far: T) {
    if left == right || bottom == top || near == far {
        log::warn!(
            "{builder}: degenerate view volume (left == right: {}, bottom == top: {}, near == far: {})",
            left == right,
            bottom == top,
            near == far,
        );
    }
}

/// Creates an orthographic projection matrix for OpenGL's clip space (depth in `[-1, 1]`).
///
/// The view volume is the box spanned by `left`/`right`, `bottom`/`top` and `near`/`far`. A
/// degenerate box is logged and yields infinite elements.
///
/// # Examples
///
/// ```
/// # use clg::*;
/// let m = orthographic_gl(0.0, 4.0, 0.0, 2.0, 0.0, 1.0);
/// assert_eq!(m * vec4(4.0, 2.0, 1.0, 1.0), vec4(1.0, 1.0, 1.0, 1.0));
/// assert_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(-1.0, -1.0, -1.0, 1.0));
/// ```
pub fn orthographic_gl<T: Float>(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Mat4<T> {
    check_volume("orthographic_gl", left, right, bottom, top, near, far);
    let two = T::ONE + T::ONE;

    let mut result = Mat4::identity();
    result[(0, 0)] = two / (right - left);
    result[(3, 0)] = -((right + left) / (right - left));
    result[(1, 1)] = two / (top - bottom);
    result[(3, 1)] = -((top + bottom) / (top - bottom));
    result[(2, 2)] = two / (far - near);
    result[(3, 2)] = -((far + near) / (far - near));
    result
}

/// Creates an orthographic projection matrix for Direct3D's clip space (depth in `[0, 1]`).
pub fn orthographic_dx<T: Float>(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Mat4<T> {
    check_volume("orthographic_dx", left, right, bottom, top, near, far);
    let two = T::ONE + T::ONE;

    let mut result = Mat4::identity();
    result[(0, 0)] = two / (right - left);
    result[(3, 0)] = -((right + left) / (right - left));
    result[(1, 1)] = two / (top - bottom);
    result[(3, 1)] = -((top + bottom) / (top - bottom));
    result[(2, 2)] = T::ONE / (far - near);
    result[(3, 2)] = -(near / (far - near));
    result
}

/// Creates a perspective projection matrix for OpenGL from the frustum's near plane rectangle.
///
/// The camera looks down the negative Z axis. `near` and `far` are distances and should be
/// positive.
pub fn perspective_gl<T: Float>(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Mat4<T> {
    check_volume("perspective_gl", left, right, bottom, top, near, far);
    let two = T::ONE + T::ONE;

    let mut result = Mat4::identity();
    result[(0, 0)] = (two * near) / (right - left);
    result[(2, 0)] = (right + left) / (right - left);
    result[(1, 1)] = (two * near) / (top - bottom);
    result[(2, 1)] = (top + bottom) / (top - bottom);
    result[(2, 2)] = -((far + near) / (far - near));
    result[(3, 2)] = -((two * far * near) / (far - near));
    result[(2, 3)] = -T::ONE;
    result[(3, 3)] = T::ZERO;
    result
}

/// Creates a perspective projection matrix for Direct3D from the frustum's near plane rectangle.
///
/// The camera looks down the positive Z axis and depth ends up in `[0, 1]`.
pub fn perspective_dx<T: Float>(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Mat4<T> {
    check_volume("perspective_dx", left, right, bottom, top, near, far);
    let two = T::ONE + T::ONE;

    let mut result = Mat4::identity();
    result[(0, 0)] = (two * near) / (right - left);
    result[(2, 0)] = (right + left) / (right - left);
    result[(1, 1)] = (two * near) / (top - bottom);
    result[(2, 1)] = (top + bottom) / (top - bottom);
    result[(2, 2)] = far / (far - near);
    result[(3, 2)] = -((far * near) / (far - near));
    result[(2, 3)] = T::ONE;
    result[(3, 3)] = T::ZERO;
    result
}

/// Creates a symmetric OpenGL perspective projection from a vertical field of view (in radians)
/// and an aspect ratio (width / height).
///
/// # Panics
///
/// Panics if `vertical_fov` is outside of `[0, 2π)`, or if `near` or `far` is not positive.
#[track_caller]
pub fn perspective_fov_gl<T: Float>(vertical_fov: T, aspect: T, near: T, far: T) -> Mat4<T> {
    assert!(
        vertical_fov >= T::ZERO && vertical_fov < T::TWO_PI,
        "field of view must be in [0, 2π) radians"
    );
    assert!(near > T::ZERO, "near plane distance must be positive");
    assert!(far > T::ZERO, "far plane distance must be positive");

    let two = T::ONE + T::ONE;
    let half_height = (vertical_fov / two).tan() * near;
    let half_width = half_height * aspect;
    perspective_gl(-half_width, half_width, -half_height, half_height, near, far)
}

/// Creates an OpenGL perspective projection whose near plane is a rectangle of height 1.
///
/// The near plane is placed where a field of view of `vertical_fov` results in that height, and
/// the far plane `depth` units behind it. Returns the matrix and the computed near plane distance.
///
/// # Panics
///
/// Panics if `vertical_fov` is outside of `(0, π)`, or if `depth` is not positive.
///
/// # Examples
///
/// ```
/// # use approx::assert_relative_eq;
/// # use clg::*;
/// let (_, near) = normalized_perspective_gl(std::f64::consts::FRAC_PI_2, 4.0 / 3.0, 2.0);
/// assert_relative_eq!(near, 0.5);
/// ```
#[track_caller]
pub fn normalized_perspective_gl<T: Float>(vertical_fov: T, aspect: T, depth: T) -> (Mat4<T>, T) {
    assert!(
        vertical_fov > T::ZERO && vertical_fov < T::PI,
        "field of view must be in (0, π) radians"
    );
    assert!(depth > T::ZERO, "frustum depth must be positive");

    let two = T::ONE + T::ONE;
    let half = T::ONE / two;
    let near = half / (vertical_fov / two).tan();
    let half_width = half * aspect;
    let m = perspective_gl(-half_width, half_width, -half, half, near, near + depth);
    (m, near)
}

impl<T: Float> Matrix<T, 4, 4> {
    /// Applies this transform to a 3D point, performing the perspective divide.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clg::*;
    /// let m = translation_3d(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m.transform_point(vec3(0.0, 0.0, 0.0)), vec3(1.0, 2.0, 3.0));
    /// ```
    pub fn transform_point(&self, point: Vector<T, 3>) -> Vector<T, 3> {
        let v = *self * point.extend(T::ONE);
        let w = v[3];
        v.truncate().map(|elem| elem / w)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    use approx::assert_abs_diff_eq;

    use crate::{test, vec2, vec3, vec4, Vec3};

    use super::*;

    #[test]
    fn translation() {
        let m = translation_2d(vec2(2, 3));
        assert_eq!(m * vec3(1, 1, 1), vec3(3, 4, 1));
        assert_eq!(m * vec3(1, 1, 0), vec3(1, 1, 0));
        assert_eq!(m[1], vec3(0, 1, 0));
        assert_eq!(m[2], vec3(2, 3, 1));

        let m = translation_3d(vec3(1, 2, 3));
        assert_eq!(m * vec4(0, 0, 0, 1), vec4(1, 2, 3, 1));
        assert_eq!(bytemuck::cast::<_, [i32; 16]>(m)[12..15], [1, 2, 3]);
    }

    #[test]
    fn rotation() {
        let r = rotation_2d(FRAC_PI_2);
        assert_abs_diff_eq!(r * vec3(1.0, 0.0, 1.0), vec3(0.0, 1.0, 1.0), epsilon = 1e-12);

        let p = vec4(1.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(rotation_z(FRAC_PI_2) * p, vec4(0.0, 1.0, 0.0, 1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(rotation_y(FRAC_PI_2) * p, vec4(0.0, 0.0, -1.0, 1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(
            rotation_x(FRAC_PI_2) * vec4(0.0, 1.0, 0.0, 1.0),
            vec4(0.0, 0.0, 1.0, 1.0),
            epsilon = 1e-12,
        );

        // Rotations compose by adding angles.
        assert_abs_diff_eq!(
            rotation_2d(FRAC_PI_3) * rotation_2d(FRAC_PI_3),
            rotation_2d(2.0 * FRAC_PI_3),
            epsilon = 1e-12,
        );
    }

    #[test]
    fn axis_angle_matches_axis_rotations() {
        let mut rng = fastrand::Rng::with_seed(0x3024b6663d843ca2);
        for _ in 0..100 {
            let angle = rng.f64() * 2.0 * PI;
            assert_abs_diff_eq!(
                axis_angle_rotation(Vec3::X, angle),
                rotation_x(angle),
                epsilon = 1e-12,
            );
            assert_abs_diff_eq!(
                axis_angle_rotation(Vec3::Y, angle),
                rotation_y(angle),
                epsilon = 1e-12,
            );
            assert_abs_diff_eq!(
                axis_angle_rotation(Vec3::Z, angle),
                rotation_z(angle),
                epsilon = 1e-12,
            );
        }
    }

    #[test]
    fn euler_order() {
        let (h, p, r) = (0.3, -1.1, 2.0);
        assert_abs_diff_eq!(
            euler_transform(h, p, r),
            rotation_z(r) * (rotation_x(p) * rotation_y(h)),
            epsilon = 1e-12,
        );
        assert_abs_diff_eq!(euler_transform(0.0, 0.0, r), rotation_z(r), epsilon = 1e-12);
        assert_abs_diff_eq!(euler_transform(h, 0.0, 0.0), rotation_y(h), epsilon = 1e-12);
    }

    #[test]
    fn scaling_and_reflection() {
        assert_eq!(scaling_2d(vec2(2i32, 3)) * vec3(1, 1, 1), vec3(2, 3, 1));
        assert_eq!(scaling_3d(vec3(2, 3, 4)).diagonal(), vec4(2, 3, 4, 1));

        let p = vec3(2.0, 5.0, 1.0);
        assert_eq!(reflection_about_x::<f64>() * p, vec3(2.0, -5.0, 1.0));
        assert_eq!(reflection_about_y::<f64>() * p, vec3(-2.0, 5.0, 1.0));
        assert_eq!(reflection_about_origin::<f64>() * p, vec3(-2.0, -5.0, 1.0));
        assert_eq!(reflection_about_xy_line::<f64>() * p, vec3(5.0, 2.0, 0.0));
        assert_eq!(reflection_about_negative_xy_line::<f64>() * p, vec3(-5.0, -2.0, 0.0));
    }

    #[test]
    fn shears() {
        assert_eq!(shear_x(2i32) * vec3(1, 1, 1), vec3(3, 1, 1));
        assert_eq!(shear_y(2i32) * vec3(1, 1, 1), vec3(1, 3, 1));

        let p = vec4(1, 10, 100, 1);
        assert_eq!(shear_xy(2i32) * p, vec4(21, 10, 100, 1));
        assert_eq!(shear_xz(2i32) * p, vec4(201, 10, 100, 1));
        assert_eq!(shear_yx(2i32) * p, vec4(1, 12, 100, 1));
        assert_eq!(shear_yz(2i32) * p, vec4(1, 210, 100, 1));
        assert_eq!(shear_zx(2i32) * p, vec4(1, 10, 102, 1));
        assert_eq!(shear_zy(2i32) * p, vec4(1, 10, 120, 1));
    }

    #[test]
    fn orthographic() {
        let gl = orthographic_gl(-2.0, 2.0, -1.0, 1.0, 1.0, 3.0);
        assert_eq!(gl.transform_point(vec3(2.0, 1.0, 3.0)), vec3(1.0, 1.0, 1.0));
        assert_eq!(gl.transform_point(vec3(-2.0, -1.0, 1.0)), vec3(-1.0, -1.0, -1.0));

        let dx = orthographic_dx(-2.0, 2.0, -1.0, 1.0, 1.0, 3.0);
        assert_eq!(dx.transform_point(vec3(0.0, 0.0, 1.0)).z(), 0.0);
        assert_eq!(dx.transform_point(vec3(0.0, 0.0, 3.0)).z(), 1.0);
        assert_eq!(*dx.row_col(2, 2), 0.5);
        assert_eq!(*dx.row_col(2, 3), -0.5);
    }

    #[test]
    fn perspective() {
        let gl = perspective_gl(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
        assert_abs_diff_eq!(gl.transform_point(vec3(0.0, 0.0, -1.0)).z(), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(gl.transform_point(vec3(0.0, 0.0, -10.0)).z(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            gl.transform_point(vec3(1.0, 1.0, -1.0)),
            vec3(1.0, 1.0, -1.0),
            epsilon = 1e-12,
        );
        assert_eq!(gl[3], vec4(0.0, 0.0, -(2.0 * 10.0 / 9.0), 0.0));
        assert_eq!(gl[2][3], -1.0);

        let dx = perspective_dx(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
        assert_abs_diff_eq!(dx.transform_point(vec3(0.0, 0.0, 1.0)).z(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dx.transform_point(vec3(0.0, 0.0, 10.0)).z(), 1.0, epsilon = 1e-12);
        assert_eq!(dx[2][3], 1.0);
    }

    #[test]
    fn perspective_fov() {
        let m = perspective_fov_gl(FRAC_PI_2, 2.0, 1.0, 100.0);
        assert_abs_diff_eq!(m, perspective_gl(-2.0, 2.0, -1.0, 1.0, 1.0, 100.0), epsilon = 1e-12);

        let (m, near) = normalized_perspective_gl(FRAC_PI_2, 2.0, 3.0);
        assert_abs_diff_eq!(near, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(
            m,
            perspective_gl(-1.0, 1.0, -0.5, 0.5, near, near + 3.0),
            epsilon = 1e-12,
        );
    }

    #[test]
    #[should_panic(expected = "field of view must be in [0, 2π) radians")]
    fn fov_out_of_range() {
        perspective_fov_gl(7.0, 1.0, 1.0, 100.0);
    }

    #[test]
    #[should_panic(expected = "near plane distance must be positive")]
    fn near_not_positive() {
        perspective_fov_gl(1.0, 1.0, 0.0, 100.0);
    }

    #[test]
    #[should_panic(expected = "field of view must be in (0, π) radians")]
    fn normalized_fov_out_of_range() {
        normalized_perspective_gl(0.0f32, 1.0, 1.0);
    }

    #[test]
    fn degenerate_volume() {
        test::init_logger();

        let m = orthographic_gl(1.0f32, 1.0, -1.0, 1.0, 0.0, 1.0);
        assert!(m[(0, 0)].is_infinite());
        assert_eq!(m[(1, 1)], 1.0);
    }
}
