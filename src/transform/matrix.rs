use glam::{Mat4, Vec3, Vec4};

/// Wrap an angle in degrees into `[0, 360)`.
///
/// Wraps rather than clamps, so long runs never accumulate unbounded
/// angles. `rem_euclid` can round a tiny negative input up to exactly
/// `360.0`, which is folded back to `0.0`.
#[must_use]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Translation by `(x, y, z)`.
#[must_use]
pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(x, y, z))
}

/// Non-uniform scale by `(x, y, z)`.
#[must_use]
pub fn scale(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_scale(Vec3::new(x, y, z))
}

/// Right-handed rotation about +X, angle in degrees.
#[must_use]
pub fn rotate_x(degrees: f32) -> Mat4 {
    let (s, c) = degrees.to_radians().sin_cos();
    Mat4::from_cols(
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(0.0, c, s, 0.0),
        Vec4::new(0.0, -s, c, 0.0),
        Vec4::W,
    )
}

/// Right-handed rotation about +Y, angle in degrees.
#[must_use]
pub fn rotate_y(degrees: f32) -> Mat4 {
    let (s, c) = degrees.to_radians().sin_cos();
    Mat4::from_cols(
        Vec4::new(c, 0.0, -s, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(s, 0.0, c, 0.0),
        Vec4::W,
    )
}

/// Right-handed rotation about +Z, angle in degrees.
#[must_use]
pub fn rotate_z(degrees: f32) -> Mat4 {
    let (s, c) = degrees.to_radians().sin_cos();
    Mat4::from_cols(
        Vec4::new(c, s, 0.0, 0.0),
        Vec4::new(-s, c, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::W,
    )
}

/// Symmetric perspective frustum with an OpenGL-style `[-1, 1]` depth range.
///
/// `fovy` is the full vertical field of view in degrees; the horizontal
/// extent is divided by `aspect`.
#[must_use]
pub fn perspective(fovy: f32, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
    let half_extent = znear * (fovy.to_radians() * 0.5).tan();
    let h = znear / half_extent;
    let w = h / aspect;

    let depth = zfar - znear;
    let q = -(zfar + znear) / depth;
    let qn = -2.0 * (zfar * znear) / depth;

    Mat4::from_cols(
        Vec4::new(w, 0.0, 0.0, 0.0),
        Vec4::new(0.0, h, 0.0, 0.0),
        Vec4::new(0.0, 0.0, q, -1.0),
        Vec4::new(0.0, 0.0, qn, 0.0),
    )
}
