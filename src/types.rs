use cgmath::{vec3, InnerSpace as _, Vector2, Vector3};

pub type Float = f64;
pub type Vec2 = Vector2<Float>;
pub type Vec3 = Vector3<Float>;
pub type Color = Vector3<Float>;

/// Vectors shorter than this are left untouched by `normalize_safe`.
pub const NORMALIZE_EPSILON: Float = 1e-4;

/// Direction components below this count as grazing the axis.
pub const AXIS_EPSILON: Float = 1e-5;

/// `v` mirrored about the unit normal `n`.
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * n * v.dot(n)
}

/// Unit-length copy of `v`; degenerate vectors come back unchanged.
pub fn normalize_safe(v: Vec3) -> Vec3 {
    let len = v.magnitude();
    if len < NORMALIZE_EPSILON {
        v
    } else {
        v / len
    }
}

/// Sign of `x` with a dead zone around zero.
pub fn axis_sign(x: Float) -> Float {
    if x.abs() < AXIS_EPSILON {
        0.0
    } else {
        x.signum()
    }
}

/// Each channel clamped to [0, 1].
pub fn saturate(color: Color) -> Color {
    vec3(
        color.x.clamp(0.0, 1.0),
        color.y.clamp(0.0, 1.0),
        color.z.clamp(0.0, 1.0),
    )
}
