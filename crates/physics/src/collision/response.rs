//! Velocity response for perfectly elastic impacts

/// One-dimensional elastic collision.
///
/// Takes masses and pre-impact velocities of both bodies and returns the
/// post-impact velocities `(v1, v2)`. Momentum and kinetic energy are
/// conserved up to floating-point rounding. Both masses must be positive.
#[must_use]
pub fn resolve_elastic(m1: f32, u1: f32, m2: f32, u2: f32) -> (f32, f32) {
    let total = m1 + m2;
    let v1 = ((m1 - m2) / total) * u1 + (2.0 * m2 / total) * u2;
    let v2 = (2.0 * m1 / total) * u1 + ((m2 - m1) / total) * u2;
    (v1, v2)
}

/// Velocity after bouncing off an immovable surface.
#[must_use]
pub fn reflect(u: f32) -> f32 {
    -u
}
