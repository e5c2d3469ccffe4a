//! Triangle helpers: validity, the aggregate "diagonal", law of cosines

/// Approximate span of two adjacent edges: the longer plus half the shorter.
///
/// Not a geometric identity. It is the diagonal stand-in the figures were
/// tuned against, so it must stay exactly this.
pub fn aggregate(a: f32, b: f32) -> f32 {
    a.max(b) + a.min(b) / 2.0
}

/// Strict triangle inequality on all three sides; zero, negative or
/// non-finite sides are never valid.
pub fn is_valid_triangle(sides: [f32; 3]) -> bool {
    let [a, b, c] = sides;
    if sides.iter().any(|s| !s.is_finite() || *s <= 0.0) {
        return false;
    }
    a + b > c && b + c > a && a + c > b
}

/// Angle between sides `a` and `b` (radians) in the triangle closed by
/// `opposite`.
///
/// Uses the law of cosines: cos(θ) = (a² + b² − c²) / 2ab
///
/// Returns None when the three lengths do not form a triangle.
pub fn corner_angle(a: f32, b: f32, opposite: f32) -> Option<f32> {
    if !is_valid_triangle([a, b, opposite]) {
        return None;
    }
    let cos_angle = ((a * a + b * b - opposite * opposite) / (2.0 * a * b)).clamp(-1.0, 1.0);
    Some(cos_angle.acos())
}
