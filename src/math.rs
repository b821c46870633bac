pub use glam::f32::Vec2;

pub const PI: f32 = std::f32::consts::PI;

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// maps x from the range [a, b] to [p, q]
pub fn linmap(x: f32, a: f32, b: f32, p: f32, q: f32) -> f32 {
    let s = (x - a) / (b - a);
    lerp(p, q, s)
}

pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

pub fn linspace(a: f32, b: f32, n: usize) -> Vec<f32> {
    if n < 2 {
        return vec![a];
    }
    if n == 2 {
        return vec![a, b];
    }
    (0..n)
        .map(|i| {
            let t = i as f32 / (n - 1) as f32;
            lerp(a, b, t)
        })
        .collect()
}
