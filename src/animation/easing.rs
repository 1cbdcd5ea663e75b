//! Easing curves. Every function maps `[0, 1]` onto a curve that starts at
//! 0 and ends at exactly 1; inputs outside the range are clamped.

use std::f32::consts::PI;

#[inline]
fn clamp_unit(t: f32) -> Option<f32> {
    if t.is_nan() || t <= 0.0 {
        Some(0.0)
    } else if t >= 1.0 {
        Some(1.0)
    } else {
        None
    }
}

pub fn linear(t: f32) -> f32 {
    clamp_unit(t).unwrap_or(t)
}

pub fn ease_out_cubic(t: f32) -> f32 {
    if let Some(edge) = clamp_unit(t) {
        return edge;
    }
    1.0 - (1.0 - t).powi(3)
}

pub fn ease_in_out_sine(t: f32) -> f32 {
    if let Some(edge) = clamp_unit(t) {
        return edge;
    }
    -((PI * t).cos() - 1.0) / 2.0
}

/// Overshoots past 1 before settling
pub fn ease_out_back(t: f32) -> f32 {
    if let Some(edge) = clamp_unit(t) {
        return edge;
    }
    const C1: f32 = 1.70158;
    const C3: f32 = C1 + 1.0;
    let u = t - 1.0;
    1.0 + C3 * u.powi(3) + C1 * u.powi(2)
}

pub fn ease_out_bounce(t: f32) -> f32 {
    if let Some(edge) = clamp_unit(t) {
        return edge;
    }
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [(&str, fn(f32) -> f32); 5] = [
        ("linear", linear),
        ("ease_out_cubic", ease_out_cubic),
        ("ease_in_out_sine", ease_in_out_sine),
        ("ease_out_back", ease_out_back),
        ("ease_out_bounce", ease_out_bounce),
    ];

    #[test]
    fn test_endpoints() {
        for (name, curve) in CURVES {
            assert_eq!(curve(0.0), 0.0, "{name} at 0");
            assert_eq!(curve(1.0), 1.0, "{name} at 1");
            assert_eq!(curve(-3.0), 0.0, "{name} below range");
            assert_eq!(curve(7.0), 1.0, "{name} above range");
            assert_eq!(curve(f32::NAN), 0.0, "{name} with NaN");
        }
    }

    #[test]
    fn test_back_overshoots() {
        let peak = (1..100)
            .map(|i| ease_out_back(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_bounce_stays_in_range() {
        for i in 0..=100 {
            let v = ease_out_bounce(i as f32 / 100.0);
            assert!((0.0..=1.0).contains(&v), "bounce({}) = {}", i, v);
        }
    }
}
