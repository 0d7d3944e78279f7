/// Monotonic mapping from linear time fraction to progress fraction.
///
/// Input and output are clamped to `[0, 1]`, so overshooting bezier control
/// points or custom curves cannot push progress past its target. Built-in
/// curves map `0 → 0` and `1 → 1`.
#[derive(Debug, Clone, Copy, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
    Custom(fn(f32) -> f32),
}

impl Easing {
    pub fn transform(&self, fraction: f32) -> f32 {
        let x = fraction.clamp(0.0, 1.0);
        let y = match *self {
            Easing::Linear => x,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, x),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, x),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, x),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, x),
            Easing::Custom(f) => f(x),
        };
        if y.is_nan() { x } else { y.clamp(0.0, 1.0) }
    }
}

/// Solves the bezier for `t` at `x` (Newton, then bisection) and samples `y(t)`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let curve = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let slope = |t: f32| (3.0 * ax * t + 2.0 * bx) * t + cx;

    let mut t = x;
    let mut solved = false;
    for _ in 0..8 {
        let err = curve(ax, bx, cx, t) - x;
        if err.abs() < 1e-6 {
            solved = true;
            break;
        }
        let d = slope(t);
        if d.abs() < 1e-6 {
            break;
        }
        t = (t - err / d).clamp(0.0, 1.0);
    }

    if !solved {
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..20 {
            let err = curve(ax, bx, cx, t) - x;
            if err.abs() < 1e-6 {
                break;
            }
            if err > 0.0 { hi = t } else { lo = t }
            t = 0.5 * (lo + hi);
        }
    }

    curve(ay, by, cy, t)
}
