//! Natural cubic spline interpolation over a fixed set of control points.
//!
//! Used by the vocabulary reference curve; coefficients are computed once
//! at construction so evaluation is read-only and shareable.

/// Cubic interpolant through `(x, y)` control points with natural
/// (zero second derivative) boundary conditions.
#[derive(Clone, Debug)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    // Second derivative of the spline at each knot.
    y2: Vec<f64>,
}

impl CubicSpline {
    /// Build a spline from control points. `xs` must be strictly
    /// increasing and both slices the same length >= 2; returns `None`
    /// otherwise.
    pub fn new(xs: &[f64], ys: &[f64]) -> Option<Self> {
        if xs.len() != ys.len() || xs.len() < 2 {
            return None;
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return None;
        }

        let n = xs.len();
        let mut y2 = vec![0.0; n];
        let mut u = vec![0.0; n];

        // Tridiagonal sweep (Thomas algorithm), natural boundaries:
        // y2[0] = y2[n-1] = 0.
        for i in 1..n - 1 {
            let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
            let p = sig * y2[i - 1] + 2.0;
            y2[i] = (sig - 1.0) / p;
            let d = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
                - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
            u[i] = (6.0 * d / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
        }
        for k in (0..n - 1).rev() {
            y2[k] = y2[k] * y2[k + 1] + u[k];
        }

        Some(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            y2,
        })
    }

    pub fn min_x(&self) -> f64 {
        self.xs[0]
    }

    pub fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    /// Evaluate at `x`, clamping into the control-point domain first.
    pub fn evaluate_clamped(&self, x: f64) -> f64 {
        let x = x.clamp(self.min_x(), self.max_x());

        // Find the knot interval containing x.
        let hi = match self.xs.iter().position(|&k| k >= x) {
            Some(0) | None => 1,
            Some(i) => i,
        };
        let lo = hi - 1;

        let h = self.xs[hi] - self.xs[lo];
        let a = (self.xs[hi] - x) / h;
        let b = (x - self.xs[lo]) / h;
        a * self.ys[lo]
            + b * self.ys[hi]
            + ((a * a * a - a) * self.y2[lo] + (b * b * b - b) * self.y2[hi]) * (h * h) / 6.0
    }
}
