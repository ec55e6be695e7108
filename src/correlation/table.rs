/// Cubic spline through a published property table.
///
/// Uses not‑a‑knot end conditions (third derivative continuous across
/// the second and penultimate nodes). The spline passes exactly through
/// every node and is undefined outside `[T₀, Tₙ₋₁]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    temperatures: &'static [f64],
    values: &'static [f64],
    /// Spline second derivatives at the nodes, in table units.
    second_derivatives: Vec<f64>,
    /// Table unit → SI.
    scale: f64,
}

impl Table {
    /// Builds the spline through `(temperatures[i], values[i])`.
    ///
    /// # Panics
    ///
    /// Panics if the columns differ in length, hold fewer than four
    /// nodes, or the temperatures are not strictly increasing.
    pub fn new(temperatures: &'static [f64], values: &'static [f64], scale: f64) -> Self {
        assert_eq!(temperatures.len(), values.len(), "table columns differ in length");
        assert!(temperatures.len() >= 4, "a not-a-knot spline needs at least four nodes");
        assert!(
            temperatures.windows(2).all(|w| w[1] > w[0]),
            "table temperatures must be strictly increasing"
        );
        let second_derivatives = not_a_knot(temperatures, values);
        Self { temperatures, values, second_derivatives, scale }
    }

    /// First and last tabulated temperatures (K).
    pub fn span(&self) -> (f64, f64) {
        (self.temperatures[0], self.temperatures[self.temperatures.len() - 1])
    }

    /// Tabulated `(T, value)` pairs, values converted to SI.
    pub fn nodes(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.temperatures.iter().zip(self.values).map(|(&t, &v)| (t, v * self.scale))
    }

    /// Interpolated value in SI units, `None` outside the table.
    pub fn interpolate(&self, t: f64) -> Option<f64> {
        let (lo, hi) = self.span();
        if !(lo..=hi).contains(&t) {
            return None;
        }
        let x = self.temperatures;
        let y = self.values;
        let m = &self.second_derivatives;

        let i = x.partition_point(|&xi| xi <= t).saturating_sub(1).min(x.len() - 2);
        let h = x[i + 1] - x[i];
        let a = x[i + 1] - t;
        let b = t - x[i];
        let value = m[i] * a.powi(3) / (6.0 * h)
            + m[i + 1] * b.powi(3) / (6.0 * h)
            + (y[i] / h - m[i] * h / 6.0) * a
            + (y[i + 1] / h - m[i + 1] * h / 6.0) * b;
        Some(value * self.scale)
    }
}

/// Second derivatives of the not‑a‑knot spline.
///
/// The two end conditions are eliminated into the first and last
/// interior rows, leaving a tridiagonal system in `M₁ … Mₙ₋₂`.
fn not_a_knot(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let d: Vec<f64> = (0..n - 1).map(|i| (y[i + 1] - y[i]) / h[i]).collect();

    let k = n - 2;
    let mut sub = vec![0.0; k];
    let mut diag = vec![0.0; k];
    let mut sup = vec![0.0; k];
    let mut rhs = vec![0.0; k];
    for r in 0..k {
        let i = r + 1;
        sub[r] = h[i - 1];
        diag[r] = 2.0 * (h[i - 1] + h[i]);
        sup[r] = h[i];
        rhs[r] = 6.0 * (d[i] - d[i - 1]);
    }

    // M₀ = ((h₀ + h₁) M₁ − h₀ M₂) / h₁
    let (h0, h1) = (h[0], h[1]);
    diag[0] += h0 * (h0 + h1) / h1;
    sup[0] -= h0 * h0 / h1;
    // Mₙ₋₁ = ((hₙ₋₂ + hₙ₋₃) Mₙ₋₂ − hₙ₋₂ Mₙ₋₃) / hₙ₋₃
    let (hl, hp) = (h[n - 2], h[n - 3]);
    diag[k - 1] += hl * (hl + hp) / hp;
    sub[k - 1] -= hl * hl / hp;

    // Thomas algorithm
    for r in 1..k {
        let w = sub[r] / diag[r - 1];
        diag[r] -= w * sup[r - 1];
        rhs[r] -= w * rhs[r - 1];
    }
    let mut m = vec![0.0; n];
    m[k] = rhs[k - 1] / diag[k - 1];
    for r in (0..k - 1).rev() {
        m[r + 1] = (rhs[r] - sup[r] * m[r + 2]) / diag[r];
    }
    m[0] = ((h0 + h1) * m[1] - h0 * m[2]) / h1;
    m[n - 1] = ((hl + hp) * m[n - 2] - hl * m[n - 3]) / hp;
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    static X: [f64; 6] = [1.0, 2.0, 3.5, 4.0, 6.0, 7.5];
    static CUBIC: [f64; 6] = [-1.0, 4.0, 35.875, 56.0, 204.0, 406.875];

    #[test]
    fn reproduces_a_cubic_exactly() {
        // y = x³ − 2x on non‑uniform nodes
        let table = Table::new(&X, &CUBIC, 1.0);
        for t in [1.5, 2.7, 5.0, 7.0] {
            let expected = t * t * t - 2.0 * t;
            assert_relative_eq!(table.interpolate(t).unwrap(), expected, max_relative = 1e-10);
        }
    }

    #[test]
    fn four_nodes_give_the_interpolating_cubic() {
        static X4: [f64; 4] = [1.0, 2.0, 3.0, 4.0];
        static Y4: [f64; 4] = [1.0, 8.0, 27.0, 64.0];
        let table = Table::new(&X4, &Y4, 1.0);
        assert_relative_eq!(table.interpolate(2.5).unwrap(), 15.625, max_relative = 1e-12);
    }

    #[test]
    fn passes_through_nodes_and_applies_scale() {
        let table = Table::new(&X, &CUBIC, 1e-3);
        for (t, v) in table.nodes() {
            assert_relative_eq!(table.interpolate(t).unwrap(), v, max_relative = 1e-12);
        }
        assert_relative_eq!(table.interpolate(4.0).unwrap(), 0.056, max_relative = 1e-12);
    }

    #[test]
    fn undefined_outside_the_table() {
        let table = Table::new(&X, &CUBIC, 1.0);
        assert_eq!(table.span(), (1.0, 7.5));
        assert!(table.interpolate(0.999).is_none());
        assert!(table.interpolate(7.5001).is_none());
        assert!(table.interpolate(f64::NAN).is_none());
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn rejects_unsorted_temperatures() {
        static XU: [f64; 4] = [1.0, 3.0, 2.0, 4.0];
        Table::new(&XU, &XU, 1.0);
    }
}
