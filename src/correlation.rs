//! Functional forms of the literature correlations.
//!
//! Every registered source is a [`Correlation`]: a closed‑form
//! [`Formula`] in temperature, a cubic spline through a published
//! [`Table`], or a monomer correlation corrected for the equilibrium
//! dimer fraction of the saturated vapor ([`SaturatedModel`]).
//!
//! All expressions take the temperature in K and return SI units; the
//! `scale` factor of each form carries the literature unit (torr, atm,
//! MPa, µP, …) into SI.

pub mod dimer;
mod table;

pub use table::Table;

// ── Closed forms ────────────────────────────────────────────────────

/// Closed‑form expression with literature coefficients.
#[derive(Debug, Clone, PartialEq)]
pub enum Formula {
    /// `scale · 10^(a + b / (T + c))`
    Antoine { a: f64, b: f64, c: f64, scale: f64 },
    /// `scale · exp(a + b / T + c ln T)`
    LnKirchhoff { a: f64, b: f64, c: f64, scale: f64 },
    /// `scale · 10^(a + b / T + c log10 T)`
    Log10Kirchhoff { a: f64, b: f64, c: f64, scale: f64 },
    /// `scale · 10^(a + b / T + c log10 T + d T + e exp(f / T))`
    Log10Extended { a: f64, b: f64, c: f64, d: f64, e: f64, f: f64, scale: f64 },
    /// `scale · exp(c ln τ + am1 / τ + a0 + a1 τ)` with `τ = T / t_ref`
    ReducedLn { t_ref: f64, c: f64, am1: f64, a0: f64, a1: f64, scale: f64 },
    /// `scale · Σ cᵢ (T − t_ref)ⁱ`
    Polynomial { t_ref: f64, coefficients: &'static [f64], scale: f64 },
    /// `scale · prefactor · T^exponent`
    PowerLaw { prefactor: f64, exponent: f64, scale: f64 },
}

impl Formula {
    pub fn eval(&self, t: f64) -> f64 {
        match *self {
            Formula::Antoine { a, b, c, scale } => scale * 10f64.powf(a + b / (t + c)),
            Formula::LnKirchhoff { a, b, c, scale } => scale * (a + b / t + c * t.ln()).exp(),
            Formula::Log10Kirchhoff { a, b, c, scale } => {
                scale * 10f64.powf(a + b / t + c * t.log10())
            }
            Formula::Log10Extended { a, b, c, d, e, f, scale } => {
                scale * 10f64.powf(a + b / t + c * t.log10() + d * t + e * (f / t).exp())
            }
            Formula::ReducedLn { t_ref, c, am1, a0, a1, scale } => {
                let tau = t / t_ref;
                scale * (c * tau.ln() + am1 / tau + a0 + a1 * tau).exp()
            }
            Formula::Polynomial { t_ref, coefficients, scale } => {
                // Horner in (T − t_ref)
                let dt = t - t_ref;
                scale * coefficients.iter().rev().fold(0.0, |acc, &c| acc * dt + c)
            }
            Formula::PowerLaw { prefactor, exponent, scale } => {
                scale * prefactor * t.powf(exponent)
            }
        }
    }
}

// ── Saturated‑vapor models ──────────────────────────────────────────

/// Mixture correlations evaluated at the saturated dimer fraction
/// [`dimer::saturated_dimer_fraction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaturatedModel {
    /// Vargaftik & Yargin (1985), Eq. (55) on the Eq. (56) monomer viscosity.
    ViscosityVargaftikYargin1985,
    /// Vargaftik et al. (1991), Eq. (4) on the Eq. (6) monomer viscosity.
    ViscosityVargaftik1991,
    /// Stepanenko et al. (1986), Eq. (5).
    ViscosityStepanenko1986,
    /// Vargaftik & Yargin (1985), Eqs. (65) and (67).
    ConductivityVargaftikYargin1985,
}

impl SaturatedModel {
    /// `None` where the fit is undefined (Stepanenko below 1500 K).
    pub fn eval(self, t: f64) -> Option<f64> {
        let x2 = dimer::saturated_dimer_fraction(t);
        match self {
            SaturatedModel::ViscosityVargaftikYargin1985 => {
                Some(dimer::viscosity_vargaftik_yargin_1985(x2, t))
            }
            SaturatedModel::ViscosityVargaftik1991 => Some(dimer::viscosity_vargaftik_1991(x2, t)),
            SaturatedModel::ViscosityStepanenko1986 => dimer::viscosity_stepanenko_1986(x2, t),
            SaturatedModel::ConductivityVargaftikYargin1985 => {
                Some(dimer::conductivity_vargaftik_yargin_1985(x2, t))
            }
        }
    }
}

// ── Correlation ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Correlation {
    Formula(Formula),
    Tabulated(Table),
    Saturated(SaturatedModel),
}

impl Correlation {
    /// Value in SI units, `None` where the correlation is undefined: a
    /// table outside its span, or a fit below its hard lower limit.
    pub fn evaluate(&self, t: f64) -> Option<f64> {
        match self {
            Correlation::Formula(f) => Some(f.eval(t)),
            Correlation::Tabulated(table) => table.interpolate(t),
            Correlation::Saturated(model) => model.eval(t),
        }
    }

    /// Whether the correlation can be evaluated outside its documented
    /// range. Saturated fits still return `None` below a hard limit.
    pub fn extrapolates(&self) -> bool {
        !matches!(self, Correlation::Tabulated(_))
    }
}

impl From<Formula> for Correlation {
    fn from(f: Formula) -> Self {
        Correlation::Formula(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn polynomial_is_centered_on_t_ref() {
        let f = Formula::Polynomial { t_ref: 1000.0, coefficients: &[1.0, 2.0, 3.0], scale: 10.0 };
        assert_relative_eq!(f.eval(1000.0), 10.0);
        // 1 + 2·2 + 3·4 = 17
        assert_relative_eq!(f.eval(1002.0), 170.0);
    }

    #[test]
    fn antoine_reduces_to_clausius_clapeyron_without_c() {
        let f = Formula::Antoine { a: 3.0, b: -1000.0, c: 0.0, scale: 2.0 };
        assert_relative_eq!(f.eval(500.0), 2.0 * 10f64.powf(1.0), max_relative = 1e-12);
    }

    #[test]
    fn reduced_ln_uses_reduced_temperature() {
        let f = Formula::ReducedLn { t_ref: 1000.0, c: 1.0, am1: 0.0, a0: 0.0, a1: 0.0, scale: 1.0 };
        // exp(ln τ) = τ
        assert_relative_eq!(f.eval(1500.0), 1.5, max_relative = 1e-12);
    }

    #[test]
    fn only_tables_refuse_extrapolation() {
        let table = Table::new(&[1.0, 2.0, 3.0, 4.0], &[1.0, 8.0, 27.0, 64.0], 1.0);
        assert!(!Correlation::Tabulated(table).extrapolates());
        assert!(Correlation::Saturated(SaturatedModel::ViscosityVargaftik1991).extrapolates());
        let f = Formula::PowerLaw { prefactor: 1.0, exponent: 1.0, scale: 1.0 };
        assert!(Correlation::from(f).extrapolates());
    }
}
