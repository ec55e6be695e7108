//! Li ⇌ ½ Li₂ equilibrium in the saturated vapor.
//!
//! Saturated lithium vapor carries a few percent of Li₂ molecules
//! (about 2.6 % at 1000 K, 18 % at 2000 K), which lowers its viscosity
//! and, through the reaction enthalpy, raises its thermal conductivity.
//! The model is that of Vargaftik & Yargin, *Handbook of Thermodynamic
//! and Transport Properties of Alkali Metals* (Ohse ed., 1985), ch. 7.4.

use std::sync::LazyLock;

use crate::constants::GAS_CONSTANT;
use crate::library;

use super::Table;

/// Dissociation energy of Li₂ at 0 K (J/mol), 107 800 ± 1300 J/mol.
pub const DISSOCIATION_ENERGY: f64 = 107_800.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// Li
    Monomer,
    /// Li₂
    Dimer,
}

/// Coefficients of `[1, ln x, 10⁻⁴ x⁻², 10⁻² x⁻¹, x, x², x³]`, Table 35.
const PHI_MONOMER: [f64; 7] = [187.7374, 19.5189, 4.7730, -6.117, 10.9728, -21.055, 21.357];
const PHI_DIMER: [f64; 7] = [284.3545, 35.8511, -7.180, 17.819, 35.8331, -73.097, 46.625];

/// Reduced thermodynamic potential φ* (J/(mol·K)), Eq. (82), `x = 10⁻⁴ T`.
pub fn reduced_potential(component: Component, t: f64) -> f64 {
    let c = match component {
        Component::Monomer => &PHI_MONOMER,
        Component::Dimer => &PHI_DIMER,
    };
    let x = 1e-4 * t;
    c[0] + c[1] * x.ln()
        + c[2] * 1e-4 * x.powi(-2)
        + c[3] * 1e-2 * x.powi(-1)
        + c[4] * x
        + c[5] * x.powi(2)
        + c[6] * x.powi(3)
}

/// Equilibrium constant of the dissociation with the default `D₀⁰`.
pub fn equilibrium_constant(t: f64) -> f64 {
    equilibrium_constant_with(t, DISSOCIATION_ENERGY)
}

/// `K = exp((2φ₁* − φ₂*) / R − D₀⁰ / (R T))`, `d00` in J/mol.
pub fn equilibrium_constant_with(t: f64, d00: f64) -> f64 {
    let phi1 = reduced_potential(Component::Monomer, t);
    let phi2 = reduced_potential(Component::Dimer, t);
    ((2.0 * phi1 - phi2) / GAS_CONSTANT - d00 / (GAS_CONSTANT * t)).exp()
}

/// Li₂ mole fraction at pressure `p_kpa` (kPa), Eq. (80).
pub fn dimer_fraction(p_kpa: f64, k_eq: f64) -> f64 {
    1.0 - 2.0 / (1.0 + (1.0 + 3.9477e-2 * p_kpa / k_eq).sqrt())
}

/// Li₂ mole fraction of the saturated vapor, from [`equilibrium_constant`]
/// and the Browning & Potter (1985) pressure.
///
/// The saturated transport sources use this fraction whatever vapor
/// pressure source an evaluator is configured with, and evaluate it
/// below 1057 K without consulting the range policy.
pub fn saturated_dimer_fraction(t: f64) -> f64 {
    let p_kpa = library::BROWNING_POTTER_1985.eval(t) / 1000.0;
    dimer_fraction(p_kpa, equilibrium_constant(t))
}

static VOLJAK_T: [f64; 9] = [800.0, 850.0, 900.0, 1000.0, 1100.0, 1200.0, 1500.0, 1800.0, 2000.0];
static VOLJAK_X2: [f64; 9] = [
    0.007953, 0.01134, 0.0155, 0.02596, 0.03894, 0.05383, 0.1035, 0.1505, 0.1767,
];
static VOLJAK: LazyLock<Table> = LazyLock::new(|| Table::new(&VOLJAK_T, &VOLJAK_X2, 1.0));

/// Saturated Li₂ fraction interpolated from selected points of Table 2 of
/// Vargaftik & Voljak (1985), ch. 6.6.1. `None` outside 800–2000 K.
pub fn tabulated_saturated_dimer_fraction(t: f64) -> Option<f64> {
    VOLJAK.interpolate(t)
}

// ── Mixture corrections ─────────────────────────────────────────────

/// Viscosity (Pa·s) of a monomer–dimer mixture, Vargaftik & Yargin Eq. (55).
pub fn viscosity_vargaftik_yargin_1985(x2: f64, t: f64) -> f64 {
    let eta1 = library::VISCOSITY_VARGAFTIK_YARGIN_1985.eval(t);
    eta1 * (1.0 - 3.65 * x2 + 12.5 * x2.powi(2) - 42.0 * x2.powi(3) + 142.0 * x2.powi(4)
        - 479.0 * x2.powi(5)
        + 1600.0 * x2.powi(6))
}

/// Viscosity (Pa·s), Vargaftik et al., Int. J. Thermophys. 12 (1991), Eq. (4).
pub fn viscosity_vargaftik_1991(x2: f64, t: f64) -> f64 {
    let (b1, b2, b3, b4) = (4.094, 3.335, 0.864, -6.964e-2);
    let eta1 = library::VISCOSITY_VARGAFTIK_1991.eval(t);
    eta1 * (1.0 + b3 * x2 + b4 * x2 * x2) / (1.0 + b1 * x2 + b2 * x2 * x2)
}

/// Lowest temperature (K) of the Stepanenko measurements; Eq. (5) is
/// undefined below it.
pub const STEPANENKO_T_MIN: f64 = 1500.0;

/// Viscosity (Pa·s), Stepanenko et al., Int. J. Thermophys. 7 (1986), Eq. (5).
/// `None` below [`STEPANENKO_T_MIN`].
pub fn viscosity_stepanenko_1986(x2: f64, t: f64) -> Option<f64> {
    (t >= STEPANENKO_T_MIN).then(|| 1e-7 * (178.0 - 530.0 * (x2 - 0.05) + 0.071 * (t - 1700.0)))
}

/// Thermal conductivity (W/(m·K)) including the reactive contribution,
/// Vargaftik & Yargin Eqs. (65) and (67).
pub fn conductivity_vargaftik_yargin_1985(x2: f64, t: f64) -> f64 {
    let dt = t - 1000.0;
    let t_r = 13583.0 + 0.297 * dt + 43e-6 * dt * dt;
    let lambda1 = library::CONDUCTIVITY_VARGAFTIK_YARGIN_1985.eval(t);
    lambda1
        * (1.0 - 3.84 * x2 + 13.6 * x2.powi(2) - 48.0 * x2.powi(3) + 166.0 * x2.powi(4)
            - 576.0 * x2.powi(5)
            + 1994.0 * x2.powi(6)
            + 0.095 * (t_r / t).powi(2) * (x2 * (1.0 - x2)) / (1.0 + x2).powi(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn equilibrium_fraction_tracks_voljak_table() {
        for t in [1000.0, 1200.0, 1500.0, 2000.0] {
            let model = saturated_dimer_fraction(t);
            let table = tabulated_saturated_dimer_fraction(t).unwrap();
            assert_relative_eq!(model, table, max_relative = 0.05);
        }
    }

    #[test]
    fn dimer_fraction_limits() {
        assert_eq!(dimer_fraction(0.0, 1.0), 0.0);
        let x = dimer_fraction(1e9, 1.0);
        assert!(x > 0.99 && x < 1.0);
    }

    #[test]
    fn equilibrium_constant_increases_with_temperature() {
        let k = [800.0, 1000.0, 1500.0, 2000.0].map(equilibrium_constant);
        assert!(k.windows(2).all(|w| w[1] > w[0]));
        assert_relative_eq!(k[1], 0.034_73, max_relative = 1e-3);
    }

    #[test]
    fn no_dimers_means_monomer_values() {
        let t = 1300.0;
        assert_relative_eq!(
            viscosity_vargaftik_yargin_1985(0.0, t),
            library::VISCOSITY_VARGAFTIK_YARGIN_1985.eval(t)
        );
        assert_relative_eq!(
            viscosity_vargaftik_1991(0.0, t),
            library::VISCOSITY_VARGAFTIK_1991.eval(t)
        );
        assert_relative_eq!(
            conductivity_vargaftik_yargin_1985(0.0, t),
            library::CONDUCTIVITY_VARGAFTIK_YARGIN_1985.eval(t)
        );
    }

    #[test]
    fn stepanenko_has_a_hard_lower_limit() {
        assert!(viscosity_stepanenko_1986(0.05, 1499.9).is_none());
        assert_relative_eq!(viscosity_stepanenko_1986(0.05, 1700.0).unwrap(), 1.78e-5, max_relative = 1e-12);
        // no upper cut
        assert!(viscosity_stepanenko_1986(0.2, 2200.0).is_some());
    }

    #[test]
    fn voljak_table_is_bounded() {
        assert_relative_eq!(tabulated_saturated_dimer_fraction(1000.0).unwrap(), 0.02596);
        assert!(tabulated_saturated_dimer_fraction(700.0).is_none());
    }
}
