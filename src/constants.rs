//! Physical constants and scalar lithium data.
//!
//! Fundamental constants are the CODATA 2014 recommended values
//! (Rev. Mod. Phys. 88, 035009, 2016).

// ── Fundamental constants ───────────────────────────────────────────

/// Boltzmann constant (J/K)
pub const BOLTZMANN: f64 = 1.380_648_52e-23;

/// Unified atomic mass unit (kg)
pub const ATOMIC_MASS_UNIT: f64 = 1.660_539_040e-27;

/// Avogadro constant (1/mol)
pub const AVOGADRO: f64 = 6.022_140_857e23;

/// Molar gas constant (J/(mol·K))
pub const GAS_CONSTANT: f64 = 8.314_459_8;

// ── Pressure units used by the literature coefficients ─────────────

/// 1 torr in Pa
pub const TORR: f64 = 101_325.0 / 760.0;

/// 1 bar in Pa
pub const BAR: f64 = 1.0e5;

/// 1 standard atmosphere in Pa
pub const ATM: f64 = 101_325.0;

/// 1 MPa in Pa
pub const MEGAPASCAL: f64 = 1.0e6;

// ── Lithium ─────────────────────────────────────────────────────────

/// Conventional atomic weight (IUPAC 2013 technical report).
pub const ATOMIC_WEIGHT: f64 = 6.94;

/// Isotope‑averaged atomic mass (kg)
pub const ATOMIC_MASS: f64 = ATOMIC_WEIGHT * ATOMIC_MASS_UNIT;

/// Melting point (K), 180.50 °C per the CRC handbook.
pub const MELTING_POINT: f64 = 180.50 + 273.15;

/// Enthalpy of vaporization at the normal boiling point (kJ/mol).
///
/// Lange's Handbook of Chemistry, 15th ed., Table 6.4.
pub const HEAT_OF_VAPORIZATION_KJ_PER_MOL: f64 = 147.1;

/// Enthalpy of vaporization (J/mol)
pub const HEAT_OF_VAPORIZATION: f64 = HEAT_OF_VAPORIZATION_KJ_PER_MOL * 1.0e3;

/// Enthalpy of vaporization per atom (J)
pub const HEAT_OF_VAPORIZATION_PER_ATOM: f64 = HEAT_OF_VAPORIZATION / AVOGADRO;

/// Enthalpy of vaporization per unit mass (J/kg)
pub const HEAT_OF_VAPORIZATION_PER_KG: f64 = HEAT_OF_VAPORIZATION / (ATOMIC_WEIGHT * 1.0e-3);

/// Rough estimate of the liquid density (kg/m³)
pub const LIQUID_DENSITY: f64 = 500.0;

/// Solid density (kg/m³)
pub const SOLID_DENSITY: f64 = 534.0;
