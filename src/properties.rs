use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::correlation::Correlation;
use crate::error::LiVaporError;

// ── Property kinds ──────────────────────────────────────────────────

/// Physical property of lithium vapor that has literature correlations.
///
/// | Kind                  | SI unit  |
/// |-----------------------|----------|
/// | `VaporPressure`       | Pa       |
/// | `Viscosity`           | Pa·s     |
/// | `ThermalConductivity` | W/(m·K)  |
/// | `SelfDiffusivity`     | m²/s     |
/// | `SurfaceTension`      | N/m      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    VaporPressure,
    Viscosity,
    ThermalConductivity,
    SelfDiffusivity,
    SurfaceTension,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 5] = [
        PropertyKind::VaporPressure,
        PropertyKind::Viscosity,
        PropertyKind::ThermalConductivity,
        PropertyKind::SelfDiffusivity,
        PropertyKind::SurfaceTension,
    ];

    /// Canonical snake_case name, also accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            PropertyKind::VaporPressure       => "vapor_pressure",
            PropertyKind::Viscosity           => "viscosity",
            PropertyKind::ThermalConductivity => "thermal_conductivity",
            PropertyKind::SelfDiffusivity     => "self_diffusivity",
            PropertyKind::SurfaceTension      => "surface_tension",
        }
    }

    /// SI unit of every value returned for this property.
    pub fn unit(self) -> &'static str {
        match self {
            PropertyKind::VaporPressure       => "Pa",
            PropertyKind::Viscosity           => "Pa·s",
            PropertyKind::ThermalConductivity => "W/(m·K)",
            PropertyKind::SelfDiffusivity     => "m²/s",
            PropertyKind::SurfaceTension      => "N/m",
        }
    }
}

impl std::fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Case‑insensitive; accepts the canonical names and the short keys
/// `P`, `ETA`, `TCX`/`LAMBDA`, `D`, `SIGMA`.
impl FromStr for PropertyKind {
    type Err = LiVaporError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "VAPOR_PRESSURE" | "P" | "PSAT"            => Ok(PropertyKind::VaporPressure),
            "VISCOSITY" | "ETA" | "VIS"                => Ok(PropertyKind::Viscosity),
            "THERMAL_CONDUCTIVITY" | "TCX" | "LAMBDA"  => Ok(PropertyKind::ThermalConductivity),
            "SELF_DIFFUSIVITY" | "D" | "D11"           => Ok(PropertyKind::SelfDiffusivity),
            "SURFACE_TENSION" | "SIGMA" | "ST"         => Ok(PropertyKind::SurfaceTension),
            _ => Err(LiVaporError::UnknownProperty(s.to_string())),
        }
    }
}

// ── Source metadata ─────────────────────────────────────────────────

/// Which vapor a transport correlation describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VaporBasis {
    /// Atomic (Li) gas only.
    Monomer,
    /// Saturated vapor, Li₂ dimers included.
    Saturated,
}

/// Documented validity range of a correlation (K).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidRange {
    pub min: f64,
    pub max: f64,
}

impl ValidRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, t: f64) -> bool {
        (self.min..=self.max).contains(&t)
    }

    pub fn midpoint(&self) -> f64 {
        0.5 * (self.min + self.max)
    }
}

/// One literature correlation for one property.
#[derive(Debug, Clone)]
pub struct PropertySource {
    pub kind: PropertyKind,
    /// Label, unique among the sources of `kind`.
    pub label: &'static str,
    pub citation: &'static str,
    /// `None` when the literature gives no range.
    pub range: Option<ValidRange>,
    pub basis: VaporBasis,
    pub correlation: Correlation,
}

impl PropertySource {
    /// Evaluates the correlation in SI units.
    ///
    /// Returns `None` only for tabulated correlations outside their table.
    pub fn evaluate(&self, t: f64) -> Option<f64> {
        self.correlation.evaluate(t)
    }
}

impl std::fmt::Display for PropertySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.label, self.kind)?;
        match self.range {
            Some(r) => write!(f, " {:.2}–{:.2} K", r.min, r.max)?,
            None => write!(f, " (range not documented)")?,
        }
        write!(f, "\n  {}", self.citation)
    }
}

// ── Saturated vapor state ───────────────────────────────────────────

/// Equilibrium vapor above liquid lithium at a given temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaporProps {
    /// Temperature (K)
    pub temperature: f64,
    /// Saturation pressure (Pa)
    pub pressure: f64,
    /// Ideal‑gas number density (1/m³)
    pub number_density: f64,
    /// Mass density (kg/m³)
    pub mass_density: f64,
    /// One‑sided Langmuir flux (1/(m²·s))
    pub langmuir_flux: f64,
    /// Equilibrium Li₂ mole fraction
    pub dimer_fraction: f64,
}

impl std::fmt::Display for VaporProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "T     = {:.2} K", self.temperature)?;
        writeln!(f, "P     = {:.6e} Pa", self.pressure)?;
        writeln!(f, "n     = {:.6e} m⁻³", self.number_density)?;
        writeln!(f, "rho   = {:.6e} kg/m³", self.mass_density)?;
        writeln!(f, "Gamma = {:.6e} m⁻² s⁻¹", self.langmuir_flux)?;
        write!(f, "x2    = {:.6}", self.dimer_fraction)
    }
}
