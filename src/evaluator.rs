use std::f64::consts::PI;

use crate::config::{EvaluatorConfig, RangePolicy};
use crate::constants::{ATOMIC_MASS, BOLTZMANN, HEAT_OF_VAPORIZATION};
use crate::correlation::dimer;
use crate::error::*;
use crate::library;
use crate::properties::*;

/// Entry point for lithium‑vapor property lookups.
///
/// Temperatures are in K and every result is in SI units (see
/// [`PropertyKind::unit`]). Each property has several literature
/// sources; calls without a source label use the configured default.
///
/// ```
/// use livapor::PropertyEvaluator;
///
/// let li = PropertyEvaluator::new();
/// let p = li.vapor_pressure(900.0)?;
/// println!("p_sat(900 K) = {p:.2} Pa");
///
/// let p_alcock = li.vapor_pressure_from("alcock_1984", 900.0)?;
/// # Ok::<(), livapor::LiVaporError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyEvaluator {
    config: EvaluatorConfig,
}

impl PropertyEvaluator {
    // ── Constructors ─────────────────────────────────────────────────

    /// Recommended sources, out‑of‑range temperatures logged as warnings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluator with an explicit configuration.
    ///
    /// Fails with [`LiVaporError::UnknownSource`] if a default‑source
    /// override names an unregistered label.
    pub fn with_config(config: EvaluatorConfig) -> Result<Self> {
        for (&kind, label) in &config.default_sources {
            if library::find(kind, label).is_none() {
                return Err(LiVaporError::UnknownSource { property: kind, label: label.clone() });
            }
        }
        Ok(Self { config })
    }

    /// Evaluator configured from `LIVAPOR_*` environment variables
    /// (and a `.env` file, if present).
    pub fn from_env() -> Result<Self> {
        Self::with_config(EvaluatorConfig::from_env()?)
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    // ── Registry ─────────────────────────────────────────────────────

    /// Sources registered for `kind`.
    pub fn sources(&self, kind: PropertyKind) -> impl Iterator<Item = &'static PropertySource> {
        library::sources(kind)
    }

    /// Source `label` of `kind`, or the configured default when `None`.
    pub fn source(&self, kind: PropertyKind, label: Option<&str>) -> Result<&'static PropertySource> {
        let label = label.unwrap_or_else(|| self.default_label(kind));
        library::find(kind, label).ok_or_else(|| LiVaporError::UnknownSource {
            property: kind,
            label: label.to_string(),
        })
    }

    /// Source used for `kind` when the caller names none.
    pub fn default_source(&self, kind: PropertyKind) -> Result<&'static PropertySource> {
        self.source(kind, None)
    }

    fn default_label(&self, kind: PropertyKind) -> &str {
        self.config
            .default_sources
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| library::default_label(kind))
    }

    // ── Generic evaluation ───────────────────────────────────────────

    /// Evaluates `kind` at temperature `t` (K) with source `label`, or
    /// with the default source when `label` is `None`.
    ///
    /// Outside the source's documented range the configured
    /// [`RangePolicy`] applies. Where the correlation itself is undefined
    /// (a table outside its span, Stepanenko below 1500 K) the call fails
    /// with [`LiVaporError::OutOfRange`] under every policy.
    pub fn evaluate(&self, kind: PropertyKind, t: f64, label: Option<&str>) -> Result<f64> {
        Self::validate_temperature(t)?;
        let source = self.source(kind, label)?;
        let value = source.evaluate(t).ok_or_else(|| Self::out_of_range(source, t))?;
        self.check_range(source, t)?;
        Ok(value)
    }

    /// **String‑keyed lookup**, e.g. `get("viscosity", 1200.0, None)` or
    /// `get("P", 900.0, Some("nist_webbook"))`.
    pub fn get(&self, property: &str, t: f64, label: Option<&str>) -> Result<f64> {
        self.evaluate(property.parse()?, t, label)
    }

    // ── Per‑property shortcuts ───────────────────────────────────────

    /// Saturation vapor pressure (Pa).
    pub fn vapor_pressure(&self, t: f64) -> Result<f64> {
        self.evaluate(PropertyKind::VaporPressure, t, None)
    }

    pub fn vapor_pressure_from(&self, label: &str, t: f64) -> Result<f64> {
        self.evaluate(PropertyKind::VaporPressure, t, Some(label))
    }

    /// Dynamic viscosity (Pa·s).
    pub fn viscosity(&self, t: f64) -> Result<f64> {
        self.evaluate(PropertyKind::Viscosity, t, None)
    }

    pub fn viscosity_from(&self, label: &str, t: f64) -> Result<f64> {
        self.evaluate(PropertyKind::Viscosity, t, Some(label))
    }

    /// Thermal conductivity (W/(m·K)).
    pub fn thermal_conductivity(&self, t: f64) -> Result<f64> {
        self.evaluate(PropertyKind::ThermalConductivity, t, None)
    }

    pub fn thermal_conductivity_from(&self, label: &str, t: f64) -> Result<f64> {
        self.evaluate(PropertyKind::ThermalConductivity, t, Some(label))
    }

    /// Self‑diffusion coefficient (m²/s).
    pub fn self_diffusivity(&self, t: f64) -> Result<f64> {
        self.evaluate(PropertyKind::SelfDiffusivity, t, None)
    }

    pub fn self_diffusivity_from(&self, label: &str, t: f64) -> Result<f64> {
        self.evaluate(PropertyKind::SelfDiffusivity, t, Some(label))
    }

    /// Surface tension of the liquid (N/m).
    pub fn surface_tension(&self, t: f64) -> Result<f64> {
        self.evaluate(PropertyKind::SurfaceTension, t, None)
    }

    pub fn surface_tension_from(&self, label: &str, t: f64) -> Result<f64> {
        self.evaluate(PropertyKind::SurfaceTension, t, Some(label))
    }

    // ── Derived quantities ───────────────────────────────────────────

    /// Equilibrium number density of the vapor (m⁻³), ideal gas.
    pub fn vapor_number_density(&self, t: f64) -> Result<f64> {
        Ok(self.vapor_pressure(t)? / (BOLTZMANN * t))
    }

    /// Equilibrium mass density of the vapor (kg/m³), monatomic ideal gas.
    pub fn vapor_mass_density(&self, t: f64) -> Result<f64> {
        Ok(ATOMIC_MASS * self.vapor_number_density(t)?)
    }

    /// One‑sided equilibrium Langmuir flux (m⁻² s⁻¹) of the default
    /// vapor pressure source.
    ///
    /// `Γ = p / sqrt(2π m k_B T)`
    pub fn langmuir_flux(&self, t: f64) -> Result<f64> {
        Ok(Self::flux_from_pressure(self.vapor_pressure(t)?, t))
    }

    /// Langmuir flux (m⁻² s⁻¹) of vapor pressure source `label`.
    pub fn langmuir_flux_from(&self, label: &str, t: f64) -> Result<f64> {
        Ok(Self::flux_from_pressure(self.vapor_pressure_from(label, t)?, t))
    }

    /// Saturated vapor state at temperature `t` (K). The dimer fraction
    /// follows from the same vapor pressure as the other fields.
    pub fn saturated_vapor(&self, t: f64) -> Result<VaporProps> {
        let pressure = self.vapor_pressure(t)?;
        let number_density = pressure / (BOLTZMANN * t);
        Ok(VaporProps {
            temperature: t,
            pressure,
            number_density,
            mass_density: ATOMIC_MASS * number_density,
            langmuir_flux: Self::flux_from_pressure(pressure, t),
            dimer_fraction: dimer::dimer_fraction(pressure / 1000.0, dimer::equilibrium_constant(t)),
        })
    }

    // ── Constants ────────────────────────────────────────────────────

    /// Isotope‑averaged atomic mass (kg).
    pub fn atomic_mass(&self) -> f64 {
        ATOMIC_MASS
    }

    /// Heat of vaporization (J/mol).
    pub fn heat_of_vaporization(&self) -> f64 {
        HEAT_OF_VAPORIZATION
    }

    // ── Internal helpers ─────────────────────────────────────────────

    fn flux_from_pressure(p: f64, t: f64) -> f64 {
        p / (2.0 * PI * ATOMIC_MASS * BOLTZMANN * t).sqrt()
    }

    fn validate_temperature(t: f64) -> Result<()> {
        if !t.is_finite() || t <= 0.0 {
            return Err(LiVaporError::InvalidInput(format!(
                "temperature must be a finite number of kelvin above zero, got {t}"
            )));
        }
        Ok(())
    }

    fn check_range(&self, source: &PropertySource, t: f64) -> Result<()> {
        let Some(range) = source.range else { return Ok(()) };
        if range.contains(t) || !source.correlation.extrapolates() {
            return Ok(());
        }
        match self.config.range_policy {
            RangePolicy::Extrapolate => Ok(()),
            RangePolicy::Warn => {
                tracing::warn!(
                    property = %source.kind,
                    source = source.label,
                    temperature = t,
                    min = range.min,
                    max = range.max,
                    "extrapolating correlation outside its documented range"
                );
                Ok(())
            }
            RangePolicy::Strict => Err(Self::out_of_range(source, t)),
        }
    }

    fn out_of_range(source: &PropertySource, t: f64) -> LiVaporError {
        let (min, max) = source.range.map_or((f64::NAN, f64::NAN), |r| (r.min, r.max));
        LiVaporError::OutOfRange {
            property: source.kind,
            label: source.label.to_string(),
            temperature: t,
            min,
            max,
        }
    }
}
