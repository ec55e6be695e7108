//! # livapor
//!
//! Literature correlations for the thermophysical properties of
//! **lithium vapor**: saturation pressure, viscosity, thermal
//! conductivity, self‑diffusivity, surface tension of the liquid, and
//! the derived equilibrium density and Langmuir flux.
//!
//! ## Highlights
//!
//! * **Several sources per property**, each with its citation and
//!   documented validity range; one recommended default per property
//! * **Monomer and saturated vapor** transport data, the latter through
//!   the Li ⇌ ½ Li₂ equilibrium model
//! * **SI in, SI out**: temperatures in K, results in Pa, Pa·s, W/(m·K),
//!   m²/s, N/m
//! * **Configurable range policy**: warn, extrapolate silently, or reject
//!
//! ## Quick example
//!
//! ```
//! use livapor::{PropertyEvaluator, PropertyKind};
//!
//! let li = PropertyEvaluator::new();
//!
//! let p = li.vapor_pressure(900.0)?;                 // ≈ 12.77 Pa
//! let flux = li.langmuir_flux(900.0)?;               // ≈ 4.26e23 m⁻² s⁻¹
//! let eta = li.evaluate(PropertyKind::Viscosity, 1200.0, Some("vargaftik_1991_saturated"))?;
//! let sigma = li.get("surface_tension", 600.0, None)?;
//! # Ok::<(), livapor::LiVaporError>(())
//! ```
//!
//! ## Out‑of‑range temperatures
//!
//! By default a temperature outside a source's documented range is
//! evaluated anyway and reported through a `tracing` warning. Use
//! [`RangePolicy::Strict`] to get [`LiVaporError::OutOfRange`] instead:
//!
//! ```
//! use livapor::{EvaluatorConfig, PropertyEvaluator};
//!
//! let strict = PropertyEvaluator::with_config(EvaluatorConfig::strict())?;
//! assert!(strict.vapor_pressure(900.0).is_err()); // default source starts at 1057 K
//! # Ok::<(), livapor::LiVaporError>(())
//! ```

pub mod config;
pub mod constants;
pub mod correlation;
pub mod error;
pub mod evaluator;
pub mod library;
pub mod properties;

pub use config::{EvaluatorConfig, RangePolicy};
pub use error::{LiVaporError, Result};
pub use evaluator::PropertyEvaluator;
pub use properties::{PropertyKind, PropertySource, ValidRange, VaporBasis, VaporProps};
