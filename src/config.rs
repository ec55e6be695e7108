//! Evaluator configuration.
//!
//! Two settings: how to treat temperatures outside a source's documented
//! range ([`RangePolicy`]) and which source each property uses when the
//! caller names none. Both can come from the environment, optionally via
//! a `.env` file:
//!
//! ```text
//! LIVAPOR_RANGE_POLICY=strict
//! LIVAPOR_VAPOR_PRESSURE_SOURCE=nist_webbook
//! LIVAPOR_VISCOSITY_SOURCE=vargaftik_1991_saturated
//! ```
//!
//! # Builder
//!
//! ```
//! use livapor::{EvaluatorConfig, PropertyKind, RangePolicy};
//!
//! let config = EvaluatorConfig::new()
//!     .range_policy(RangePolicy::Strict)
//!     .default_source(PropertyKind::VaporPressure, "alcock_1984");
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Once;

use serde::{Deserialize, Serialize};

use crate::error::{LiVaporError, Result};
use crate::properties::PropertyKind;

/// Environment variable selecting the [`RangePolicy`].
pub const RANGE_POLICY_VAR: &str = "LIVAPOR_RANGE_POLICY";

// ────────────────────────────────────────────────────────────────────
//  Range policy
// ────────────────────────────────────────────────────────────────────

/// Treatment of temperatures outside a source's documented range.
///
/// Tabulated sources are never extrapolated; outside their table they
/// fail with [`LiVaporError::OutOfRange`] whatever the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// Evaluate silently.
    Extrapolate,
    /// Evaluate and emit a `tracing` warning.
    #[default]
    Warn,
    /// Fail with [`LiVaporError::OutOfRange`].
    Strict,
}

impl FromStr for RangePolicy {
    type Err = LiVaporError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "extrapolate" | "silent" => Ok(RangePolicy::Extrapolate),
            "warn" | "warning"       => Ok(RangePolicy::Warn),
            "strict" | "error"       => Ok(RangePolicy::Strict),
            _ => Err(LiVaporError::InvalidConfig(format!(
                "{RANGE_POLICY_VAR}={s} (expected extrapolate, warn or strict)"
            ))),
        }
    }
}

// ────────────────────────────────────────────────────────────────────
//  EvaluatorConfig
// ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    pub range_policy: RangePolicy,
    /// Default‑source overrides; properties absent here use the
    /// recommended source of [`crate::library::default_label`].
    pub default_sources: BTreeMap<PropertyKind, String>,
}

impl EvaluatorConfig {
    /// Recommended sources, [`RangePolicy::Warn`].
    pub fn new() -> Self { Self::default() }

    // ── Presets ──────────────────────────────────────────────────────

    /// Recommended sources, out‑of‑range temperatures rejected.
    pub fn strict() -> Self {
        Self::new().range_policy(RangePolicy::Strict)
    }

    /// Recommended sources, silent extrapolation.
    pub fn extrapolating() -> Self {
        Self::new().range_policy(RangePolicy::Extrapolate)
    }

    // ── Builder methods ─────────────────────────────────────────────

    pub fn range_policy(mut self, policy: RangePolicy) -> Self { self.range_policy = policy; self }

    pub fn default_source(mut self, kind: PropertyKind, label: impl Into<String>) -> Self {
        self.default_sources.insert(kind, label.into());
        self
    }

    // ── Environment ─────────────────────────────────────────────────

    /// Name of the variable overriding the default source of `kind`,
    /// e.g. `LIVAPOR_THERMAL_CONDUCTIVITY_SOURCE`.
    pub fn source_var(kind: PropertyKind) -> String {
        format!("LIVAPOR_{}_SOURCE", kind.name().to_uppercase())
    }

    /// Reads the configuration from the process environment, after
    /// loading a `.env` file if one is found.
    pub fn from_env() -> Result<Self> {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    /// Unset or empty variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::new();
        if let Some(policy) = get(RANGE_POLICY_VAR) {
            config.range_policy = policy.parse()?;
        }
        for kind in PropertyKind::ALL {
            if let Some(label) = get(&Self::source_var(kind)) {
                config.default_sources.insert(kind, label.trim().to_string());
            }
        }
        Ok(config)
    }
}

// ── .env loading (once) ──────────────────────────────────────────────

fn load_dotenv() {
    static DOTENV_INIT: Once = Once::new();
    DOTENV_INIT.call_once(|| {
        if dotenvy::dotenv().is_ok() { return; }
        if let Ok(dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let p = std::path::PathBuf::from(dir).join(".env");
            if p.exists() { let _ = dotenvy::from_path(&p); }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = EvaluatorConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, EvaluatorConfig::default());
        assert_eq!(config.range_policy, RangePolicy::Warn);
    }

    #[test]
    fn reads_policy_and_source_overrides() {
        let config = EvaluatorConfig::from_lookup(lookup(&[
            ("LIVAPOR_RANGE_POLICY", " Strict "),
            ("LIVAPOR_VAPOR_PRESSURE_SOURCE", "nist_webbook"),
            ("LIVAPOR_SURFACE_TENSION_SOURCE", ""),
        ]))
        .unwrap();
        assert_eq!(config.range_policy, RangePolicy::Strict);
        assert_eq!(
            config.default_sources.get(&PropertyKind::VaporPressure).map(String::as_str),
            Some("nist_webbook")
        );
        assert!(!config.default_sources.contains_key(&PropertyKind::SurfaceTension));
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = EvaluatorConfig::from_lookup(lookup(&[("LIVAPOR_RANGE_POLICY", "sometimes")]));
        assert!(matches!(err, Err(LiVaporError::InvalidConfig(_))));
    }

    #[test]
    fn source_variable_names() {
        assert_eq!(
            EvaluatorConfig::source_var(PropertyKind::SelfDiffusivity),
            "LIVAPOR_SELF_DIFFUSIVITY_SOURCE"
        );
    }

    #[test]
    fn presets() {
        assert_eq!(EvaluatorConfig::strict().range_policy, RangePolicy::Strict);
        assert_eq!(EvaluatorConfig::extrapolating().range_policy, RangePolicy::Extrapolate);
    }
}
