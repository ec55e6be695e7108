//! Registry of literature sources.
//!
//! All sources are built once, on first access, from the static
//! coefficient sets and tables below. Labels are unique per property.

use std::sync::LazyLock;

use crate::constants::{ATM, BAR, MEGAPASCAL, MELTING_POINT, TORR};
use crate::correlation::{Correlation, Formula, SaturatedModel, Table};
use crate::properties::{PropertyKind, PropertySource, ValidRange, VaporBasis};

use PropertyKind::*;
use VaporBasis::*;

// ── Citations ───────────────────────────────────────────────────────

const VARGAFTIK_YARGIN_1985: &str = "Vargaftik, N. B., Yargin, V. S. Ch. 7.4: Thermal Conductivity and \
     Viscosity of the Gaseous Phase. Handbook of Thermodynamic and Transport Properties of \
     Alkali Metals, ed. R. W. Ohse. Blackwell Scientific Publications, 1985";
const VARGAFTIK_1991: &str = "Vargaftik, N. B., et al. Viscosity and Thermal Conductivity of \
     Alkali Metal Vapors at Temperatures up to 2000 K. Int. J. Thermophys. 12 (1991) 85–103";
const BOULEDROUA_2005: &str = "Bouledroua, M., Dalgarno, A., Côté, R. Viscosity and Thermal \
     Conductivity of Li, Na, and K Gases. Physica Scripta 71 (2005) 519–522";
const FIALHO_1993: &str = "Fialho, P. S., et al. Thermophysical Properties of Alkali Metal \
     Vapours, Part I.A. Ber. Bunsenges. Phys. Chem. 97 (1993) 1487–1492";
const STEPANENKO_1986: &str = "Stepanenko, I. F., et al. Experimental Study of the Viscosity of \
     Lithium Vapor at High Temperatures. Int. J. Thermophys. 7 (1986) 829–835";

// ── Correlations shared with the dimer model ────────────────────────

/// Browning & Potter (1985), Eq. (2): `ln P[MPa] = 13.0719 − 18880.659/T − 0.4942 ln T`.
pub(crate) const BROWNING_POTTER_1985: Formula = Formula::LnKirchhoff {
    a: 13.0719,
    b: -18880.659,
    c: -0.4942,
    scale: MEGAPASCAL,
};

/// Vargaftik & Yargin (1985), Eq. (56), monomer viscosity in 10⁻⁷ Pa·s.
pub(crate) const VISCOSITY_VARGAFTIK_YARGIN_1985: Formula = Formula::Polynomial {
    t_ref: 1000.0,
    coefficients: &[130.6, 0.1014, -4.55e-6],
    scale: 1e-7,
};

/// Vargaftik et al. (1991), Eq. (6), monomer viscosity in 10⁻⁷ Pa·s.
pub(crate) const VISCOSITY_VARGAFTIK_1991: Formula = Formula::Polynomial {
    t_ref: 1000.0,
    coefficients: &[129.1, 0.100],
    scale: 1e-7,
};

/// Vargaftik & Yargin (1985), Eq. (66), monomer conductivity in 10⁻⁴ W/(m·K).
pub(crate) const CONDUCTIVITY_VARGAFTIK_YARGIN_1985: Formula = Formula::Polynomial {
    t_ref: 1000.0,
    coefficients: &[587.7, 0.4562, -20.5e-6],
    scale: 1e-4,
};

// ── Tables ──────────────────────────────────────────────────────────

const fn steps<const N: usize>(start: f64, step: f64) -> [f64; N] {
    let mut out = [0.0; N];
    let mut i = 0;
    while i < N {
        out[i] = start + step * i as f64;
        i += 1;
    }
    out
}

static T_700_2000_BY_25: [f64; 53] = steps(700.0, 25.0);
static T_800_2500_BY_100: [f64; 18] = steps(800.0, 100.0);
static T_700_2000_BY_100: [f64; 14] = steps(700.0, 100.0);
static T_200_2000_BY_200: [f64; 10] = steps(200.0, 200.0);
static T_700_1200_BY_100: [f64; 6] = steps(700.0, 100.0);

/// Vargaftik & Yargin Table 36, saturated vapor viscosity (10⁻⁷ Pa·s).
static ETA_SAT_VY_1985: [f64; 53] = [
    98.6, 100.9, 103.0, 105.0, 107.0, 108.9, 110.6, 112.3, 113.8, 115.3, 116.6, 117.8, 119.0,
    120.0, 121.0, 121.9, 122.7, 123.4, 124.1, 124.7, 125.3, 125.8, 126.2, 126.7, 127.1, 127.4,
    127.8, 128.1, 128.4, 128.7, 129.0, 129.3, 129.6, 129.9, 130.2, 130.5, 130.7, 131.0, 131.3,
    131.7, 132.0, 132.3, 132.6, 133.0, 133.3, 133.7, 134.1, 134.4, 134.8, 135.2, 135.6, 136.0,
    136.4,
];

/// Vargaftik & Yargin Table 37, saturated vapor conductivity (10⁻⁴ W/(m·K)).
static LAMBDA_SAT_VY_1985: [f64; 53] = [
    497.2, 519.0, 541.6, 565.1, 589.2, 613.9, 638.8, 664.0, 689.2, 714.3, 739.2, 763.6, 787.4,
    810.6, 833.1, 854.6, 875.3, 895.0, 913.6, 931.2, 947.8, 963.3, 977.7, 991.0, 1003.4, 1014.8,
    1025.2, 1034.6, 1043.3, 1051.0, 1058.0, 1064.3, 1069.9, 1074.8, 1079.1, 1082.9, 1086.1,
    1088.9, 1091.2, 1093.2, 1094.8, 1096.0, 1097.0, 1097.7, 1098.1, 1098.3, 1098.3, 1098.2,
    1097.8, 1097.3, 1096.7, 1096.0, 1095.1,
];

/// Vargaftik et al. (1991) Table IV, monomer viscosity (10⁻⁷ Pa·s).
static ETA1_V_1991: [f64; 18] = [
    100.0, 112.0, 123.0, 134.0, 145.0, 155.0, 166.0, 176.0, 186.0, 196.0, 205.0, 215.0, 224.0,
    233.0, 242.0, 250.0, 260.0, 268.0,
];

/// Vargaftik et al. (1991) Table IV, saturated vapor viscosity (10⁻⁷ Pa·s).
static ETA_SAT_V_1991: [f64; 18] = [
    97.2, 106.0, 113.0, 118.0, 123.0, 126.0, 129.0, 131.0, 133.0, 135.0, 137.0, 139.0, 140.0,
    141.0, 143.0, 144.0, 146.0, 147.0,
];

/// Vargaftik et al. (1991) Table III, monomer conductivity (10⁻⁴ W/(m·K)).
static LAMBDA1_V_1991: [f64; 18] = [
    450.0, 506.0, 558.0, 607.0, 655.0, 701.0, 745.0, 790.0, 834.0, 878.0, 921.0, 965.0, 1008.0,
    1050.0, 1092.0, 1131.0, 1169.0, 1203.0,
];

/// Vargaftik et al. (1991) Table III, saturated vapor conductivity (10⁻⁴ W/(m·K)).
static LAMBDA_SAT_V_1991: [f64; 18] = [
    543.0, 652.0, 753.0, 841.0, 913.0, 966.0, 1003.0, 1029.0, 1045.0, 1055.0, 1058.0, 1058.0,
    1054.0, 1048.0, 1041.0, 1031.0, 1020.0, 1006.0,
];

/// Bouledroua et al. Tables I and IV, monomer viscosity (µP = 10⁻⁷ Pa·s).
static ETA1_BOULEDROUA: [f64; 10] = [23.0, 49.0, 75.0, 100.0, 123.0, 144.0, 164.0, 184.0, 202.0, 221.0];

/// Bouledroua et al. Table V, monomer conductivity (10⁻³ W/(m·K)).
static LAMBDA1_BOULEDROUA: [f64; 10] = [
    10.31, 21.97, 33.63, 44.84, 55.15, 64.57, 73.54, 82.51, 90.58, 99.10,
];

/// Fialho et al. monomer viscosity (µPa·s).
static ETA1_FIALHO: [f64; 14] = [
    8.56, 9.71, 10.82, 11.89, 12.93, 13.93, 14.91, 15.86, 16.80, 17.72, 18.63, 19.53, 20.41, 21.30,
];

/// Fialho et al. Table 3, self‑diffusion at 0.10 MPa (cm²/s).
static D11_FIALHO: [f64; 6] = [0.8885, 1.1491, 1.4393, 1.7589, 2.1077, 2.4859];

// ── Registry ────────────────────────────────────────────────────────

fn formula(
    kind: PropertyKind,
    label: &'static str,
    citation: &'static str,
    range: Option<(f64, f64)>,
    basis: VaporBasis,
    correlation: impl Into<Correlation>,
) -> PropertySource {
    PropertySource {
        kind,
        label,
        citation,
        range: range.map(|(min, max)| ValidRange::new(min, max)),
        basis,
        correlation: correlation.into(),
    }
}

/// Tabulated source; its range is the table span.
fn tabulated(
    kind: PropertyKind,
    label: &'static str,
    citation: &'static str,
    basis: VaporBasis,
    table: Table,
) -> PropertySource {
    let (min, max) = table.span();
    PropertySource {
        kind,
        label,
        citation,
        range: Some(ValidRange::new(min, max)),
        basis,
        correlation: Correlation::Tabulated(table),
    }
}

fn vapor_pressure_sources() -> Vec<PropertySource> {
    vec![
        formula(
            VaporPressure,
            "browning_potter_1985",
            "Browning, P., Potter, P. E. Assessment of the Experimentally Determined Vapour \
             Pressures of the Liquid Alkali Metals. Handbook of Thermodynamic and Transport \
             Properties of Alkali Metals, 349–358, 1985. Sec. 6.2, Eq. (2)",
            Some((1057.0, 2156.0)),
            Saturated,
            BROWNING_POTTER_1985,
        ),
        formula(
            VaporPressure,
            "alcock_1984",
            "Alcock, C. B., Itkin, V. P., Horrigan, M. K. Vapour pressure equations for the \
             metallic elements 298–2500 K. Canadian Metallurgical Quarterly 23 (1984) 309–313",
            Some((MELTING_POINT, 1000.0)),
            Saturated,
            Formula::Antoine { a: 5.055, b: -8023.0, c: 0.0, scale: ATM },
        ),
        formula(
            VaporPressure,
            "bohdansky_1967",
            "Bohdansky, J. Vapor pressure of different metals in the pressure range of 50 to \
             4000 torr. J. Phys. Chem. 71 (1967) 215–217. Table III",
            Some((1374.0, 1881.0)),
            Saturated,
            Formula::Antoine { a: 7.67, b: -7740.0, c: 0.0, scale: TORR },
        ),
        formula(
            VaporPressure,
            "nist_webbook",
            "NIST Chemistry WebBook, Antoine fit to Hicks, W. T. Evaluation of Vapor-Pressure \
             Data for Mercury, Lithium, Sodium, and Potassium. J. Chem. Phys. 38 (1963) 1873",
            Some((298.14, 1599.99)),
            Saturated,
            Formula::Antoine { a: 4.98831, b: -7918.984, c: -9.52, scale: BAR },
        ),
        formula(
            VaporPressure,
            "davison_1968",
            "Davison, H. W. Compilation of Thermophysical Properties of Liquid Lithium. \
             NASA TN D-4650, 1968",
            Some((800.0, 1800.0)),
            Saturated,
            Formula::Antoine { a: 10.015, b: -8064.5, c: 0.0, scale: 1.0 },
        ),
        formula(
            VaporPressure,
            "maucherat_1939",
            "Maucherat, M. Pression de vapeur saturante du lithium entre 462 °C et 642 °C. \
             J. Phys. Radium 10 (1939) 441–444",
            Some((735.0, 915.0)),
            Saturated,
            Formula::Antoine { a: 8.012, b: -8172.0, c: 0.0, scale: TORR },
        ),
        formula(
            VaporPressure,
            "yargin_sidorov_1982",
            "Yargin, V. S., Sidorov, N. I., Studnikov, E. L., Vinogradov, Yu. K. Transport \
             properties of saturated lithium vapor. Inzh.-Fiz. Zh. 43 (1982) 494",
            Some((1050.0, 1700.0)),
            Saturated,
            Formula::Log10Extended {
                a: 8.5088,
                b: -8363.0,
                c: -1.02573,
                d: -1.3091e-4,
                e: 1.08872,
                f: -2940.0,
                scale: ATM,
            },
        ),
        formula(
            VaporPressure,
            "golubchikov_1996",
            "Golubchikov, L. G., et al. Development of a Liquid-Metal Fusion Reactor Divertor \
             with a Capillary-Pore System. J. Nucl. Mater. 233 (1996) 667–672",
            Some((453.0, 1573.0)),
            Saturated,
            Formula::Log10Kirchhoff { a: 12.4037, b: -8283.1, c: -0.7081, scale: 1.0 },
        ),
        formula(
            VaporPressure,
            "bystrov_1988",
            "Bystrov, P. I., Kagan, D. N., Krechtova, G. A., Shpilrain, E. E. Liquid Metal Heat \
             Carriers, Thermal Pipes and Power Installations. Science, Moscow, 1988",
            Some((700.0, 2000.0)),
            Saturated,
            Formula::ReducedLn {
                t_ref: 1000.0,
                c: -2.0532,
                am1: -19.4268,
                a0: 9.4993,
                a1: 0.7530,
                scale: MEGAPASCAL,
            },
        ),
        formula(
            VaporPressure,
            "jsme_data_book",
            "JSME Data Book: Heat Transfer, 5th ed. Maruzen, Tokyo, 2009. Antoine fit",
            None,
            Saturated,
            Formula::Antoine { a: 9.94079, b: -8001.8, c: 6.676, scale: 1.0 },
        ),
    ]
}

fn viscosity_sources() -> Vec<PropertySource> {
    vec![
        formula(
            Viscosity,
            "vargaftik_yargin_1985",
            VARGAFTIK_YARGIN_1985,
            Some((700.0, 2500.0)),
            Monomer,
            VISCOSITY_VARGAFTIK_YARGIN_1985,
        ),
        formula(
            Viscosity,
            "vargaftik_1991",
            VARGAFTIK_1991,
            Some((800.0, 2000.0)),
            Monomer,
            VISCOSITY_VARGAFTIK_1991,
        ),
        formula(
            Viscosity,
            "bouledroua_2005",
            BOULEDROUA_2005,
            Some((200.0, 2000.0)),
            Monomer,
            Formula::PowerLaw { prefactor: 0.234, exponent: 0.903, scale: 1e-7 },
        ),
        tabulated(
            Viscosity,
            "bouledroua_2005_table",
            BOULEDROUA_2005,
            Monomer,
            Table::new(&T_200_2000_BY_200, &ETA1_BOULEDROUA, 1e-7),
        ),
        tabulated(
            Viscosity,
            "vargaftik_1991_table",
            VARGAFTIK_1991,
            Monomer,
            Table::new(&T_800_2500_BY_100, &ETA1_V_1991, 1e-7),
        ),
        tabulated(
            Viscosity,
            "fialho_1993_table",
            FIALHO_1993,
            Monomer,
            Table::new(&T_700_2000_BY_100, &ETA1_FIALHO, 1e-6),
        ),
        formula(
            Viscosity,
            "vargaftik_yargin_1985_saturated",
            VARGAFTIK_YARGIN_1985,
            Some((700.0, 2000.0)),
            Saturated,
            Correlation::Saturated(SaturatedModel::ViscosityVargaftikYargin1985),
        ),
        tabulated(
            Viscosity,
            "vargaftik_yargin_1985_saturated_table",
            VARGAFTIK_YARGIN_1985,
            Saturated,
            Table::new(&T_700_2000_BY_25, &ETA_SAT_VY_1985, 1e-7),
        ),
        formula(
            Viscosity,
            "vargaftik_1991_saturated",
            VARGAFTIK_1991,
            Some((800.0, 2000.0)),
            Saturated,
            Correlation::Saturated(SaturatedModel::ViscosityVargaftik1991),
        ),
        tabulated(
            Viscosity,
            "vargaftik_1991_saturated_table",
            VARGAFTIK_1991,
            Saturated,
            Table::new(&T_800_2500_BY_100, &ETA_SAT_V_1991, 1e-7),
        ),
        formula(
            Viscosity,
            "stepanenko_1986_saturated",
            STEPANENKO_1986,
            Some((1500.0, 2000.0)),
            Saturated,
            Correlation::Saturated(SaturatedModel::ViscosityStepanenko1986),
        ),
    ]
}

fn conductivity_sources() -> Vec<PropertySource> {
    vec![
        formula(
            ThermalConductivity,
            "vargaftik_yargin_1985",
            VARGAFTIK_YARGIN_1985,
            Some((700.0, 2500.0)),
            Monomer,
            CONDUCTIVITY_VARGAFTIK_YARGIN_1985,
        ),
        formula(
            ThermalConductivity,
            "vargaftik_1991",
            VARGAFTIK_1991,
            Some((800.0, 2000.0)),
            Monomer,
            Formula::Polynomial { t_ref: 1000.0, coefficients: &[541.0, 0.485], scale: 1e-4 },
        ),
        tabulated(
            ThermalConductivity,
            "vargaftik_1991_table",
            VARGAFTIK_1991,
            Monomer,
            Table::new(&T_800_2500_BY_100, &LAMBDA1_V_1991, 1e-4),
        ),
        tabulated(
            ThermalConductivity,
            "bouledroua_2005_table",
            BOULEDROUA_2005,
            Monomer,
            Table::new(&T_200_2000_BY_200, &LAMBDA1_BOULEDROUA, 1e-3),
        ),
        formula(
            ThermalConductivity,
            "vargaftik_yargin_1985_saturated",
            VARGAFTIK_YARGIN_1985,
            Some((700.0, 2500.0)),
            Saturated,
            Correlation::Saturated(SaturatedModel::ConductivityVargaftikYargin1985),
        ),
        tabulated(
            ThermalConductivity,
            "vargaftik_yargin_1985_saturated_table",
            VARGAFTIK_YARGIN_1985,
            Saturated,
            Table::new(&T_700_2000_BY_25, &LAMBDA_SAT_VY_1985, 1e-4),
        ),
        tabulated(
            ThermalConductivity,
            "vargaftik_1991_saturated_table",
            VARGAFTIK_1991,
            Saturated,
            Table::new(&T_800_2500_BY_100, &LAMBDA_SAT_V_1991, 1e-4),
        ),
    ]
}

fn diffusivity_sources() -> Vec<PropertySource> {
    vec![tabulated(
        SelfDiffusivity,
        "fialho_1993_table",
        FIALHO_1993,
        Monomer,
        Table::new(&T_700_1200_BY_100, &D11_FIALHO, 1e-4),
    )]
}

fn surface_tension_sources() -> Vec<PropertySource> {
    vec![formula(
        SurfaceTension,
        "davison_1968",
        "Davison, H. W. Compilation of Thermophysical Properties of Liquid Lithium. \
         NASA TN D-4650, 1968",
        None,
        Saturated,
        Formula::Polynomial { t_ref: 0.0, coefficients: &[0.447, -1.07e-4, -1.351e-8], scale: 1.0 },
    )]
}

static REGISTRY: LazyLock<Vec<PropertySource>> = LazyLock::new(|| {
    let mut all = vapor_pressure_sources();
    all.extend(viscosity_sources());
    all.extend(conductivity_sources());
    all.extend(diffusivity_sources());
    all.extend(surface_tension_sources());
    all
});

// ── Lookup ──────────────────────────────────────────────────────────

/// Every registered source, grouped by property.
pub fn all() -> &'static [PropertySource] {
    &REGISTRY
}

/// Sources registered for `kind`.
pub fn sources(kind: PropertyKind) -> impl Iterator<Item = &'static PropertySource> {
    REGISTRY.iter().filter(move |s| s.kind == kind)
}

pub fn find(kind: PropertyKind, label: &str) -> Option<&'static PropertySource> {
    sources(kind).find(|s| s.label == label)
}

/// Label of the recommended source for `kind`.
pub fn default_label(kind: PropertyKind) -> &'static str {
    match kind {
        VaporPressure       => "browning_potter_1985",
        Viscosity           => "vargaftik_yargin_1985",
        ThermalConductivity => "vargaftik_yargin_1985",
        SelfDiffusivity     => "fialho_1993_table",
        SurfaceTension      => "davison_1968",
    }
}
