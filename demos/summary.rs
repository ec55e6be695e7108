use livapor::{PropertyEvaluator, PropertyKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // LIVAPOR_RANGE_POLICY and LIVAPOR_<PROPERTY>_SOURCE are read from
    // the environment or a .env file.
    let li = PropertyEvaluator::from_env()?;

    // ── Registered sources ──────────────────────────────────────────
    for kind in PropertyKind::ALL {
        println!("=== {kind} ({}) ===", kind.unit());
        for source in li.sources(kind) {
            println!("{source}");
        }
        println!();
    }

    // ── Saturated vapor ─────────────────────────────────────────────
    for t in [700.0, 900.0, 1100.0, 1300.0, 1500.0] {
        let state = li.saturated_vapor(t)?;
        println!("Saturated vapor:\n{state}\n");
    }

    // ── Vapor pressure, all sources at 1000 K ───────────────────────
    for source in li.sources(PropertyKind::VaporPressure) {
        let p = li.vapor_pressure_from(source.label, 1000.0)?;
        println!("{:<22} p(1000 K) = {p:10.3} Pa", source.label);
    }
    Ok(())
}
