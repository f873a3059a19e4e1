//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pci_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use pci_core::FactorSet;

fn main() {
    println!("pci_core ping={}", pci_core::ping());
    println!("pci_core version={}", pci_core::core_version());
    println!("pci_core default_log_level={}", pci_core::default_log_level());

    // Fixed factor sample so the binary also exercises the scoring path.
    let factors = FactorSet {
        isr: 1.0,
        cf: 1.0,
        uxi: 1.0,
        rcf: 1.0,
        aep: 1.0,
        l: 0.0,
        mlw: 1.0,
        cgw: 1.0,
        rf: 1.0,
        s: 1.0,
        glri: 1.0,
    };
    println!("pci_core sample_pci_units={}", pci_core::pci_units(&factors));
}
