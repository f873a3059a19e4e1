use pci_core::{accuracy_audit_score, verified_units, FactorSet, Task, TaskOrigin};

fn task_scoring_four_units(verified: f64) -> Task {
    let mut task = Task::new(TaskOrigin::Manual, "payment gateway integration");
    task.factors = FactorSet {
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
    task.ai_verified_units = verified;
    task
}

#[test]
fn zero_pci_scores_zero_accuracy_for_any_verified_value() {
    for verified in [0.0, 0.001, 1.0, 42.0, 1_000_000.0, -5.0] {
        assert_eq!(accuracy_audit_score(verified, 0.0), 0.0);
    }
}

#[test]
fn unscored_task_never_divides_by_zero() {
    // All-zero factors with a large learning curve clamp PCI to 0; the
    // accuracy score must follow to 0 regardless of verified units.
    let mut task = Task::new(TaskOrigin::Manual, "unscored placeholder");
    task.factors.l = 100.0;
    task.ai_verified_units = 37.0;

    assert_eq!(task.pci_units(), 0.0);
    assert_eq!(task.accuracy_audit_score(), 0.0);
    assert_eq!(task.verified_units(), 0.0);
}

#[test]
fn over_delivery_scores_above_one_hundred() {
    let task = task_scoring_four_units(8.0);
    assert_eq!(task.accuracy_audit_score(), 200.0);
}

#[test]
fn matching_verification_scores_exactly_one_hundred() {
    let task = task_scoring_four_units(4.0);
    assert_eq!(task.accuracy_audit_score(), 100.0);
}

#[test]
fn fractional_pci_keeps_the_true_ratio() {
    // PCI between 0 and 1 divides by the real value, never a floored one:
    // 1 verified unit against 0.5 PCI is 200%, not 100%.
    assert_eq!(accuracy_audit_score(1.0, 0.5), 200.0);
    assert_eq!(accuracy_audit_score(0.25, 0.5), 50.0);
}

#[test]
fn verified_units_recover_the_verified_input_for_positive_pci() {
    for verified in [0.0, 0.5, 4.0, 9.75, 123.0] {
        let task = task_scoring_four_units(verified);
        assert!(
            (task.verified_units() - verified).abs() < 1e-9,
            "verified {verified} did not round-trip through the accuracy score"
        );
    }
}

#[test]
fn verified_units_applies_the_score_back_onto_pci() {
    assert_eq!(verified_units(200.0, 4.0), 8.0);
    assert_eq!(verified_units(50.0, 4.0), 2.0);
    assert_eq!(verified_units(0.0, 4.0), 0.0);
}
