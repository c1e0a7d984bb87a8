//! Batch cascade scenarios.
//!
//! Focus areas: per-table counts summed across a batch, absent ids being
//! no-ops, and a mid-batch failure surfacing the counts already applied.

use cull_tests::prelude::*;

#[test]
fn test_batch_sums_counts_across_roots() {
    let mut cascades = Cascades::new(platform_store());
    let first = seed_indicator_system(cascades.store_mut());
    let second = seed_indicator_system(cascades.store_mut());

    let report = cascades
        .batch_cascade_delete("indicator_systems", &[first.system, second.system])
        .unwrap();

    assert_eq!(report.deleted_in("indicator_systems"), 2);
    assert_eq!(report.deleted_in("indicators"), 4);
    assert_eq!(report.deleted_in("data_indicators"), 2);
    assert_eq!(report.total_deleted(), 10);
}

#[test]
fn test_absent_id_in_batch_is_a_noop() {
    // GIVEN two ids, the second of which does not exist
    let mut cascades = Cascades::new(platform_store());
    let school = cascades.store_mut().insert("schools", fields!()).unwrap();

    // WHEN both are batch-deleted
    let report = cascades
        .batch_cascade_delete("schools", &[school, RowId::new(4040)])
        .unwrap();

    // THEN only the real school counts; the missing id raises nothing
    assert_eq!(report.deleted_in("schools"), 1);
}

#[test]
fn test_mid_batch_failure_reports_applied_counts() {
    // Two childless schools; the store allows exactly one delete call, so
    // the first cascade lands and the second aborts.
    let mut store = platform_store();
    let s1 = store.insert("schools", fields!()).unwrap();
    let s2 = store.insert("schools", fields!()).unwrap();
    let mut flaky = FailingDeletes::after(store, 1);

    let schema = platform_schema();
    let result = CascadeEngine::new(&schema).delete_many(&mut flaky, "schools", &[s1, s2]);

    match result {
        Err(CascadeError::BatchAborted { at, applied, .. }) => {
            assert_eq!(at, s2);
            assert_eq!(applied.deleted_in("schools"), 1);
        }
        other => panic!("expected BatchAborted, got {:?}", other),
    }

    // The first cascade stays applied.
    assert!(!flaky.inner.contains("schools", s1));
    assert!(flaky.inner.contains("schools", s2));
}
