//! Set-null unlink scenarios.
//!
//! Focus areas: referencing rows surviving with a nulled foreign key,
//! unlinks happening before any delete, and the mix of cascading and
//! unlinking under one root.

use cull_tests::prelude::*;

#[test]
fn test_rule_survives_data_indicator_delete_with_null_fk() {
    // GIVEN a compliance rule bound to a data indicator
    let mut cascades = Cascades::new(platform_store());
    let indicator = cascades
        .store_mut()
        .insert("data_indicators", fields!())
        .unwrap();
    let rule = cascades
        .store_mut()
        .insert("compliance_rules", fields! { "indicator_id" => indicator })
        .unwrap();

    // WHEN the data indicator is deleted
    let report = cascades.cascade_delete("data_indicators", indicator).unwrap();

    // THEN the rule still exists, pointing at nothing
    assert_eq!(report.deleted_in("data_indicators"), 1);
    assert_eq!(report.unlinked_in("compliance_rules"), 1);
    let store = cascades.store();
    assert!(store.contains("compliance_rules", rule));
    assert_eq!(store.row("compliance_rules", rule).unwrap().fk("indicator_id"), None);
}

#[test]
fn test_district_delete_unlinks_schools_but_cascades_subdistricts() {
    let mut cascades = Cascades::new(platform_store());
    let district = cascades.store_mut().insert("districts", fields!()).unwrap();
    let sub = cascades
        .store_mut()
        .insert("districts", fields! { "parent_id" => district })
        .unwrap();
    let school = cascades
        .store_mut()
        .insert("schools", fields! { "district_id" => district })
        .unwrap();
    let sub_school = cascades
        .store_mut()
        .insert("schools", fields! { "district_id" => sub })
        .unwrap();

    let report = cascades.delete_district(district).unwrap();

    // Both districts are gone; both schools survive, unlinked.
    assert_eq!(report.deleted_in("districts"), 2);
    assert_eq!(report.unlinked_in("schools"), 2);
    let store = cascades.store();
    assert!(store.contains("schools", school));
    assert!(store.contains("schools", sub_school));
    assert_eq!(store.row("schools", school).unwrap().fk("district_id"), None);
    assert_eq!(store.row("schools", sub_school).unwrap().fk("district_id"), None);
}

#[test]
fn test_system_delete_unlinks_projects_that_used_it() {
    let mut cascades = Cascades::new(platform_store());
    let seeded = seed_indicator_system(cascades.store_mut());
    let project = cascades
        .store_mut()
        .insert("projects", fields! { "system_id" => seeded.system })
        .unwrap();

    let report = cascades.delete_indicator_system(seeded.system).unwrap();

    assert_eq!(report.unlinked_in("projects"), 1);
    let store = cascades.store();
    assert!(store.contains("projects", project));
    assert_eq!(store.row("projects", project).unwrap().fk("system_id"), None);
}

#[test]
fn test_element_delete_unlinks_borrowing_fields() {
    let mut cascades = Cascades::new(platform_store());
    let library = cascades
        .store_mut()
        .insert("element_libraries", fields!())
        .unwrap();
    let element = cascades
        .store_mut()
        .insert("library_elements", fields! { "library_id" => library })
        .unwrap();
    let tool = cascades.store_mut().insert("data_tools", fields!()).unwrap();
    let field = cascades
        .store_mut()
        .insert(
            "tool_fields",
            fields! { "tool_id" => tool, "element_id" => element },
        )
        .unwrap();

    let report = cascades.delete_element_library(library).unwrap();

    assert_eq!(report.deleted_in("library_elements"), 1);
    assert_eq!(report.unlinked_in("tool_fields"), 1);
    let store = cascades.store();
    assert!(store.contains("tool_fields", field));
    assert_eq!(store.row("tool_fields", field).unwrap().fk("element_id"), None);
}

#[test]
fn test_references_to_other_rows_are_left_alone() {
    let mut cascades = Cascades::new(platform_store());
    let doomed = cascades
        .store_mut()
        .insert("data_indicators", fields!())
        .unwrap();
    let kept = cascades
        .store_mut()
        .insert("data_indicators", fields!())
        .unwrap();
    let rule = cascades
        .store_mut()
        .insert("compliance_rules", fields! { "indicator_id" => kept })
        .unwrap();

    let report = cascades.cascade_delete("data_indicators", doomed).unwrap();

    assert_eq!(report.unlinked_in("compliance_rules"), 0);
    let store = cascades.store();
    assert_eq!(
        store.row("compliance_rules", rule).unwrap().fk("indicator_id"),
        Some(kept)
    );
}
