//! Data-tool cascade scenarios.
//!
//! Focus areas: the field diamond (fields reachable both directly from the
//! tool and through their section), and submissions reachable from two
//! different roots.

use cull_tests::prelude::*;

fn seed_tool(store: &mut MemStore) -> (RowId, RowId, RowId) {
    let tool = store.insert("data_tools", fields!()).unwrap();
    let section = store
        .insert("tool_sections", fields! { "tool_id" => tool })
        .unwrap();
    // Fields reference both their tool and their section.
    let field = store
        .insert(
            "tool_fields",
            fields! { "tool_id" => tool, "section_id" => section },
        )
        .unwrap();
    (tool, section, field)
}

#[test]
fn test_field_diamond_counts_each_row_once() {
    let mut cascades = Cascades::new(platform_store());
    let (tool, section, field) = seed_tool(cascades.store_mut());

    let report = cascades.delete_data_tool(tool).unwrap();

    // One field, reachable twice, deleted and counted once.
    assert_eq!(report.deleted_in("tool_fields"), 1);
    assert_eq!(report.deleted_in("tool_sections"), 1);
    assert_eq!(report.deleted_in("data_tools"), 1);

    let store = cascades.store();
    assert!(!store.contains("tool_fields", field));
    assert!(!store.contains("tool_sections", section));
}

#[test]
fn test_tool_delete_takes_submissions_and_entries() {
    let mut cascades = Cascades::new(platform_store());
    let (tool, _, _) = seed_tool(cascades.store_mut());
    let school = cascades.store_mut().insert("schools", fields!()).unwrap();
    let submission = cascades
        .store_mut()
        .insert(
            "form_submissions",
            fields! { "tool_id" => tool, "school_id" => school },
        )
        .unwrap();
    let entry = cascades
        .store_mut()
        .insert("submission_entries", fields! { "submission_id" => submission })
        .unwrap();

    let report = cascades.delete_data_tool(tool).unwrap();

    assert_eq!(report.deleted_in("form_submissions"), 1);
    assert_eq!(report.deleted_in("submission_entries"), 1);
    // The school itself is another root's row and survives.
    assert!(cascades.store().contains("schools", school));
    assert!(!cascades.store().contains("submission_entries", entry));
}

#[test]
fn test_school_delete_takes_its_submissions_but_not_the_tool() {
    let mut cascades = Cascades::new(platform_store());
    let (tool, _, _) = seed_tool(cascades.store_mut());
    let school = cascades.store_mut().insert("schools", fields!()).unwrap();
    cascades
        .store_mut()
        .insert(
            "form_submissions",
            fields! { "tool_id" => tool, "school_id" => school },
        )
        .unwrap();

    let report = cascades.delete_school(school).unwrap();

    assert_eq!(report.deleted_in("schools"), 1);
    assert_eq!(report.deleted_in("form_submissions"), 1);
    assert!(cascades.store().contains("data_tools", tool));
}
