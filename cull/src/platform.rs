//! The platform schema - every deletion relationship, declared in one place.
//!
//! Adding a relationship means adding one edge here; the traversal and
//! ordering machinery never changes. Transitive cascades follow the child's
//! own edges; shallow cascades delete the direct children and stop; set-null
//! edges unlink instead of deleting.

use cull_schema::{SchemaBuilder, SchemaGraph};

/// Build the deletion schema of the evaluation platform.
///
/// The graph is validated on construction and the children-first deletion
/// order derived from it; a malformed declaration fails here, at startup.
pub fn platform_schema() -> SchemaGraph {
    SchemaBuilder::new()
        // Supervision projects
        .table("projects")
        .table("project_stages")
        .table("stage_tasks")
        .table("task_assignments")
        .table("project_notices")
        .table("project_documents")
        .table("project_schools")
        .table("school_reports")
        .table("expert_reviews")
        .table("review_scores")
        .table("review_comments")
        .table("rectification_items")
        .table("rectification_replies")
        .table("progress_reports")
        .table("statistics_snapshots")
        // Indicator systems
        .table("indicator_systems")
        .table("indicators")
        .table("data_indicators")
        .table("indicator_values")
        .table("supporting_materials")
        .table("system_versions")
        // Compliance rules
        .table("compliance_rules")
        .table("rule_conditions")
        .table("rule_results")
        // Organization
        .table("districts")
        .table("schools")
        .table("users")
        .table("school_documents")
        // Data-collection tools
        .table("data_tools")
        .table("tool_sections")
        .table("tool_fields")
        .table("field_options")
        .table("tool_assignments")
        .table("form_submissions")
        .table("submission_entries")
        .table("entry_attachments")
        // Element libraries
        .table("element_libraries")
        .table("library_elements")
        .table("element_versions")
        // Project tree
        .cascade("projects", "project_stages", "project_id")
        .cascade("project_stages", "stage_tasks", "stage_id")
        .cascade_shallow("stage_tasks", "task_assignments", "task_id")
        .cascade_shallow("projects", "project_notices", "project_id")
        .cascade_shallow("projects", "project_documents", "project_id")
        .cascade("projects", "project_schools", "project_id")
        .cascade_shallow("project_schools", "school_reports", "project_school_id")
        .cascade("projects", "expert_reviews", "project_id")
        .cascade_shallow("expert_reviews", "review_scores", "review_id")
        .cascade_shallow("expert_reviews", "review_comments", "review_id")
        .cascade("expert_reviews", "rectification_items", "review_id")
        .cascade_shallow("rectification_items", "rectification_replies", "item_id")
        .cascade_shallow("projects", "progress_reports", "project_id")
        .cascade_shallow("projects", "statistics_snapshots", "project_id")
        // Indicator tree; indicators nest under themselves via parent_id
        .cascade("indicator_systems", "indicators", "system_id")
        .cascade("indicators", "indicators", "parent_id")
        .cascade("indicators", "data_indicators", "indicator_id")
        .cascade_shallow("data_indicators", "indicator_values", "data_indicator_id")
        .cascade_shallow("indicators", "supporting_materials", "indicator_id")
        .cascade_shallow("indicator_systems", "system_versions", "system_id")
        // Compliance
        .cascade("compliance_rules", "rule_conditions", "rule_id")
        .cascade_shallow("compliance_rules", "rule_results", "rule_id")
        // Organization; district hierarchy nests via parent_id
        .cascade("districts", "districts", "parent_id")
        .cascade("schools", "form_submissions", "school_id")
        .cascade_shallow("schools", "school_documents", "school_id")
        // Collection tooling; fields hang off both the tool and its sections
        .cascade("data_tools", "tool_sections", "tool_id")
        .cascade("tool_sections", "tool_fields", "section_id")
        .cascade("data_tools", "tool_fields", "tool_id")
        .cascade_shallow("tool_fields", "field_options", "field_id")
        .cascade_shallow("data_tools", "tool_assignments", "tool_id")
        .cascade("data_tools", "form_submissions", "tool_id")
        .cascade("form_submissions", "submission_entries", "submission_id")
        .cascade_shallow("submission_entries", "entry_attachments", "entry_id")
        // Element libraries; elements nest via parent_id
        .cascade("element_libraries", "library_elements", "library_id")
        .cascade("library_elements", "library_elements", "parent_id")
        .cascade_shallow("library_elements", "element_versions", "element_id")
        // Unlinks: referencing rows survive with the foreign key nulled
        .set_null("data_indicators", "compliance_rules", "indicator_id")
        .set_null("indicator_systems", "projects", "system_id")
        .set_null("districts", "schools", "district_id")
        .set_null("schools", "users", "school_id")
        .set_null("library_elements", "tool_fields", "element_id")
        .build()
        .expect("platform schema is well-formed")
}
