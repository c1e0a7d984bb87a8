//! SchemaBuilder for constructing an immutable SchemaGraph.

use crate::{CascadeEdge, SchemaError, SchemaGraph, SchemaWarning, SetNullEdge};
use regex_lite::Regex;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Builder for constructing an immutable SchemaGraph.
///
/// Declare every table first, then the edges between them. `build` validates
/// the declarations and derives the children-first deletion order.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    /// Declared tables, in declaration order.
    tables: Vec<&'static str>,
    /// Cascade edges being built.
    cascades: Vec<CascadeEdge>,
    /// Set-null edges being built.
    set_nulls: Vec<SetNullEdge>,
}

impl SchemaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a table.
    pub fn table(mut self, name: &'static str) -> Self {
        self.tables.push(name);
        self
    }

    /// Declare a transitive cascade: deleting a `parent` row deletes the
    /// referencing `child` rows and follows the child's own edges.
    pub fn cascade(mut self, parent: &'static str, child: &'static str, fk: &'static str) -> Self {
        self.cascades.push(CascadeEdge::deep(parent, child, fk));
        self
    }

    /// Declare a one-level cascade: referencing `child` rows are deleted,
    /// their own dependents are left alone.
    pub fn cascade_shallow(
        mut self,
        parent: &'static str,
        child: &'static str,
        fk: &'static str,
    ) -> Self {
        self.cascades.push(CascadeEdge::shallow(parent, child, fk));
        self
    }

    /// Declare a set-null unlink: deleting a `target` row nulls `fk` on the
    /// `referencing` rows instead of deleting them.
    pub fn set_null(
        mut self,
        target: &'static str,
        referencing: &'static str,
        fk: &'static str,
    ) -> Self {
        self.set_nulls.push(SetNullEdge::new(target, referencing, fk));
        self
    }

    /// Build the immutable SchemaGraph.
    pub fn build(self) -> Result<SchemaGraph, SchemaError> {
        let ident = Regex::new("^[a-z][a-z0-9_]*$").expect("identifier pattern is valid");

        // Validate table declarations
        let mut declared: HashSet<&'static str> = HashSet::new();
        for &table in &self.tables {
            if !ident.is_match(table) {
                return Err(SchemaError::InvalidName(table));
            }
            if !declared.insert(table) {
                return Err(SchemaError::DuplicateTable(table));
            }
        }

        // Validate edges against the declarations
        let mut seen_edges: HashSet<(&str, &str, &str)> = HashSet::new();
        for edge in &self.cascades {
            for endpoint in [edge.parent, edge.child] {
                if !declared.contains(endpoint) {
                    return Err(SchemaError::UnknownTable(endpoint));
                }
            }
            if !ident.is_match(edge.fk) {
                return Err(SchemaError::InvalidName(edge.fk));
            }
            if !seen_edges.insert((edge.parent, edge.child, edge.fk)) {
                return Err(SchemaError::DuplicateEdge {
                    parent: edge.parent,
                    child: edge.child,
                    fk: edge.fk,
                });
            }
        }
        for edge in &self.set_nulls {
            for endpoint in [edge.target, edge.referencing] {
                if !declared.contains(endpoint) {
                    return Err(SchemaError::UnknownTable(endpoint));
                }
            }
            if !ident.is_match(edge.fk) {
                return Err(SchemaError::InvalidName(edge.fk));
            }
        }

        let warnings = self.collect_warnings();
        let order = self.deletion_order()?;

        let mut cascades_by_parent: HashMap<&'static str, Vec<CascadeEdge>> = HashMap::new();
        for edge in self.cascades {
            cascades_by_parent.entry(edge.parent).or_default().push(edge);
        }
        let mut set_nulls_by_target: HashMap<&'static str, Vec<SetNullEdge>> = HashMap::new();
        for edge in self.set_nulls {
            set_nulls_by_target.entry(edge.target).or_default().push(edge);
        }

        Ok(SchemaGraph::new(
            cascades_by_parent,
            set_nulls_by_target,
            order,
            warnings,
        ))
    }

    /// A shallow edge into a table with its own cascade edges strands that
    /// table's dependents; record it.
    fn collect_warnings(&self) -> Vec<SchemaWarning> {
        let cascading_parents: HashSet<&str> =
            self.cascades.iter().map(|edge| edge.parent).collect();

        self.cascades
            .iter()
            .filter(|edge| !edge.transitive && cascading_parents.contains(edge.child))
            .map(|edge| SchemaWarning::ShallowIntoCascading {
                parent: edge.parent,
                child: edge.child,
            })
            .collect()
    }

    /// Derive the deletion order: every declared table, children strictly
    /// before parents, deterministic via name-ordered tie-breaking.
    ///
    /// Self-referential edges carry no ordering constraint and are skipped.
    /// A cycle across distinct tables is a schema defect and fails the build.
    fn deletion_order(&self) -> Result<Vec<&'static str>, SchemaError> {
        // parent -> distinct children; child -> number of distinct parents
        // is not what we need: a parent waits on all its children, so count
        // outstanding children per table and release parents as children drain.
        let mut pending_children: BTreeMap<&'static str, usize> = BTreeMap::new();
        let mut parents_of: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
        let mut pairs: HashSet<(&str, &str)> = HashSet::new();

        for &table in &self.tables {
            pending_children.insert(table, 0);
        }
        for edge in &self.cascades {
            if edge.is_self_referential() || !pairs.insert((edge.parent, edge.child)) {
                continue;
            }
            *pending_children.entry(edge.parent).or_insert(0) += 1;
            parents_of.entry(edge.child).or_default().push(edge.parent);
        }

        let mut ready: BTreeSet<&'static str> = pending_children
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(table, _)| *table)
            .collect();

        let mut order = Vec::with_capacity(self.tables.len());
        while let Some(table) = ready.pop_first() {
            order.push(table);
            for &parent in parents_of.get(table).map_or(&[][..], Vec::as_slice) {
                let count = pending_children
                    .get_mut(parent)
                    .expect("edge endpoints are declared");
                *count -= 1;
                if *count == 0 {
                    ready.insert(parent);
                }
            }
        }

        if order.len() < self.tables.len() {
            // Anything still waiting on a child is on a cycle; name the first.
            let stuck = pending_children
                .iter()
                .find(|(_, count)| **count > 0)
                .map(|(table, _)| *table)
                .unwrap_or("unknown");
            return Err(SchemaError::CascadeCycle(stuck));
        }

        Ok(order)
    }
}
