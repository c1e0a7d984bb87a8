//! Edge records - the declarative units of the schema graph.

/// A cascade relationship: deleting a row of `parent` deletes every row of
/// `child` whose `fk` column references it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeEdge {
    /// Table whose deletion triggers the cascade.
    pub parent: &'static str,
    /// Table holding the referencing rows.
    pub child: &'static str,
    /// Foreign-key column on the child table.
    pub fk: &'static str,
    /// Whether the child's own cascade edges are followed in turn.
    ///
    /// When false the cascade stops at the child rows; their dependents are
    /// intentionally left alone.
    pub transitive: bool,
}

impl CascadeEdge {
    /// A transitive edge: the child acts as a new cascade root.
    pub fn deep(parent: &'static str, child: &'static str, fk: &'static str) -> Self {
        Self {
            parent,
            child,
            fk,
            transitive: true,
        }
    }

    /// A one-level edge: child rows are deleted, their dependents are not.
    pub fn shallow(parent: &'static str, child: &'static str, fk: &'static str) -> Self {
        Self {
            parent,
            child,
            fk,
            transitive: false,
        }
    }

    /// Whether this edge points a table at itself (hierarchies via parent_id).
    pub fn is_self_referential(&self) -> bool {
        self.parent == self.child
    }
}

/// A set-null relationship: deleting a row of `target` sets `fk` to null on
/// every row of `referencing` that pointed at it. The referencing rows
/// survive, unlinked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetNullEdge {
    /// Table whose rows are being deleted.
    pub target: &'static str,
    /// Table holding the rows to unlink.
    pub referencing: &'static str,
    /// Foreign-key column on the referencing table.
    pub fk: &'static str,
}

impl SetNullEdge {
    pub fn new(target: &'static str, referencing: &'static str, fk: &'static str) -> Self {
        Self {
            target,
            referencing,
            fk,
        }
    }
}
