//! Renderer snapshot of the active group.
//!
//! The engine installs a [`Synopsis`] on the context at every parse
//! boundary: the ordered name/description rows of the group being parsed,
//! plus the effective help entry. Renderers (the default one in
//! [`render`](crate::render) or an embedder's own) consume this snapshot
//! together with the dispatch path; serializing it gives a
//! machine-readable usage dump.

use serde::Serialize;

/// One named, described row of a synopsis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub names: Vec<String>,
    pub description: String,
}

/// Snapshot of a group: binder and command rows in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Synopsis {
    /// Required positional binders, in positional order.
    pub required: Vec<Entry>,
    /// Optional named binders.
    pub optional: Vec<Entry>,
    /// Flags.
    pub flags: Vec<Entry>,
    /// Commands, in declaration order.
    pub commands: Vec<Entry>,
    /// The effective help handler, group-local or ambient.
    pub help: Option<Entry>,
}
