//! Dependency graph access.
//!
//! The checker never builds a graph itself; it consumes one through
//! [`ImportGraph`]. How the graph was obtained (static analysis, build
//! metadata, hand construction) is a caller concern.

use indexmap::{IndexMap, IndexSet};

/// Read-only view of a module dependency graph.
///
/// Module paths are dot-separated, e.g. `root.foo.bar`.
pub trait ImportGraph {
    /// All modules strictly below `root`: every path `root.**` would match.
    ///
    /// The root itself is not included; at least one additional segment is
    /// required.
    fn modules_under(&self, root: &str) -> Vec<String>;

    /// Modules with a direct (one-hop) import edge into `module`.
    fn direct_importers_of(&self, module: &str) -> Vec<String>;
}

impl<T: ImportGraph + ?Sized> ImportGraph for &T {
    fn modules_under(&self, root: &str) -> Vec<String> {
        (*self).modules_under(root)
    }

    fn direct_importers_of(&self, module: &str) -> Vec<String> {
        (*self).direct_importers_of(module)
    }
}

/// Simple adjacency-map graph for tests and programmatic construction.
///
/// Stores edges keyed by the imported module, which is exactly the lookup
/// direction the checker needs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryImportGraph {
    modules: IndexSet<String>,
    /// imported -> set of direct importers
    importers: IndexMap<String, IndexSet<String>>,
}

impl InMemoryImportGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module without any edges.
    pub fn add_module(&mut self, module: impl Into<String>) {
        self.modules.insert(module.into());
    }

    /// Register a direct import edge. Both endpoints are added as modules
    /// if not already present.
    pub fn add_import(&mut self, importer: impl Into<String>, imported: impl Into<String>) {
        let importer = importer.into();
        let imported = imported.into();
        self.modules.insert(importer.clone());
        self.modules.insert(imported.clone());
        self.importers.entry(imported).or_default().insert(importer);
    }

    pub fn contains_module(&self, module: &str) -> bool {
        self.modules.contains(module)
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }
}

impl ImportGraph for InMemoryImportGraph {
    fn modules_under(&self, root: &str) -> Vec<String> {
        let prefix = format!("{root}.");
        self.modules
            .iter()
            .filter(|m| m.starts_with(&prefix))
            .cloned()
            .collect()
    }

    fn direct_importers_of(&self, module: &str) -> Vec<String> {
        self.importers
            .get(module)
            .map(|s| s.iter().cloned().collect())
            .unwrap_or_default()
    }
}
