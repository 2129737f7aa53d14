//! Git-based modules: naming, manifests, synchronization and pruning
//!
//! This module provides:
//! - Folder name derivation from repository urls
//! - Module manifest types (`module.json`)
//! - Clone/pull synchronization that builds the required-module set
//! - Pruning of folders outside that set

pub mod manifest;
pub mod name;
pub mod prune;
pub mod sync;

use std::collections::BTreeSet;

pub use manifest::{ModuleManifest, MANIFEST_FILE};
pub use name::derive_folder_name;
pub use prune::{prune_stale, PruneReport};
pub use sync::{sync_modules, ModuleReport, SyncOutcome, SyncReport};

/// Module folders that must survive pruning this run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredModules(BTreeSet<String>);

impl RequiredModules {
    pub fn insert(&mut self, name: &str) {
        self.0.insert(name.to_string());
    }

    pub fn remove(&mut self, name: &str) {
        self.0.remove(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
