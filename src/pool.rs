//! Replacement candidates gathered from the finals directory.

use std::path::Path;

use clipswap_common::{Error, Result};
use walkdir::WalkDir;

use crate::matcher::choose_replacement;

/// Filenames available as replacements, in directory listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    names: Vec<String>,
}

impl CandidatePool {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// List the direct children of `dir`.
    ///
    /// Nothing is sorted and subdirectories count as candidates too. Names
    /// that are not valid UTF-8 are skipped with a warning. An empty
    /// directory is an error.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::FinalsDirNotFound(dir.to_path_buf()));
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(std::io::Error::from)?;
            match entry.file_name().to_str() {
                Some(name) => names.push(name.to_string()),
                None => tracing::warn!(
                    "Skipping {:?}: file name is not valid UTF-8",
                    entry.path()
                ),
            }
        }

        if names.is_empty() {
            return Err(Error::EmptyFinalsDir(dir.to_path_buf()));
        }

        tracing::debug!("Found {} replacement candidates in {:?}", names.len(), dir);
        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Best candidate for `current_name`, if any.
    pub fn choose(&self, current_name: &str) -> Option<String> {
        choose_replacement(current_name, &self.names).map(str::to_string)
    }

    /// Remove `name` so no later clip can claim it. Returns whether it was
    /// present.
    pub fn take(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| n == name) {
            Some(index) => {
                self.names.remove(index);
                true
            }
            None => false,
        }
    }
}
