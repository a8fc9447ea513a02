//! Landmark label set
//!
//! Loaded once per session from a JSON object mapping landmark name to a
//! short description. Names become classification labels; descriptions are
//! the fallback text when the summary collaborator is unavailable.

use crate::error::LensError;
use std::path::Path;
use tracing::info;

/// Ordered, immutable set of (label, description) pairs.
#[derive(Debug, Clone)]
pub struct LabelSet {
    entries: Vec<(String, String)>,
}

impl LabelSet {
    /// Build a label set from pairs, preserving order.
    pub fn new(entries: Vec<(String, String)>) -> Result<Self, LensError> {
        if entries.is_empty() {
            return Err(LensError::Labels("label set is empty".to_string()));
        }
        if entries.iter().any(|(name, _)| name.trim().is_empty()) {
            return Err(LensError::Labels("label names must be non-empty".to_string()));
        }
        Ok(Self { entries })
    }

    /// Load a label set from a JSON file of `{"name": "description", ...}`.
    pub fn load(path: &Path) -> Result<Self, LensError> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;
        info!("Loaded {} landmark labels from {:?}", set.len(), path);
        Ok(set)
    }

    /// Parse label JSON, preserving key order.
    pub fn from_json(content: &str) -> Result<Self, LensError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let map = value
            .as_object()
            .ok_or_else(|| LensError::Labels("label file must be a JSON object".to_string()))?;

        let entries = map
            .iter()
            .map(|(name, desc)| {
                let desc = desc.as_str().unwrap_or_default().to_string();
                (name.clone(), desc)
            })
            .collect();
        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Label names in load order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(name, _)| name.as_str())
    }

    /// Fallback description for a label, if one was provided.
    pub fn description(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, desc)| desc.as_str())
    }
}
