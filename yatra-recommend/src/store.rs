//! CSV-backed recommendation catalog
//!
//! One row per State/UT. App names are comma-separated and their links
//! pipe-separated; the two lists are zipped in order and truncate to
//! the shorter side. A blank cell in either column means no listings
//! for that category.

use crate::error::Result;
use crate::models::{AppCategory, AppListing, StateRecommendation};
use csv::StringRecord;
use std::path::Path;
use tracing::debug;

const STATE_COLUMN: &str = "State/UT";

pub struct RecommendationStore {
    rows: Vec<StateRecommendation>,
}

impl RecommendationStore {
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();
        let mut rows = Vec::new();

        for record in reader.records() {
            let record = record?;
            let state = field(&record, &headers, STATE_COLUMN).trim();
            if state.is_empty() {
                continue;
            }

            let apps = AppCategory::ALL
                .iter()
                .map(|category| {
                    let names = field(&record, &headers, category.names_column());
                    let links = field(&record, &headers, category.links_column());
                    (*category, parse_listings(names, links))
                })
                .collect();

            rows.push(StateRecommendation {
                state: state.to_string(),
                apps,
                famous_foods: (1..=3)
                    .filter_map(|i| {
                        let cell = field(&record, &headers, &format!("Famous Food {}", i));
                        let cell = cell.trim();
                        (!cell.is_empty()).then(|| cell.to_string())
                    })
                    .collect(),
                famous_purchases: purchases_field(&record, &headers).trim().to_string(),
                special_features: (1..=3)
                    .filter_map(|i| {
                        let cell = field(&record, &headers, &format!("Special Feature {}", i));
                        let cell = cell.trim();
                        (!cell.is_empty()).then(|| cell.to_string())
                    })
                    .collect(),
            });
        }

        debug!("Loaded recommendations for {} states from {}", rows.len(), path.display());
        Ok(Self { rows })
    }

    /// State names in file order, first occurrence wins.
    pub fn states(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for row in &self.rows {
            if !seen
                .iter()
                .any(|s: &&str| s.eq_ignore_ascii_case(&row.state))
            {
                seen.push(row.state.as_str());
            }
        }
        seen
    }

    /// Case-insensitive lookup. Unknown states yield `None`.
    pub fn for_state(&self, name: &str) -> Option<&StateRecommendation> {
        self.rows
            .iter()
            .find(|row| row.state.eq_ignore_ascii_case(name.trim()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn field<'a>(record: &'a StringRecord, headers: &StringRecord, name: &str) -> &'a str {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .and_then(|i| record.get(i))
        .unwrap_or("")
}

/// The purchases header sometimes carries a leading icon; match on the
/// suffix.
fn purchases_field<'a>(record: &'a StringRecord, headers: &StringRecord) -> &'a str {
    headers
        .iter()
        .position(|h| h.trim().ends_with("Famous Purchases"))
        .and_then(|i| record.get(i))
        .unwrap_or("")
}

fn parse_listings(names: &str, links: &str) -> Vec<AppListing> {
    if names.trim().is_empty() || links.trim().is_empty() {
        return Vec::new();
    }
    names
        .split(',')
        .map(str::trim)
        .zip(links.split('|').map(str::trim))
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, link)| AppListing {
            name: name.to_string(),
            link: link.to_string(),
        })
        .collect()
}
