//! Topic Resolver: free text in, roadmap template out.
//!
//! Precedence: blank query → nothing; exact topic match → static template;
//! otherwise → generic fallback, after one search request when search is
//! configured. Search results never change the fallback steps.

use std::sync::Arc;

use tracing::{debug, info};

use crate::roadmap::search::SearchProvider;
use crate::roadmap::templates::{fallback_template, RoadmapTemplate, Topic};
use crate::roadmap::RoadmapError;

/// Trims and lower-cases a query. `None` for blank input.
pub fn normalize(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

#[derive(Clone, Default)]
pub struct TopicResolver {
    search: Option<Arc<dyn SearchProvider>>,
}

impl TopicResolver {
    /// Resolver without search augmentation.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(search: Arc<dyn SearchProvider>) -> Self {
        Self {
            search: Some(search),
        }
    }

    pub fn search_enabled(&self) -> bool {
        self.search.is_some()
    }

    /// Returns `Ok(None)` for a blank query without touching the network.
    pub async fn resolve(&self, query: &str) -> Result<Option<RoadmapTemplate>, RoadmapError> {
        let Some(normalized) = normalize(query) else {
            return Ok(None);
        };

        if let Some(topic) = Topic::from_key(&normalized) {
            debug!("Query '{normalized}' matched topic {topic:?}");
            return Ok(Some(topic.template()));
        }

        let shown = query.trim();
        if let Some(search) = &self.search {
            let results = search.search(shown).await?;
            info!("Search returned {} result(s) for '{}'", results.len(), shown);
        }

        Ok(Some(fallback_template(shown)))
    }
}
