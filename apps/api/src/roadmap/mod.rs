// Roadmap generator: canonical templates, the topic resolver, optional search
// augmentation, and the last-write-wins view the roadmap page renders.

pub mod handlers;
pub mod resolver;
pub mod search;
pub mod templates;
pub mod view;

use thiserror::Error;

pub use resolver::TopicResolver;
pub use view::RoadmapView;

#[derive(Debug, Error)]
pub enum RoadmapError {
    #[error("search augmentation failed: {0}")]
    Search(#[from] search::SearchError),
}
