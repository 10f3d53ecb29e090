//! What the roadmap page currently shows.
//!
//! Searches are last-write-wins: each call takes a ticket and only the most
//! recent ticket may replace the displayed template or error.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::ROADMAP_FAILURE_MESSAGE;
use crate::roadmap::resolver::{normalize, TopicResolver};
use crate::roadmap::templates::{RoadmapTemplate, DEFAULT_TOPIC};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub template: RoadmapTemplate,
    pub error: Option<String>,
    pub loading: bool,
}

pub struct RoadmapView {
    resolver: TopicResolver,
    state: Mutex<ViewState>,
    latest: AtomicU64,
}

impl RoadmapView {
    pub fn new(resolver: TopicResolver) -> Self {
        Self {
            resolver,
            state: Mutex::new(ViewState {
                template: DEFAULT_TOPIC.template(),
                error: None,
                loading: false,
            }),
            latest: AtomicU64::new(0),
        }
    }

    pub fn resolver(&self) -> &TopicResolver {
        &self.resolver
    }

    pub fn snapshot(&self) -> ViewState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Runs a search and returns the view afterwards. A blank query leaves
    /// everything untouched.
    pub async fn search(&self, query: &str) -> ViewState {
        if normalize(query).is_none() {
            return self.snapshot();
        }

        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.lock();
            state.loading = true;
            state.error = None;
        }
        // Clears `loading` if this future is dropped mid-resolve.
        let _pending = PendingSearch { view: self, ticket };

        let result = self.resolver.resolve(query).await;

        let mut state = self.lock();
        if self.latest.load(Ordering::SeqCst) != ticket {
            debug!("Discarding superseded roadmap search for '{}'", query.trim());
            return state.clone();
        }
        state.loading = false;
        match result {
            Ok(Some(template)) => state.template = template,
            Ok(None) => {}
            Err(e) => {
                warn!("Roadmap generation failed for '{}': {e}", query.trim());
                state.error = Some(ROADMAP_FAILURE_MESSAGE.to_string());
            }
        }
        state.clone()
    }
}

struct PendingSearch<'a> {
    view: &'a RoadmapView,
    ticket: u64,
}

impl Drop for PendingSearch<'_> {
    fn drop(&mut self) {
        // Checked under the lock: a newer search bumps `latest` before it
        // takes the lock to set `loading`.
        let mut state = self.view.lock();
        if state.loading && self.view.latest.load(Ordering::SeqCst) == self.ticket {
            debug!("Roadmap search {} abandoned before completing", self.ticket);
            state.loading = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use super::*;
    use crate::roadmap::templates::{fallback_template, Topic};
    use crate::roadmap::test_support::{FakeSearch, GatedSearch};

    #[test]
    fn test_initial_view_is_web_development() {
        let view = RoadmapView::new(TopicResolver::new());
        let state = view.snapshot();
        assert_eq!(state.template, Topic::WebDevelopment.template());
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_blank_search_changes_nothing() {
        let search = FakeSearch::new(false);
        let view = RoadmapView::new(TopicResolver::with_search(search.clone()));
        view.search("data science").await;
        let before = view.snapshot();

        let after = view.search("   ").await;

        assert_eq!(before, after);
        assert_eq!(search.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_template() {
        let view = RoadmapView::new(TopicResolver::with_search(FakeSearch::new(true)));
        view.search("Digital Marketing").await;

        let state = view.search("interpretive dance").await;

        assert_eq!(state.template, Topic::DigitalMarketing.template());
        assert_eq!(state.error.as_deref(), Some(ROADMAP_FAILURE_MESSAGE));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_next_search_clears_error() {
        let view = RoadmapView::new(TopicResolver::with_search(FakeSearch::new(true)));
        view.search("interpretive dance").await;

        let state = view.search("machine learning").await;

        assert!(state.error.is_none());
        assert_eq!(state.template.title, "Machine Learning Roadmap");
    }

    #[tokio::test]
    async fn test_later_search_wins_over_slow_earlier_one() {
        let search = GatedSearch::new();
        let view = Arc::new(RoadmapView::new(TopicResolver::with_search(search.clone())));

        let slow_view = Arc::clone(&view);
        let slow = tokio::spawn(async move { slow_view.search("slow topic").await });
        while search.started.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        let fast = view.search("fast topic").await;
        assert_eq!(fast.template, fallback_template("fast topic"));

        search.release.notify_one();
        slow.await.unwrap();

        let state = view.snapshot();
        assert_eq!(state.template, fallback_template("fast topic"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_cancelled_search_does_not_leave_loading_set() {
        let search = GatedSearch::new();
        let view = Arc::new(RoadmapView::new(TopicResolver::with_search(search.clone())));

        let slow_view = Arc::clone(&view);
        let slow = tokio::spawn(async move { slow_view.search("slow topic").await });
        while search.started.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        assert!(view.snapshot().loading);

        slow.abort();
        assert!(slow.await.unwrap_err().is_cancelled());

        let state = view.snapshot();
        assert!(!state.loading);
        assert_eq!(state.template, Topic::WebDevelopment.template());
    }

    #[tokio::test]
    async fn test_cancelled_superseded_search_keeps_newer_loading() {
        let search = GatedSearch::new();
        let view = Arc::new(RoadmapView::new(TopicResolver::with_search(search.clone())));

        let first_view = Arc::clone(&view);
        let first = tokio::spawn(async move { first_view.search("slow one").await });
        while search.started.load(Ordering::SeqCst) < 1 {
            tokio::task::yield_now().await;
        }
        let second_view = Arc::clone(&view);
        let second = tokio::spawn(async move { second_view.search("slow two").await });
        while search.started.load(Ordering::SeqCst) < 2 {
            tokio::task::yield_now().await;
        }

        first.abort();
        let _ = first.await;
        assert!(view.snapshot().loading);

        search.release.notify_waiters();
        let state = second.await.unwrap();
        assert!(!state.loading);
        assert_eq!(state.template, fallback_template("slow two"));
    }
}
