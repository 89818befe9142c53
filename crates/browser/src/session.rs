//! # Browsing Session
//!
//! Coordinates one question list page:
//! 1. Load a category through the [`IncrementalLoader`]
//! 2. Hold the user's tag selection and debounced search query
//! 3. Filter the loaded questions
//! 4. Group what remains by topic and number it for display
//! 5. Derive the list status (loading, error, empty, more, end)
//!
//! Filtering and grouping are recomputed from the loaded set on every
//! [`BrowsingSession::view`]; changing a filter never triggers a fetch.

use crate::config::BrowserConfig;
use crate::debounce::SearchDebouncer;
use crate::loader::{IncrementalLoader, LoadOutcome, LoadPhase, LoaderConfig};
use anyhow::{Context, Result};
use api_client::QuestionSource;
use catalog::QuestionId;
use pipeline::{FilterPipeline, FilterState, Layout, TagFacet, TopicGrouper, tag_facets};
use std::sync::Arc;
use std::time::Instant;
use topics::TopicClassifier;
use tracing::{debug, info};

/// What the list footer should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus {
    /// No category opened yet
    Idle,
    /// First batch in flight
    Loading,
    /// A further batch in flight
    LoadingMore,
    /// Last request failed
    Error {
        message: String,
        can_retry: bool,
        retry_count: u32,
    },
    /// Loaded fine, but nothing passes the filters
    Empty,
    /// More batches are available
    HasMore,
    /// Every question is loaded
    EndOfList,
}

/// Everything needed to draw the page
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub category: Option<String>,
    pub layout: Layout,
    pub status: ListStatus,
    pub loaded: usize,
    pub total: usize,
    pub visible: usize,
    pub has_more: bool,
    pub facets: Vec<TagFacet>,
    pub filters: FilterState,
    pub difficulty_conflicts: Vec<QuestionId>,
}

/// One page's worth of loading, filtering and grouping state
pub struct BrowsingSession<S> {
    loader: IncrementalLoader<S>,
    pipeline: FilterPipeline,
    grouper: TopicGrouper,
    /// Tag selection; the search query is owned by `search`
    tags: FilterState,
    search: SearchDebouncer,
    max_retries: u32,
}

impl<S: QuestionSource> BrowsingSession<S> {
    pub fn new(source: S, classifier: Arc<TopicClassifier>, config: &BrowserConfig) -> Self {
        let loader = IncrementalLoader::new(source, LoaderConfig::from(config));
        let grouper = TopicGrouper::new(classifier).with_flat_threshold(config.flat_threshold);
        Self {
            loader,
            pipeline: FilterPipeline::standard(),
            grouper,
            tags: FilterState::new(),
            search: SearchDebouncer::new(config.search_debounce),
            max_retries: config.max_retries,
        }
    }

    /// Replace the standard tag + search pipeline
    pub fn with_pipeline(mut self, pipeline: FilterPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn loader(&self) -> &IncrementalLoader<S> {
        &self.loader
    }

    /// Open a category: clears filters and loads its first batch
    pub async fn open(&mut self, category: &str) -> LoadOutcome {
        self.clear_filters();
        self.loader.fetch_initial(category).await
    }

    pub async fn load_more(&self) -> LoadOutcome {
        self.loader.load_more().await
    }

    /// Keep loading until the list is exhausted or a request fails.
    ///
    /// Returns the outcome that stopped the loop.
    pub async fn load_all(&self) -> LoadOutcome {
        loop {
            match self.loader.load_more().await {
                LoadOutcome::Loaded { .. } => continue,
                outcome => return outcome,
            }
        }
    }

    pub async fn retry(&self) -> LoadOutcome {
        self.loader.retry().await
    }

    /// Ignore whatever is still in flight
    pub async fn cancel(&self) {
        self.loader.cancel().await;
    }

    /// Flip a tag in the selection. Applies immediately.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let selected = self.tags.toggle_tag(tag);
        debug!("Tag {} selected={}", tag, selected);
        selected
    }

    /// Record search input; it applies once the debounce delay passes
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search.submit(query);
    }

    /// Wait for pending search input to apply
    pub async fn settle_search(&mut self) -> bool {
        self.search.settle().await
    }

    /// Apply pending search input without waiting
    pub fn flush_search(&mut self) -> bool {
        self.search.flush()
    }

    pub fn pending_search(&self) -> Option<&str> {
        self.search.pending()
    }

    pub fn clear_filters(&mut self) {
        self.tags.clear();
        self.search.reset();
    }

    /// Filters as currently applied
    pub fn filters(&mut self) -> FilterState {
        self.search.poll();
        self.tags.clone().with_search(self.search.applied())
    }

    /// Derive the page from loaded questions and current filters
    pub async fn view(&mut self) -> Result<SessionView> {
        let start = Instant::now();
        let filters = self.filters();
        let state = self.loader.snapshot().await;

        let visible = self
            .pipeline
            .apply(&state.questions, &filters)
            .context("Failed to filter loaded questions")?;
        let grouped = self.grouper.group(&visible);

        let has_more = state.has_more();
        let status = match state.phase {
            LoadPhase::Idle => ListStatus::Idle,
            LoadPhase::InitialLoading => ListStatus::Loading,
            LoadPhase::LoadingMore => ListStatus::LoadingMore,
            LoadPhase::Error => ListStatus::Error {
                message: state.error.clone().unwrap_or_default(),
                can_retry: state.can_retry(self.max_retries),
                retry_count: state.retry_count,
            },
            LoadPhase::Ready if grouped.layout.is_empty() => ListStatus::Empty,
            LoadPhase::Ready if has_more => ListStatus::HasMore,
            LoadPhase::Ready => ListStatus::EndOfList,
        };

        info!(
            "View: {} of {} loaded questions visible ({:?}) in {:.2?}",
            visible.len(),
            state.questions.len(),
            status,
            start.elapsed()
        );

        Ok(SessionView {
            category: state.category,
            visible: visible.len(),
            loaded: state.questions.len(),
            total: state.total,
            has_more,
            facets: tag_facets(&state.questions),
            filters,
            difficulty_conflicts: grouped.difficulty_conflicts,
            layout: grouped.layout,
            status,
        })
    }
}
