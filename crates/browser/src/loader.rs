//! # Incremental Loader
//!
//! Holds the questions loaded so far for one category and fetches the next
//! batch on demand.
//!
//! ## Phases
//!
//! ```text
//! Idle ─▶ InitialLoading ─▶ Ready ⇄ LoadingMore
//!              │                          │
//!              └────────▶ Error ◀─────────┘
//!                           │ retry
//!                           └────▶ LoadingMore
//! ```
//!
//! ## Concurrency
//!
//! - An async mutex is the in-flight latch. `load_more` and `retry` only
//!   `try_lock` it, so a trigger arriving while a request is outstanding is
//!   dropped, never queued.
//! - Every request captures the current generation. `fetch_initial` and
//!   `cancel` bump the generation; the outstanding request is abandoned at
//!   once and releases the latch, and any response it produced is discarded
//!   instead of being appended to the wrong list.
//! - Every request runs under an explicit timeout.

use crate::config::BrowserConfig;
use crate::error::LoadError;
use api_client::QuestionSource;
use catalog::{Question, QuestionPage};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock, watch};
use tracing::{debug, info, instrument, warn};

/// Where the loader is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    InitialLoading,
    Ready,
    LoadingMore,
    Error,
}

/// Snapshot of everything loaded for the current category.
///
/// After every successful fetch `offset == questions.len()` and
/// `questions.len() <= total`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadState {
    pub category: Option<String>,
    pub questions: Vec<Question>,
    pub total: usize,
    pub offset: usize,
    pub phase: LoadPhase,
    pub error: Option<String>,
    pub retry_count: u32,
}

impl LoadState {
    pub fn has_more(&self) -> bool {
        self.questions.len() < self.total
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::InitialLoading | LoadPhase::LoadingMore)
    }

    /// Everything the server has was loaded
    pub fn is_exhausted(&self) -> bool {
        self.phase == LoadPhase::Ready && !self.has_more()
    }

    pub fn can_retry(&self, max_retries: u32) -> bool {
        self.phase == LoadPhase::Error && self.retry_count < max_retries
    }
}

/// What a load call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A batch was stored
    Loaded { added: usize, total: usize },
    /// Another request was in flight; this trigger was dropped
    Skipped,
    /// Nothing left to fetch
    Exhausted,
    /// The response arrived after a cancel or category switch and was discarded
    Stale,
    /// The request failed; see `LoadState::error`
    Failed,
    /// `load_more` was called before any category was opened
    NotStarted,
    /// The last request failed; only `retry` may fetch again
    AwaitingRetry,
    /// `retry` with nothing to retry, or the retry limit was reached
    RetryUnavailable,
}

/// Loader tunables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
    pub batch_size: usize,
    pub max_retries: u32,
    pub request_timeout: Duration,
}

impl From<&BrowserConfig> for LoaderConfig {
    fn from(config: &BrowserConfig) -> Self {
        Self {
            batch_size: config.batch_size,
            max_retries: config.max_retries,
            request_timeout: config.request_timeout,
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::from(&BrowserConfig::default())
    }
}

#[derive(Clone, Copy)]
enum Merge {
    Replace,
    Append,
}

struct Inner<S> {
    source: S,
    config: LoaderConfig,
    state: RwLock<LoadState>,
    latch: Mutex<()>,
    generation: watch::Sender<u64>,
}

/// Paginated loader over a [`QuestionSource`].
///
/// Cheap to clone; clones share state, latch and generation.
pub struct IncrementalLoader<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for IncrementalLoader<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: QuestionSource> IncrementalLoader<S> {
    pub fn new(source: S, config: LoaderConfig) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            inner: Arc::new(Inner {
                source,
                config,
                state: RwLock::new(LoadState::default()),
                latch: Mutex::new(()),
                generation,
            }),
        }
    }

    pub fn source(&self) -> &S {
        &self.inner.source
    }

    pub fn config(&self) -> LoaderConfig {
        self.inner.config
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> LoadState {
        self.inner.state.read().await.clone()
    }

    /// Load the first batch of `category`, replacing whatever was loaded.
    ///
    /// Supersedes any request still in flight: that request's response will
    /// be discarded. Waits for the latch rather than dropping, because an
    /// explicit category switch must not be lost.
    #[instrument(skip(self))]
    pub async fn fetch_initial(&self, category: &str) -> LoadOutcome {
        let generation = self.bump_generation();
        let _latch = self.inner.latch.lock().await;
        if self.current_generation() != generation {
            debug!("Initial fetch for {} superseded before it started", category);
            return LoadOutcome::Stale;
        }

        {
            let mut state = self.inner.state.write().await;
            *state = LoadState {
                category: Some(category.to_string()),
                phase: LoadPhase::InitialLoading,
                ..LoadState::default()
            };
        }

        info!("Loading first {} questions for {}", self.inner.config.batch_size, category);
        let result = self.request(generation, category, 0).await;
        self.commit(generation, Merge::Replace, result).await
    }

    /// Fetch the next batch.
    ///
    /// Dropped (`Skipped`) if a request is already in flight.
    #[instrument(skip(self))]
    pub async fn load_more(&self) -> LoadOutcome {
        let Ok(_latch) = self.inner.latch.try_lock() else {
            debug!("load_more dropped: request already in flight");
            return LoadOutcome::Skipped;
        };
        let generation = self.current_generation();

        let (category, offset) = {
            let mut state = self.inner.state.write().await;
            let Some(category) = state.category.clone() else {
                return LoadOutcome::NotStarted;
            };
            if state.phase == LoadPhase::Error {
                return LoadOutcome::AwaitingRetry;
            }
            if !state.has_more() {
                return LoadOutcome::Exhausted;
            }
            state.phase = LoadPhase::LoadingMore;
            (category, state.questions.len())
        };

        let result = self.request(generation, &category, offset).await;
        self.commit(generation, Merge::Append, result).await
    }

    /// Repeat the request that failed.
    ///
    /// Allowed while `retry_count < max_retries`; afterwards the retry
    /// affordance is disabled and this returns `RetryUnavailable`.
    #[instrument(skip(self))]
    pub async fn retry(&self) -> LoadOutcome {
        let Ok(_latch) = self.inner.latch.try_lock() else {
            debug!("retry dropped: request already in flight");
            return LoadOutcome::Skipped;
        };
        let generation = self.current_generation();

        let (category, offset) = {
            let mut state = self.inner.state.write().await;
            if !state.can_retry(self.inner.config.max_retries) {
                debug!(
                    "retry unavailable (phase {:?}, {} failures)",
                    state.phase, state.retry_count
                );
                return LoadOutcome::RetryUnavailable;
            }
            let Some(category) = state.category.clone() else {
                return LoadOutcome::RetryUnavailable;
            };
            state.phase = LoadPhase::LoadingMore;
            (category, state.questions.len())
        };

        info!("Retrying {} at offset {}", category, offset);
        let result = self.request(generation, &category, offset).await;
        self.commit(generation, Merge::Append, result).await
    }

    /// Invalidate any in-flight request, e.g. when navigating away.
    ///
    /// The outstanding request is dropped immediately, so the next
    /// `load_more` is not held off by it.
    pub async fn cancel(&self) {
        self.bump_generation();
        let mut state = self.inner.state.write().await;
        if state.is_loading() {
            state.phase = if state.category.is_some() && !state.questions.is_empty() {
                LoadPhase::Ready
            } else {
                LoadPhase::Idle
            };
        }
        debug!("Loader cancelled with {} questions kept", state.questions.len());
    }

    fn current_generation(&self) -> u64 {
        *self.inner.generation.borrow()
    }

    fn bump_generation(&self) -> u64 {
        let mut next = 0;
        self.inner.generation.send_modify(|generation| {
            *generation += 1;
            next = *generation;
        });
        next
    }

    /// Fetch one batch, giving up on timeout or as soon as `generation` is
    /// superseded.
    async fn request(
        &self,
        generation: u64,
        category: &str,
        offset: usize,
    ) -> Result<QuestionPage, LoadError> {
        let timeout = self.inner.config.request_timeout;
        let fetch = self
            .inner
            .source
            .fetch_page(category, self.inner.config.batch_size, offset);
        let mut generations = self.inner.generation.subscribe();

        tokio::select! {
            result = tokio::time::timeout(timeout, fetch) => match result {
                Ok(Ok(page)) => Ok(page),
                Ok(Err(e)) => Err(LoadError::Api(e)),
                Err(_) => Err(LoadError::Timeout(timeout)),
            },
            _ = generations.wait_for(|current| *current != generation) => {
                debug!("Abandoning {} request at offset {}", category, offset);
                Err(LoadError::Superseded)
            }
        }
    }

    async fn commit(
        &self,
        generation: u64,
        merge: Merge,
        result: Result<QuestionPage, LoadError>,
    ) -> LoadOutcome {
        let mut state = self.inner.state.write().await;
        if self.current_generation() != generation {
            warn!("Discarding stale response (generation {})", generation);
            return LoadOutcome::Stale;
        }

        match result {
            Ok(page) => {
                let added = page.questions.len();
                match merge {
                    Merge::Replace => state.questions = page.questions,
                    Merge::Append => state.questions.extend(page.questions),
                }
                let loaded = state.questions.len();
                state.offset = loaded;
                state.total = page.total.max(loaded);
                if added == 0 && loaded < state.total {
                    warn!(
                        "Empty batch at offset {} with total {}; treating list as complete",
                        loaded, state.total
                    );
                    state.total = loaded;
                }
                state.phase = LoadPhase::Ready;
                state.error = None;
                state.retry_count = 0;

                info!("Loaded {} questions ({} of {})", added, loaded, state.total);
                LoadOutcome::Loaded {
                    added,
                    total: state.total,
                }
            }
            Err(e) => {
                warn!("{}", e);
                state.phase = LoadPhase::Error;
                state.error = Some(e.to_string());
                state.retry_count += 1;
                LoadOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_client::ApiError;
    use std::collections::VecDeque;
    use std::sync::Mutex as StdMutex;
    use tokio::sync::Notify;

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    enum Step {
        Serve { total: usize },
        Empty { total: usize },
        Fail,
        Hang,
    }

    /// Source that follows a script and records every request
    struct ScriptedSource {
        script: StdMutex<VecDeque<Step>>,
        requests: StdMutex<Vec<(String, usize, usize)>>,
        default_total: usize,
        gate: Option<Arc<Notify>>,
    }

    impl ScriptedSource {
        fn serving(total: usize) -> Self {
            Self {
                script: StdMutex::new(VecDeque::new()),
                requests: StdMutex::new(Vec::new()),
                default_total: total,
                gate: None,
            }
        }

        fn with_script(mut self, steps: Vec<Step>) -> Self {
            self.script = StdMutex::new(steps.into());
            self
        }

        fn with_gate(mut self, gate: Arc<Notify>) -> Self {
            self.gate = Some(gate);
            self
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn offsets(&self) -> Vec<usize> {
            self.requests.lock().unwrap().iter().map(|r| r.2).collect()
        }
    }

    impl QuestionSource for ScriptedSource {
        async fn fetch_page(
            &self,
            category: &str,
            limit: usize,
            offset: usize,
        ) -> api_client::Result<QuestionPage> {
            self.requests
                .lock()
                .unwrap()
                .push((category.to_string(), limit, offset));
            let step = self
                .script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Step::Serve {
                    total: self.default_total,
                });

            if let Some(gate) = &self.gate {
                gate.notified().await;
            }

            match step {
                Step::Serve { total } => {
                    let end = (offset + limit).min(total);
                    let questions = (offset..end)
                        .map(|i| Question::new(format!("{category}-{i}"), format!("Question {i}"), category))
                        .collect();
                    Ok(QuestionPage::new(questions, total))
                }
                Step::Empty { total } => Ok(QuestionPage::new(Vec::new(), total)),
                Step::Fail => Err(ApiError::Http { status: 503 }),
                Step::Hang => std::future::pending().await,
            }
        }
    }

    fn loader(source: ScriptedSource) -> IncrementalLoader<ScriptedSource> {
        IncrementalLoader::new(source, LoaderConfig::default())
    }

    async fn wait_for_requests(loader: &IncrementalLoader<ScriptedSource>, n: usize) {
        while loader.source().request_count() < n {
            tokio::task::yield_now().await;
        }
    }

    // ============================================================================
    // Pagination
    // ============================================================================

    #[tokio::test]
    async fn test_loads_category_to_completion() {
        let loader = loader(ScriptedSource::serving(45));

        let outcome = loader.fetch_initial("go").await;
        assert_eq!(outcome, LoadOutcome::Loaded { added: 20, total: 45 });
        let state = loader.snapshot().await;
        assert_eq!(state.questions.len(), 20);
        assert!(state.has_more());

        assert_eq!(loader.load_more().await, LoadOutcome::Loaded { added: 20, total: 45 });
        assert_eq!(loader.load_more().await, LoadOutcome::Loaded { added: 5, total: 45 });

        let state = loader.snapshot().await;
        assert_eq!(state.questions.len(), 45);
        assert!(!state.has_more());
        assert!(state.is_exhausted());

        assert_eq!(loader.load_more().await, LoadOutcome::Exhausted);
        assert_eq!(loader.source().offsets(), vec![0, 20, 40]);
    }

    #[tokio::test]
    async fn test_offset_tracks_loaded_count() {
        let loader = loader(ScriptedSource::serving(63));
        loader.fetch_initial("go").await;
        loop {
            let state = loader.snapshot().await;
            assert_eq!(state.offset, state.questions.len());
            assert!(state.questions.len() <= state.total);
            if loader.load_more().await == LoadOutcome::Exhausted {
                break;
            }
        }
        let state = loader.snapshot().await;
        assert_eq!(state.questions.len(), 63);
        assert_eq!(state.offset, 63);
    }

    #[tokio::test]
    async fn test_batches_keep_server_order() {
        let loader = loader(ScriptedSource::serving(25));
        loader.fetch_initial("go").await;
        loader.load_more().await;

        let ids: Vec<String> = loader
            .snapshot()
            .await
            .questions
            .into_iter()
            .map(|q| q.id)
            .collect();
        let expected: Vec<String> = (0..25).map(|i| format!("go-{i}")).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_total_never_below_loaded() {
        let source = ScriptedSource::serving(45).with_script(vec![Step::Serve { total: 45 }, Step::Empty { total: 0 }]);
        let loader = loader(source);
        loader.fetch_initial("go").await;
        loader.load_more().await;

        let state = loader.snapshot().await;
        assert_eq!(state.questions.len(), 20);
        assert_eq!(state.total, 20);
    }

    #[tokio::test]
    async fn test_load_more_before_open() {
        let loader = loader(ScriptedSource::serving(10));
        assert_eq!(loader.load_more().await, LoadOutcome::NotStarted);
        assert_eq!(loader.source().request_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_batch_marks_list_complete() {
        let source = ScriptedSource::serving(45).with_script(vec![
            Step::Serve { total: 45 },
            Step::Empty { total: 45 },
        ]);
        let loader = loader(source);
        loader.fetch_initial("go").await;

        // Server still reports 45 but has nothing past offset 20
        assert_eq!(loader.load_more().await, LoadOutcome::Loaded { added: 0, total: 20 });
        let state = loader.snapshot().await;
        assert_eq!(state.total, 20);
        assert!(!state.has_more());
        assert_eq!(loader.load_more().await, LoadOutcome::Exhausted);
    }

    // ============================================================================
    // In-flight latch
    // ============================================================================

    #[tokio::test]
    async fn test_concurrent_load_more_sends_one_request() {
        let gate = Arc::new(Notify::new());
        let loader = loader(ScriptedSource::serving(45).with_gate(gate.clone()));

        gate.notify_one();
        loader.fetch_initial("go").await;
        assert_eq!(loader.source().request_count(), 1);

        let first = tokio::spawn({
            let loader = loader.clone();
            async move { loader.load_more().await }
        });
        wait_for_requests(&loader, 2).await;

        assert_eq!(loader.load_more().await, LoadOutcome::Skipped);
        assert_eq!(loader.snapshot().await.phase, LoadPhase::LoadingMore);

        gate.notify_one();
        assert_eq!(first.await.unwrap(), LoadOutcome::Loaded { added: 20, total: 45 });
        assert_eq!(loader.source().request_count(), 2);
    }

    #[tokio::test]
    async fn test_retry_dropped_while_in_flight() {
        let gate = Arc::new(Notify::new());
        let loader = loader(ScriptedSource::serving(45).with_gate(gate.clone()));

        let initial = tokio::spawn({
            let loader = loader.clone();
            async move { loader.fetch_initial("go").await }
        });
        wait_for_requests(&loader, 1).await;
        assert_eq!(loader.retry().await, LoadOutcome::Skipped);

        gate.notify_one();
        initial.await.unwrap();
        assert_eq!(loader.source().request_count(), 1);
    }

    // ============================================================================
    // Failures and retry
    // ============================================================================

    #[tokio::test]
    async fn test_initial_failure_leaves_empty_list() {
        let loader = loader(ScriptedSource::serving(45).with_script(vec![Step::Fail]));

        assert_eq!(loader.fetch_initial("go").await, LoadOutcome::Failed);
        let state = loader.snapshot().await;
        assert_eq!(state.phase, LoadPhase::Error);
        assert!(state.questions.is_empty());
        assert_eq!(state.retry_count, 1);
        assert!(state.error.as_deref().unwrap().starts_with("Failed to load questions"));
        assert_eq!(loader.load_more().await, LoadOutcome::AwaitingRetry);
    }

    #[tokio::test]
    async fn test_failure_preserves_loaded_items_and_retry_recovers() {
        let source = ScriptedSource::serving(45).with_script(vec![Step::Serve { total: 45 }, Step::Fail]);
        let loader = loader(source);
        loader.fetch_initial("go").await;

        assert_eq!(loader.load_more().await, LoadOutcome::Failed);
        let state = loader.snapshot().await;
        assert_eq!(state.questions.len(), 20);
        assert_eq!(state.retry_count, 1);
        assert!(state.can_retry(3));

        assert_eq!(loader.retry().await, LoadOutcome::Loaded { added: 20, total: 45 });
        let state = loader.snapshot().await;
        assert_eq!(state.questions.len(), 40);
        assert_eq!(state.retry_count, 0);
        assert!(state.error.is_none());
        assert_eq!(loader.source().offsets(), vec![0, 20, 20]);
    }

    #[tokio::test]
    async fn test_retry_capped_at_max_retries() {
        let source = ScriptedSource::serving(45).with_script(vec![Step::Fail, Step::Fail, Step::Fail]);
        let loader = loader(source);

        assert_eq!(loader.fetch_initial("go").await, LoadOutcome::Failed);
        assert_eq!(loader.retry().await, LoadOutcome::Failed);
        assert_eq!(loader.retry().await, LoadOutcome::Failed);

        let state = loader.snapshot().await;
        assert_eq!(state.retry_count, 3);
        assert!(!state.can_retry(3));
        assert_eq!(loader.retry().await, LoadOutcome::RetryUnavailable);
        assert_eq!(loader.source().request_count(), 3);
    }

    #[tokio::test]
    async fn test_retry_without_error_is_unavailable() {
        let loader = loader(ScriptedSource::serving(45));
        loader.fetch_initial("go").await;
        assert_eq!(loader.retry().await, LoadOutcome::RetryUnavailable);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_request_times_out() {
        let loader = loader(ScriptedSource::serving(45).with_script(vec![Step::Hang]));

        assert_eq!(loader.fetch_initial("go").await, LoadOutcome::Failed);
        let state = loader.snapshot().await;
        assert_eq!(state.phase, LoadPhase::Error);
        assert!(state.error.unwrap().contains("timed out"));
    }

    // ============================================================================
    // Cancellation
    // ============================================================================

    #[tokio::test]
    async fn test_response_after_cancel_is_discarded() {
        let gate = Arc::new(Notify::new());
        let loader = loader(ScriptedSource::serving(45).with_gate(gate.clone()));
        gate.notify_one();
        loader.fetch_initial("go").await;

        let pending = tokio::spawn({
            let loader = loader.clone();
            async move { loader.load_more().await }
        });
        wait_for_requests(&loader, 2).await;

        loader.cancel().await;
        assert_eq!(loader.snapshot().await.phase, LoadPhase::Ready);

        gate.notify_one();
        assert_eq!(pending.await.unwrap(), LoadOutcome::Stale);
        assert_eq!(loader.snapshot().await.questions.len(), 20);
    }

    #[tokio::test(start_paused = true)]
    async fn test_category_switch_abandons_hung_request() {
        let source = ScriptedSource::serving(45).with_script(vec![Step::Serve { total: 45 }, Step::Hang]);
        let loader = loader(source);
        loader.fetch_initial("go").await;

        let pending = tokio::spawn({
            let loader = loader.clone();
            async move { loader.load_more().await }
        });
        wait_for_requests(&loader, 2).await;

        let start = tokio::time::Instant::now();
        assert_eq!(
            loader.fetch_initial("java").await,
            LoadOutcome::Loaded { added: 20, total: 45 }
        );
        assert!(start.elapsed() < Duration::from_secs(1));
        assert_eq!(pending.await.unwrap(), LoadOutcome::Stale);

        let state = loader.snapshot().await;
        assert_eq!(state.category.as_deref(), Some("java"));
        assert!(state.questions.iter().all(|q| q.category == "java"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_releases_latch_immediately() {
        let source = ScriptedSource::serving(45).with_script(vec![Step::Serve { total: 45 }, Step::Hang]);
        let loader = loader(source);
        loader.fetch_initial("go").await;

        let pending = tokio::spawn({
            let loader = loader.clone();
            async move { loader.load_more().await }
        });
        wait_for_requests(&loader, 2).await;

        let start = tokio::time::Instant::now();
        loader.cancel().await;
        assert_eq!(pending.await.unwrap(), LoadOutcome::Stale);
        assert_eq!(
            loader.load_more().await,
            LoadOutcome::Loaded { added: 20, total: 45 }
        );
        assert!(start.elapsed() < Duration::from_secs(1));
        assert_eq!(loader.source().offsets(), vec![0, 20, 20]);
    }

    #[tokio::test]
    async fn test_fetch_initial_replaces_previous_category() {
        let loader = loader(ScriptedSource::serving(30));
        loader.fetch_initial("go").await;
        loader.load_more().await;
        assert_eq!(loader.snapshot().await.questions.len(), 30);

        loader.fetch_initial("java").await;
        let state = loader.snapshot().await;
        assert_eq!(state.category.as_deref(), Some("java"));
        assert_eq!(state.questions.len(), 20);
        assert!(state.questions.iter().all(|q| q.category == "java"));
    }
}
