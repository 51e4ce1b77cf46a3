//! Comment list view-model.
//!
//! # Concurrency Model
//!
//! - Every `fetch_comments` call mints a request ticket
//! - A finished fetch commits only if its ticket is still the latest one;
//!   the check and the write happen under the same lock
//! - `add_comment` appends in place and never suspends
//! - Optional store writes run as tracked tasks; `flush` awaits them
//! - Finished write tasks are dropped on the next `add_comment`; their
//!   failures are kept until `flush` reports them

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::domain::{CommentRecord, CommentValidationError, NewComment};
use crate::events::AnalyticsEvent;
use crate::ports::{AnalyticsSink, CommentStore, RemoteError, StorageError};
use crate::repositories::CommentRepository;
use crate::state::{FetchStatus, Observable};

/// Identifies one `fetch_comments` call.
///
/// Used to prevent superseded fetches from committing their result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RequestTicket(u64);

struct CommentState {
    comments: Observable<Vec<CommentRecord>>,
    status: Observable<FetchStatus>,
    current_photo: Observable<Option<i64>>,
    latest_ticket: Mutex<RequestTicket>,
    write_failure: Mutex<Option<StorageError>>,
}

impl CommentState {
    fn issue_ticket(&self) -> RequestTicket {
        let mut latest = self
            .latest_ticket
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        latest.0 += 1;
        *latest
    }

    /// Apply a fetch outcome if `ticket` is still the latest request.
    ///
    /// Returns `false` when the result was discarded.
    fn commit(
        &self,
        ticket: RequestTicket,
        outcome: Result<Vec<CommentRecord>, RemoteError>,
    ) -> bool {
        let latest = self
            .latest_ticket
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if *latest != ticket {
            return false;
        }

        match outcome {
            Ok(records) => {
                self.comments.set(records);
                self.status.set(FetchStatus::Ready);
            }
            Err(err) => self.status.set(FetchStatus::Failed(err)),
        }
        true
    }

    /// Remember a failed store write until the next `flush`.
    fn record_write_failure(&self, err: StorageError) {
        self.write_failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(err);
    }

    fn take_write_failure(&self) -> Option<StorageError> {
        self.write_failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Record the store key of the first matching unsaved pending comment.
    fn assign_local_id(&self, comment: &NewComment, local_id: i64) {
        self.comments.update(|records| {
            let unsaved = records.iter_mut().find_map(|record| match record {
                CommentRecord::Pending(p)
                    if p.local_id.is_none()
                        && p.post_id == comment.post_id
                        && p.name == comment.name
                        && p.email == comment.email
                        && p.body == comment.body =>
                {
                    Some(p)
                }
                _ => None,
            });
            if let Some(pending) = unsaved {
                pending.local_id = Some(local_id);
            }
        });
    }
}

/// Holds the comment list of the photo currently on screen.
///
/// Fetching replaces the list wholesale; adding appends a pending record.
/// Without a store, added comments live only in memory. With a store,
/// they are also persisted and merged back in after each fetch.
pub struct CommentViewModel {
    state: Arc<CommentState>,
    repository: CommentRepository,
    analytics: Arc<dyn AnalyticsSink>,
    store: Option<Arc<dyn CommentStore>>,
    pending_writes: Mutex<Vec<JoinHandle<()>>>,
    cancel: CancellationToken,
}

impl CommentViewModel {
    /// Create a comment view-model with an empty list.
    pub fn new(
        repository: CommentRepository,
        analytics: Arc<dyn AnalyticsSink>,
        store: Option<Arc<dyn CommentStore>>,
    ) -> Self {
        Self {
            state: Arc::new(CommentState {
                comments: Observable::new(Vec::new()),
                status: Observable::new(FetchStatus::Idle),
                current_photo: Observable::new(None),
                latest_ticket: Mutex::new(RequestTicket(0)),
                write_failure: Mutex::new(None),
            }),
            repository,
            analytics,
            store,
            pending_writes: Mutex::new(Vec::new()),
            cancel: CancellationToken::new(),
        }
    }

    /// Start fetching the comments of `photo_id`.
    ///
    /// Supersedes any fetch still in flight: once this call is made, older
    /// requests can no longer change the list or the status. The returned
    /// handle completes when this request has committed or been discarded.
    pub fn fetch_comments(&self, photo_id: i64) -> JoinHandle<()> {
        let ticket = self.state.issue_ticket();
        self.state.current_photo.set(Some(photo_id));
        self.state.status.set(FetchStatus::Loading);

        let state = Arc::clone(&self.state);
        let repository = self.repository.clone();
        let store = self.store.clone();
        let cancel = self.cancel.child_token();

        tokio::spawn(async move {
            let outcome = tokio::select! {
                () = cancel.cancelled() => {
                    debug!(photo_id, "Comment fetch abandoned");
                    return;
                }
                outcome = load_comments(&repository, store.as_deref(), photo_id) => outcome,
            };

            if let Err(err) = &outcome {
                warn!(photo_id, error = %err, kind = err.kind(), "Comment fetch failed");
            }
            if !state.commit(ticket, outcome) {
                debug!(photo_id, "Discarding superseded comment fetch");
            }
        })
    }

    /// Append a locally authored comment.
    ///
    /// Never suspends. Emits `add_comment`. With a store attached the
    /// comment is also written in the background; see [`Self::flush`].
    pub fn add_comment(&self, comment: NewComment) -> Result<(), CommentValidationError> {
        comment.validate()?;

        self.state
            .comments
            .update(|records| records.push(comment.clone().into()));
        self.analytics
            .log_event(&AnalyticsEvent::comment_added(&comment));

        if let Some(store) = &self.store {
            self.spawn_store_write(Arc::clone(store), comment);
        }
        Ok(())
    }

    fn spawn_store_write(&self, store: Arc<dyn CommentStore>, comment: NewComment) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(
                post_id = comment.post_id,
                "No async runtime; comment kept in memory only"
            );
            return;
        };

        let state = Arc::clone(&self.state);
        let handle = runtime.spawn(async move {
            match store.insert(&comment).await {
                Ok(local_id) => {
                    debug!(post_id = comment.post_id, local_id, "Stored comment");
                    state.assign_local_id(&comment, local_id);
                }
                Err(err) => {
                    warn!(post_id = comment.post_id, error = %err, "Comment write failed");
                    state.record_write_failure(err);
                }
            }
        });

        let mut writes = self
            .pending_writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        writes.retain(|h| !h.is_finished());
        writes.push(handle);
    }

    /// Wait for every background store write started so far.
    ///
    /// Returns the first failure since the previous flush, after all writes
    /// have finished.
    pub async fn flush(&self) -> Result<(), StorageError> {
        let handles: Vec<_> = self
            .pending_writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect();

        for handle in handles {
            if let Err(join_err) = handle.await {
                warn!(error = %join_err, "Comment write task failed");
                self.state.record_write_failure(StorageError::Database(format!(
                    "comment write task failed: {join_err}"
                )));
            }
        }

        self.state.take_write_failure().map_or(Ok(()), Err)
    }

    #[cfg(test)]
    fn retained_writes(&self) -> usize {
        self.pending_writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[cfg(test)]
    fn writes_settled(&self) -> bool {
        self.pending_writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .all(JoinHandle::is_finished)
    }

    /// Current comment list.
    pub fn comments(&self) -> Vec<CommentRecord> {
        self.state.comments.get()
    }

    pub fn subscribe_comments(&self) -> watch::Receiver<Vec<CommentRecord>> {
        self.state.comments.subscribe()
    }

    pub fn status(&self) -> FetchStatus {
        self.state.status.get()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<FetchStatus> {
        self.state.status.subscribe()
    }

    /// The photo of the most recent `fetch_comments` call.
    pub fn current_photo(&self) -> Option<i64> {
        self.state.current_photo.get()
    }
}

impl Drop for CommentViewModel {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn load_comments(
    repository: &CommentRepository,
    store: Option<&dyn CommentStore>,
    photo_id: i64,
) -> Result<Vec<CommentRecord>, RemoteError> {
    let remote = repository.get_comments(photo_id).await?;
    let mut records: Vec<CommentRecord> = remote.into_iter().map(Into::into).collect();

    if let Some(store) = store {
        match store.comments_for(photo_id).await {
            Ok(rows) => records.extend(rows.into_iter().map(Into::into)),
            Err(err) => warn!(photo_id, error = %err, "Could not read stored comments"),
        }
    }

    Ok(records)
}
