//! Photo list view-model.

use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::domain::Photo;
use crate::events::AnalyticsEvent;
use crate::ports::AnalyticsSink;
use crate::repositories::PhotoRepository;
use crate::state::{FetchStatus, Observable};

struct PhotoState {
    photos: Observable<Vec<Photo>>,
    status: Observable<FetchStatus>,
}

/// Holds the photo list for the grid and detail screens.
///
/// Construction starts the one and only fetch of the session on the
/// ambient tokio runtime. On failure the list stays empty and the status
/// becomes [`FetchStatus::Failed`].
pub struct PhotoViewModel {
    state: Arc<PhotoState>,
    analytics: Arc<dyn AnalyticsSink>,
    cancel: CancellationToken,
}

impl PhotoViewModel {
    /// Create the view-model and start loading photos.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(repository: PhotoRepository, analytics: Arc<dyn AnalyticsSink>) -> Self {
        let state = Arc::new(PhotoState {
            photos: Observable::new(Vec::new()),
            status: Observable::new(FetchStatus::Loading),
        });
        let cancel = CancellationToken::new();

        tokio::spawn(load_photos(
            repository,
            Arc::clone(&state),
            cancel.child_token(),
        ));

        Self {
            state,
            analytics,
            cancel,
        }
    }

    /// Current photo list.
    pub fn photos(&self) -> Vec<Photo> {
        self.state.photos.get()
    }

    pub fn subscribe_photos(&self) -> watch::Receiver<Vec<Photo>> {
        self.state.photos.subscribe()
    }

    pub fn status(&self) -> FetchStatus {
        self.state.status.get()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<FetchStatus> {
        self.state.status.subscribe()
    }

    /// Wait for the initial fetch to finish and return its outcome.
    pub async fn wait_until_settled(&self) -> FetchStatus {
        let mut rx = self.state.status.subscribe();
        let settled = rx.wait_for(FetchStatus::is_settled).await.map(|s| s.clone());
        settled.unwrap_or_else(|_| self.state.status.get())
    }

    /// Look up a loaded photo by id.
    pub fn photo(&self, id: i64) -> Option<Photo> {
        self.state.photos.with(|photos| Photo::find(photos, id))
    }

    /// Open a photo: look it up and report the selection.
    ///
    /// Returns `None` without emitting anything when the photo is not loaded.
    pub fn select_photo(&self, id: i64) -> Option<Photo> {
        let photo = self.photo(id)?;
        self.analytics
            .log_event(&AnalyticsEvent::photo_selected(&photo));
        Some(photo)
    }
}

impl Drop for PhotoViewModel {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn load_photos(
    repository: PhotoRepository,
    state: Arc<PhotoState>,
    cancel: CancellationToken,
) {
    let result = tokio::select! {
        () = cancel.cancelled() => {
            debug!("Photo fetch abandoned");
            return;
        }
        result = repository.get_photos() => result,
    };

    match result {
        Ok(photos) => {
            state.photos.set(photos);
            state.status.set(FetchStatus::Ready);
        }
        Err(err) => {
            warn!(error = %err, kind = err.kind(), "Photo fetch failed");
            state.status.set(FetchStatus::Failed(err));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockAlbumApiPort, NoopAnalytics, RecordingAnalytics, RemoteError};

    fn photo(id: i64, title: &str) -> Photo {
        Photo {
            id,
            album_id: 1,
            title: title.to_string(),
            url: format!("u{id}"),
            thumbnail_url: format!("t{id}"),
        }
    }

    fn repository_returning(
        result: Result<Vec<Photo>, RemoteError>,
    ) -> PhotoRepository {
        let mut api = MockAlbumApiPort::new();
        api.expect_fetch_photos()
            .times(1)
            .returning(move || result.clone());
        PhotoRepository::new(Arc::new(api))
    }

    #[tokio::test]
    async fn test_initial_fetch_populates_photos() {
        let vm = PhotoViewModel::new(
            repository_returning(Ok(vec![photo(1, "a")])),
            Arc::new(NoopAnalytics::new()),
        );
        assert!(vm.status().is_loading());

        assert_eq!(vm.wait_until_settled().await, FetchStatus::Ready);
        assert_eq!(vm.photos(), vec![photo(1, "a")]);
    }

    #[tokio::test]
    async fn test_photos_keep_server_order() {
        let served = vec![photo(3, "c"), photo(1, "a"), photo(2, "b")];
        let vm = PhotoViewModel::new(
            repository_returning(Ok(served.clone())),
            Arc::new(NoopAnalytics::new()),
        );

        vm.wait_until_settled().await;
        assert_eq!(vm.photos(), served);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_list_empty_and_reports_error() {
        let err = RemoteError::Network {
            message: "connection refused".to_string(),
        };
        let vm = PhotoViewModel::new(
            repository_returning(Err(err.clone())),
            Arc::new(NoopAnalytics::new()),
        );

        let status = vm.wait_until_settled().await;
        assert_eq!(status, FetchStatus::Failed(err));
        assert!(vm.photos().is_empty());
    }

    #[tokio::test]
    async fn test_subscriber_is_notified_of_loaded_photos() {
        let vm = PhotoViewModel::new(
            repository_returning(Ok(vec![photo(1, "a"), photo(2, "b")])),
            Arc::new(NoopAnalytics::new()),
        );
        let mut rx = vm.subscribe_photos();

        let loaded = rx.wait_for(|photos| !photos.is_empty()).await.unwrap().clone();
        assert_eq!(loaded.len(), 2);
    }

    #[tokio::test]
    async fn test_select_photo_emits_select_content() {
        let analytics = Arc::new(RecordingAnalytics::new());
        let vm = PhotoViewModel::new(
            repository_returning(Ok(vec![photo(7, "sunset")])),
            analytics.clone(),
        );
        vm.wait_until_settled().await;

        let selected = vm.select_photo(7).unwrap();
        assert_eq!(selected.title, "sunset");

        let events = analytics.events();
        assert_eq!(events, vec![AnalyticsEvent::photo_selected(&selected)]);
    }

    #[tokio::test]
    async fn test_select_unknown_photo_emits_nothing() {
        let analytics = Arc::new(RecordingAnalytics::new());
        let vm = PhotoViewModel::new(
            repository_returning(Ok(vec![photo(1, "a")])),
            analytics.clone(),
        );
        vm.wait_until_settled().await;

        assert!(vm.select_photo(99).is_none());
        assert!(analytics.events().is_empty());
    }

    #[tokio::test]
    async fn test_drop_abandons_inflight_fetch() {
        struct NeverApi;

        #[async_trait::async_trait]
        impl crate::ports::AlbumApiPort for NeverApi {
            async fn fetch_photos(&self) -> Result<Vec<Photo>, RemoteError> {
                std::future::pending().await
            }

            async fn fetch_comments(
                &self,
                _post_id: i64,
            ) -> Result<Vec<crate::domain::Comment>, RemoteError> {
                std::future::pending().await
            }
        }

        let api: Arc<dyn crate::ports::AlbumApiPort> = Arc::new(NeverApi);
        let vm = PhotoViewModel::new(
            PhotoRepository::new(Arc::clone(&api)),
            Arc::new(NoopAnalytics::new()),
        );
        tokio::task::yield_now().await;
        assert_eq!(Arc::strong_count(&api), 2);

        drop(vm);
        for _ in 0..10 {
            if Arc::strong_count(&api) == 1 {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(Arc::strong_count(&api), 1);
    }
}
