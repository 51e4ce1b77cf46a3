//! Show command handler.
//!
//! Opens one photo the way the photo screen does: select it (which
//! reports `select_content`), then load its comments.

use anyhow::{Result, bail};
use tracing::warn;

use crate::bootstrap::CliContext;
use crate::presentation::{print_comments, print_separator};

/// Execute the show command.
pub async fn execute(ctx: &CliContext, photo_id: i64) -> Result<()> {
    let photos = ctx.photo_view_model();
    let status = photos.wait_until_settled().await;
    if let Some(err) = status.error() {
        return Err(err.clone().into());
    }

    let Some(photo) = photos.select_photo(photo_id) else {
        bail!("Photo {photo_id} not found");
    };

    println!("Photo #{}", photo.id);
    print_separator(60);
    println!("Title:     {}", photo.title);
    println!("Album:     {}", photo.album_id);
    println!("Image:     {}", photo.url);
    println!("Thumbnail: {}", photo.thumbnail_url);
    println!();

    let comments = ctx.comment_view_model();
    comments.fetch_comments(photo_id).await?;

    // The photo is still worth showing when its comments fail to load
    if let Some(err) = comments.status().error() {
        warn!(photo_id, "Comments unavailable: {err}");
        println!("Comments unavailable: {err}");
        return Ok(());
    }

    println!("Comments:");
    print_comments(&comments.comments());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{StaticApi, api_with, comment, context, photo};
    use album_core::{AnalyticsEvent, FetchStatus};

    #[tokio::test]
    async fn test_show_emits_select_content() {
        let (ctx, analytics, _db) =
            context(api_with(vec![photo(1), photo(2)], vec![comment(2, 5)])).await;

        execute(&ctx, 2).await.unwrap();

        let events = analytics.events();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            AnalyticsEvent::SelectContent { item_id, .. } if item_id == "2"
        ));
    }

    #[tokio::test]
    async fn test_unknown_photo_is_error_without_event() {
        let (ctx, analytics, _db) = context(api_with(vec![photo(1)], vec![])).await;

        let err = execute(&ctx, 99).await.unwrap_err();
        assert!(err.to_string().contains("99"));
        assert!(analytics.events().is_empty());
    }

    #[tokio::test]
    async fn test_photo_list_failure_is_error() {
        let (ctx, _, _db) = context(StaticApi::default()).await;
        assert!(execute(&ctx, 1).await.is_err());
    }

    #[tokio::test]
    async fn test_comment_view_model_sees_fetched_comments() {
        let (ctx, _, _db) = context(api_with(vec![photo(3)], vec![comment(3, 1)])).await;
        let vm = ctx.comment_view_model();
        vm.fetch_comments(3).await.unwrap();
        assert_eq!(vm.status(), FetchStatus::Ready);
        assert_eq!(vm.comments().len(), 1);
    }
}
