//! Comment add handler.
//!
//! Appends a comment through the comment view-model and waits until it is
//! stored locally.

use album_core::{CommentRecord, NewComment};
use anyhow::{Context, Result};

use crate::bootstrap::CliContext;

/// Arguments for the comment add command.
pub struct AddArgs {
    pub photo_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Execute the comment add command.
pub async fn execute(ctx: &CliContext, args: AddArgs) -> Result<()> {
    let comment = NewComment::new(args.photo_id, args.name, args.email, args.body)?;

    let vm = ctx.comment_view_model();
    vm.add_comment(comment)?;
    vm.flush()
        .await
        .context("Comment was not saved to the local database")?;

    let local_id = vm.comments().iter().find_map(|record| match record {
        CommentRecord::Pending(pending) => pending.local_id,
        CommentRecord::Remote(_) => None,
    });

    match local_id {
        Some(id) => println!("Saved comment local #{id} on photo #{}", args.photo_id),
        None => println!("Saved comment on photo #{}", args.photo_id),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{api_with, context, photo};
    use album_core::{AnalyticsEvent, CommentValidationError};

    fn args(body: &str) -> AddArgs {
        AddArgs {
            photo_id: 4,
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_persists_and_emits_event() {
        let (ctx, analytics, _db) = context(api_with(vec![photo(4)], vec![])).await;

        execute(&ctx, args("Great shot")).await.unwrap();

        let stored = ctx.store().comments_for(4).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].body, "Great shot");

        let events = analytics.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name(), "add_comment");
        assert!(matches!(
            &events[0],
            AnalyticsEvent::AddComment { photo_id, comment_name }
                if photo_id == "4" && comment_name == "Ann"
        ));
    }

    #[tokio::test]
    async fn test_blank_body_rejected_without_side_effects() {
        let (ctx, analytics, _db) = context(api_with(vec![photo(4)], vec![])).await;

        let err = execute(&ctx, args("   ")).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<CommentValidationError>(),
            Some(&CommentValidationError::EmptyField("body"))
        );
        assert!(ctx.store().comments_for(4).await.unwrap().is_empty());
        assert!(analytics.events().is_empty());
    }
}
