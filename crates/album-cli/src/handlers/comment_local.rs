//! Comment local handler.

use album_core::CommentRecord;
use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::print_comments;

/// Execute the comment local command.
///
/// Reads the store directly; no network access.
pub async fn execute(ctx: &CliContext, photo_id: i64) -> Result<()> {
    let stored = ctx.store().comments_for(photo_id).await?;
    let records: Vec<CommentRecord> = stored.into_iter().map(CommentRecord::from).collect();

    println!(
        "{} locally stored comment(s) on photo #{photo_id}:\n",
        records.len()
    );
    print_comments(&records);
    Ok(())
}
