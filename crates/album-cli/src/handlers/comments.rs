//! Comments command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::print_comments;

/// Execute the comments command.
///
/// Remote comments come first in server order, followed by comments
/// stored on this machine.
pub async fn execute(ctx: &CliContext, photo_id: i64) -> Result<()> {
    let vm = ctx.comment_view_model();
    vm.fetch_comments(photo_id).await?;

    if let Some(err) = vm.status().error() {
        return Err(err.clone().into());
    }

    let records = vm.comments();
    println!("{} comment(s) on photo #{photo_id}:\n", records.len());
    print_comments(&records);
    Ok(())
}
