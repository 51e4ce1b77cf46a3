//! Photos command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{print_separator, truncate_string};

/// Execute the photos command.
///
/// Waits for the photo view-model's initial load and prints the list in
/// server order, optionally capped at `limit` rows.
pub async fn execute(ctx: &CliContext, limit: Option<usize>) -> Result<()> {
    let vm = ctx.photo_view_model();
    let status = vm.wait_until_settled().await;
    if let Some(err) = status.error() {
        return Err(err.clone().into());
    }

    let photos = vm.photos();
    if photos.is_empty() {
        println!("No photos available.");
        return Ok(());
    }

    let shown = limit.unwrap_or(photos.len()).min(photos.len());
    println!("Showing {shown} of {} photo(s):\n", photos.len());
    println!("{:<6} {:<6} Title", "ID", "Album");
    print_separator(80);

    for photo in photos.iter().take(shown) {
        println!(
            "{:<6} {:<6} {}",
            photo.id,
            photo.album_id,
            truncate_string(&photo.title, 66)
        );
    }

    Ok(())
}
