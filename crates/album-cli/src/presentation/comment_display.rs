//! Comment list rendering.

use album_core::CommentRecord;

use super::tables::{print_separator, truncate_string};

/// Short label telling where a comment came from.
pub fn comment_origin(record: &CommentRecord) -> String {
    match record {
        CommentRecord::Remote(comment) => format!("#{}", comment.id),
        CommentRecord::Pending(pending) => match pending.local_id {
            Some(id) => format!("local #{id}"),
            None => "unsaved".to_string(),
        },
    }
}

/// Print comments as a table, or a placeholder line when empty.
pub fn print_comments(records: &[CommentRecord]) {
    if records.is_empty() {
        println!("No comments yet.");
        return;
    }

    println!("{:<12} {:<28} {:<28} Body", "ID", "Name", "Email");
    print_separator(100);
    for record in records {
        println!(
            "{:<12} {:<28} {:<28} {}",
            comment_origin(record),
            truncate_string(record.name(), 27),
            truncate_string(record.email(), 27),
            truncate_string(&record.body().replace('\n', " "), 60),
        );
    }
}
