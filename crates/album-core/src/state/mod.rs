//! Observable state owned by the view-models.

mod observable;
mod status;

pub use observable::Observable;
pub use status::FetchStatus;
