mod entry;
pub use entry::Entry;
pub(crate) use entry::review_route;

mod review;
pub use review::{Review, ReviewBlank};
