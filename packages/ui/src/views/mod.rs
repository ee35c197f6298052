mod entry;
pub use entry::EntryView;

mod review;
pub use review::ReviewView;
