pub mod codec;
pub mod config;
pub mod flow;
pub mod models;

pub use codec::{decode, decode_payload, encode, DecodeError, DecodeOutcome};
pub use config::AppConfig;
pub use flow::{mask, review_path, EntryForm, Field, InfoRow, ReviewScreen, Transition, REVIEW_ROUTE};
pub use models::UserRecord;
