//! # Domain model for the member form
//!
//! [`UserRecord`] is the only entity in the app. The entry screen builds one from
//! live form input on each submit; the review screen rebuilds its own copy by
//! decoding the transition payload. Nothing is persisted and no instance is shared
//! between screens.
//!
//! The codec writes each field under a fixed wire key (see [`keys`]):
//!
//! | Field | Wire key |
//! |-------|----------|
//! | `id` | `id` |
//! | `secret` | `pw` |
//! | `display_name` | `name` |
//! | `phone` | `phoneNum` |

/// User-supplied member information. Every field defaults to empty text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub secret: String,
    pub display_name: String,
    pub phone: String,
}

impl UserRecord {
    /// Create a record from the four field values.
    pub fn new(
        id: impl Into<String>,
        secret: impl Into<String>,
        display_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            secret: secret.into(),
            display_name: display_name.into(),
            phone: phone.into(),
        }
    }

    /// True when every field is empty.
    pub fn is_blank(&self) -> bool {
        self.id.is_empty()
            && self.secret.is_empty()
            && self.display_name.is_empty()
            && self.phone.is_empty()
    }
}

/// Wire key names of the transition payload.
pub mod keys {
    pub const ID: &str = "id";
    pub const SECRET: &str = "pw";
    pub const DISPLAY_NAME: &str = "name";
    pub const PHONE: &str = "phoneNum";
}
