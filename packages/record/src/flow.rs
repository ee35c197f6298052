//! # Screen flow model
//!
//! Platform-independent model of the two-screen flow. The views in the `ui` crate
//! hold the live field state and call into this module to decide whether submit is
//! enabled, to build the transition, and to turn a payload into display rows.
//!
//! ```text
//!   entry ──submit (all fields filled)──▶ review/{encoded}
//! ```
//!
//! There is no edge back from review to entry; the platform's back gesture handles
//! that.

use crate::codec::{self, DecodeOutcome};
use crate::models::UserRecord;

/// Route segment of the review screen.
pub const REVIEW_ROUTE: &str = "review";

/// The four inputs of the entry screen, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Id,
    Secret,
    DisplayName,
    Phone,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Id, Field::Secret, Field::DisplayName, Field::Phone];

    pub fn label(self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Secret => "Password",
            Field::DisplayName => "Name",
            Field::Phone => "Phone number",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Id => "Enter your ID",
            Field::Secret => "Enter your password",
            Field::DisplayName => "Enter your name",
            Field::Phone => "010-1234-5678",
        }
    }

    /// HTML input type; the secret is obscured and the phone gets a dial pad.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Secret => "password",
            Field::Phone => "tel",
            Field::Id | Field::DisplayName => "text",
        }
    }

    /// Stable DOM id for the input element.
    pub fn element_id(self) -> &'static str {
        match self {
            Field::Id => "member-id",
            Field::Secret => "member-pw",
            Field::DisplayName => "member-name",
            Field::Phone => "member-phone",
        }
    }
}

/// Snapshot of the entry screen's field values at the time of evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub id: String,
    pub secret: String,
    pub display_name: String,
    pub phone: String,
}

impl EntryForm {
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

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Secret => &self.secret,
            Field::DisplayName => &self.display_name,
            Field::Phone => &self.phone,
        }
    }

    /// Submit is enabled only when every field is non-empty.
    pub fn can_submit(&self) -> bool {
        Field::ALL.iter().all(|f| !self.value(*f).is_empty())
    }

    pub fn to_record(&self) -> UserRecord {
        UserRecord::new(
            self.id.clone(),
            self.secret.clone(),
            self.display_name.clone(),
            self.phone.clone(),
        )
    }

    /// Build the transition to the review screen, or `None` while gated.
    pub fn submit(&self) -> Option<Transition> {
        if !self.can_submit() {
            return None;
        }
        Some(Transition {
            payload: codec::encode(&self.to_record()),
        })
    }
}

/// One-way entry → review transition carrying an encoded record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub payload: String,
}

impl Transition {
    /// Target path, `review/{payload}`.
    pub fn path(&self) -> String {
        review_path(&self.payload)
    }
}

pub fn review_path(encoded: &str) -> String {
    format!("{REVIEW_ROUTE}/{encoded}")
}

/// A label/value pair shown on the review screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

/// State of the review screen, built once when the screen is entered.
#[derive(Debug)]
pub struct ReviewScreen {
    outcome: DecodeOutcome,
    record: UserRecord,
}

impl ReviewScreen {
    pub fn from_payload(payload: Option<&str>) -> Self {
        let outcome = codec::decode_payload(payload);
        let record = outcome.as_record().cloned().unwrap_or_default();
        Self { outcome, record }
    }

    /// How the payload was interpreted. Rendering never depends on this.
    pub fn outcome(&self) -> &DecodeOutcome {
        &self.outcome
    }

    pub fn record(&self) -> &UserRecord {
        &self.record
    }

    /// Display rows in field order, with the secret masked.
    pub fn rows(&self, mask_symbol: char) -> Vec<InfoRow> {
        Field::ALL
            .iter()
            .map(|field| {
                let value = match field {
                    Field::Id => self.record.id.clone(),
                    Field::Secret => mask(&self.record.secret, mask_symbol),
                    Field::DisplayName => self.record.display_name.clone(),
                    Field::Phone => self.record.phone.clone(),
                };
                InfoRow {
                    label: field.label(),
                    value,
                }
            })
            .collect()
    }
}

/// One mask symbol per character of `secret`.
pub fn mask(secret: &str, symbol: char) -> String {
    std::iter::repeat(symbol).take(secret.chars().count()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_submit_gating() {
        assert!(!EntryForm::new("alice", "", "", "").can_submit());
        assert!(!EntryForm::default().can_submit());
        assert!(!EntryForm::new("alice", "pw1", "Alice", "").can_submit());
        assert!(EntryForm::new("alice", "pw1", "Alice", "010-1234-5678").can_submit());
    }

    #[test]
    fn test_submit_while_gated_has_no_transition() {
        assert!(EntryForm::new("alice", "", "Alice", "010").submit().is_none());
    }

    #[test]
    fn test_submit_builds_review_path() {
        let form = EntryForm::new("alice", "pw1", "Alice", "010-1234-5678");
        let transition = form.submit().unwrap();
        assert!(transition.path().starts_with("review/"));
        assert_eq!(transition.path(), review_path(&transition.payload));
        assert_eq!(codec::decode(&transition.payload), form.to_record());
    }

    #[test]
    fn test_review_rows_mask_secret() {
        let form = EntryForm::new("alice", "pw1", "Alice", "010-1234-5678");
        let transition = form.submit().unwrap();
        let screen = ReviewScreen::from_payload(Some(&transition.payload));

        assert!(matches!(screen.outcome(), DecodeOutcome::Decoded(_)));
        let rows = screen.rows('•');
        let values: Vec<&str> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["alice", "•••", "Alice", "010-1234-5678"]);
        assert_eq!(rows[1].label, "Password");
    }

    #[test]
    fn test_review_without_payload_is_blank() {
        let screen = ReviewScreen::from_payload(None);
        assert!(matches!(screen.outcome(), DecodeOutcome::NoPayload));
        assert_eq!(screen.record(), &UserRecord::default());
        assert!(screen.rows('*').iter().all(|r| r.value.is_empty()));
    }

    #[test]
    fn test_review_with_garbage_is_blank() {
        let screen = ReviewScreen::from_payload(Some("%%%garbage"));
        assert!(screen.outcome().error().is_some());
        assert_eq!(screen.record(), &UserRecord::default());
    }

    #[test]
    fn test_mask_counts_characters() {
        assert_eq!(mask("", '•'), "");
        assert_eq!(mask("비밀번호", '*'), "****");
    }

    #[test]
    fn test_field_metadata() {
        assert_eq!(Field::Secret.input_type(), "password");
        assert_eq!(Field::Phone.input_type(), "tel");
        assert_eq!(Field::Phone.placeholder(), "010-1234-5678");
    }

    proptest! {
        #[test]
        fn prop_mask_hides_content(secret in any::<String>()) {
            let masked = mask(&secret, '•');
            prop_assert_eq!(masked.chars().count(), secret.chars().count());
            prop_assert!(masked.chars().all(|c| c == '•'));
        }

        #[test]
        fn prop_gating_matches_emptiness(
            id in ".{0,3}",
            secret in ".{0,3}",
            name in ".{0,3}",
            phone in ".{0,3}",
        ) {
            let expected = !id.is_empty() && !secret.is_empty() && !name.is_empty() && !phone.is_empty();
            let form = EntryForm::new(id, secret, name, phone);
            prop_assert_eq!(form.can_submit(), expected);
            prop_assert_eq!(form.submit().is_some(), expected);
        }
    }
}
