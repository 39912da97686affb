//! Generic audited record model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Actor recorded when the caller does not name one.
pub const DEFAULT_ACTOR: &str = "システムユーザー";

/// The mutable part of a record: the form data a user submits, including
/// the status.
pub trait RecordFields: Clone + PartialEq + fmt::Debug + Send + Sync {
    type Status: Copy + Eq + fmt::Debug;

    /// Entity name used in logs.
    const ENTITY: &'static str;

    /// Terminal status marking a soft-deleted record.
    const DELETED: Self::Status;

    fn status(&self) -> Self::Status;

    fn set_status(&mut self, status: Self::Status);

    fn is_deleted(&self) -> bool {
        self.status() == Self::DELETED
    }
}

/// A stored record: an id, the mutable fields, and the audit stamps.
///
/// `created_at`/`created_by` are set once by the store and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record<F> {
    pub id: String,
    #[serde(flatten)]
    pub fields: F,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl<F: RecordFields> Record<F> {
    pub fn status(&self) -> F::Status {
        self.fields.status()
    }

    pub fn is_deleted(&self) -> bool {
        self.fields.is_deleted()
    }
}
