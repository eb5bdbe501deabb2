//! User record - the single persisted entity.

use serde::{Deserialize, Serialize};

/// A stored user entry.
///
/// `id` is assigned by storage and never changes or gets reused. Records are
/// never updated or deleted once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}
