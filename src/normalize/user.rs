//! User listing decoding.

use serde_json::Value;

use crate::domain::user::User;
use crate::normalize::payload::{LIST_PROBES, ListPayload};

/// Decodes `{items, total}` (or any other list shape) into users.
pub fn users(payload: Value) -> (usize, Vec<User>) {
    let decoded = ListPayload::decode(payload, &LIST_PROBES);
    let total = decoded.total();
    (total, decoded.into_records())
}
