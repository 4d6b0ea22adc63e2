use serde::Serialize;

use crate::domain::roster::ClassRoster;

/// Data required to render the class roster screen.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RosterPageData {
    pub class_id: i64,
    #[serde(flatten)]
    pub roster: ClassRoster,
    pub total_students: usize,
}
