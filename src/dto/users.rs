use serde::Serialize;

use crate::domain::user::User;
use crate::pagination::Paginated;

/// Data required to render the user administration table.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct UsersPageData {
    pub users: Paginated<User>,
    pub search_query: Option<String>,
}
