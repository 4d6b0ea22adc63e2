use serde::Deserialize;

use crate::forms::{filter_text, page_number};

/// Query string of `GET /api/users`.
#[derive(Debug, Default, Deserialize)]
pub struct UserListForm {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub search: Option<String>,
}

/// Cleaned user table filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersQuery {
    pub page: usize,
    pub role: Option<String>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

impl Default for UsersQuery {
    fn default() -> Self {
        Self {
            page: 1,
            role: None,
            is_active: None,
            search: None,
        }
    }
}

impl From<UserListForm> for UsersQuery {
    fn from(form: UserListForm) -> Self {
        Self {
            page: page_number(form.page),
            role: filter_text(form.role),
            is_active: form.is_active,
            search: filter_text(form.search),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_are_trimmed() {
        let query = UsersQuery::from(UserListForm {
            page: Some(0),
            role: Some("all".into()),
            is_active: Some(true),
            search: Some("  smith ".into()),
        });

        assert_eq!(query.page, 1);
        assert_eq!(query.role, None);
        assert_eq!(query.search.as_deref(), Some("smith"));
        assert_eq!(query.is_active, Some(true));
    }

    #[test]
    fn huge_page_is_clamped() {
        let query = UsersQuery::from(UserListForm {
            page: Some(usize::MAX),
            ..Default::default()
        });

        assert_eq!(query.page, crate::forms::MAX_PAGE);
    }
}
