//! User administration screen.

use crate::domain::types::UserId;
use crate::dto::users::UsersPageData;
use crate::forms::users::UsersQuery;
use crate::gateway::{UserListQuery, UserReader, UserWriter};
use crate::normalize::user::users;
use crate::pagination::Paginated;
use crate::services::ServiceResult;

fn remote_query(query: &UsersQuery, page_size: usize) -> UserListQuery {
    let mut remote = UserListQuery::new().paginate(query.page, page_size);
    if let Some(role) = &query.role {
        remote = remote.role(role.as_str());
    }
    if let Some(is_active) = query.is_active {
        remote = remote.is_active(is_active);
    }
    if let Some(search) = &query.search {
        remote = remote.search(search.as_str());
    }
    remote
}

/// Loads one page of users matching the filters.
pub fn list_users<R>(repo: &R, query: &UsersQuery, page_size: usize) -> ServiceResult<UsersPageData>
where
    R: UserReader + ?Sized,
{
    let payload = repo
        .list_users(remote_query(query, page_size))
        .map_err(|err| {
            log::error!("Failed to list users: {err}");
            err
        })?;

    let (total, items) = users(payload);

    Ok(UsersPageData {
        users: Paginated::new(items, query.page, total, page_size),
        search_query: query.search.clone(),
    })
}

/// Deletes a user and reloads the current page.
pub fn delete_user<R>(
    repo: &R,
    user_id: i64,
    query: &UsersQuery,
    page_size: usize,
) -> ServiceResult<UsersPageData>
where
    R: UserReader + UserWriter + ?Sized,
{
    let user_id = UserId::new(user_id)?;

    repo.delete_user(user_id).map_err(|err| {
        log::error!("Failed to delete user {user_id}: {err}");
        err
    })?;

    list_users(repo, query, page_size)
}
