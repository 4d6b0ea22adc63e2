use actix_web::{HttpResponse, web};

use crate::forms::users::{UserListForm, UsersQuery};
use crate::gateway::RemoteService;
use crate::models::config::ServerConfig;
use crate::routes::respond;
use crate::services::users as users_service;

pub async fn show_users<G: RemoteService>(
    gateway: web::Data<G>,
    server_config: web::Data<ServerConfig>,
    web::Query(form): web::Query<UserListForm>,
) -> HttpResponse {
    let query = UsersQuery::from(form);
    let result = web::block(move || {
        users_service::list_users(gateway.get_ref(), &query, server_config.page_size)
    })
    .await;

    respond(result)
}

pub async fn delete_user<G: RemoteService>(
    gateway: web::Data<G>,
    server_config: web::Data<ServerConfig>,
    user_id: web::Path<i64>,
    web::Query(form): web::Query<UserListForm>,
) -> HttpResponse {
    let user_id = user_id.into_inner();
    let query = UsersQuery::from(form);
    let result = web::block(move || {
        users_service::delete_user(gateway.get_ref(), user_id, &query, server_config.page_size)
    })
    .await;

    respond(result)
}
