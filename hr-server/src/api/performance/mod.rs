//! Performance Review API Module

mod handler;

use axum::{Router, middleware, routing::get};
use shared::Role;

use crate::auth::require_role;
use crate::core::ServerState;

/// Performance router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/performance", routes())
}

fn routes() -> Router<ServerState> {
    // 读取路由：admin / manager / hr
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .layer(middleware::from_fn(require_role(&[
            Role::Admin,
            Role::Manager,
            Role::Hr,
        ])));

    // 创建路由：admin / manager
    let write_routes = Router::new()
        .route("/", axum::routing::post(handler::create))
        .layer(middleware::from_fn(require_role(&[
            Role::Admin,
            Role::Manager,
        ])));

    // 自助路由：任意已登录账号查看自己的考核
    let self_routes = Router::new().route("/my-reviews", get(handler::my_reviews));

    read_routes.merge(write_routes).merge(self_routes)
}
