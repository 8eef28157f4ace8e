//! Generative AI Proxy Routes
//!
//! 所有接口都是对外部生成式模型的薄代理：
//! 拼 prompt → 调用上游 → 把文本装进 `{ 字段: 文本 }` 返回。

mod handler;

use axum::{Router, middleware, routing::get, routing::post};
use shared::Role;

use crate::auth::require_role;
use crate::core::ServerState;

/// AI router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/ai", routes())
}

fn routes() -> Router<ServerState> {
    // 分析类接口：admin / manager / hr
    let analyst_routes = Router::new()
        .route("/insights", get(handler::insights))
        .route("/sentiment", get(handler::sentiment))
        .route("/dashboard-insights", get(handler::dashboard_insights))
        .route("/chatbot", post(handler::chatbot))
        .route("/generate-template", post(handler::generate_template))
        .layer(middleware::from_fn(require_role(&[
            Role::Admin,
            Role::Manager,
            Role::Hr,
        ])));

    // 招聘类接口 (带文件上传)：admin / hr
    let recruiting_routes = Router::new()
        .route("/screen-resume", post(handler::screen_resume))
        .route("/voice-interview", post(handler::voice_interview))
        .layer(middleware::from_fn(require_role(&[Role::Admin, Role::Hr])));

    analyst_routes.merge(recruiting_routes)
}
