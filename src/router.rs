use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware, routing::get};
use tower_http::cors::{AllowOrigin, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

use rollcall_config::CorsConfig;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::{metrics_handler, metrics_middleware};
use crate::modules::auth::router::{init_auth_delete_router, init_auth_router};
use crate::modules::classrooms::router::{
    init_classrooms_add_router, init_classrooms_delete_router, init_classrooms_get_router,
};
use crate::modules::health::router::init_health_router;
use crate::modules::roster::router::{
    init_roster_add_router, init_roster_delete_router, init_roster_get_router,
};
use crate::modules::schools::router::{init_schools_add_router, init_schools_get_router};
use crate::modules::semesters::router::{
    init_semesters_add_router, init_semesters_delete_router, init_semesters_get_router,
};
use crate::modules::teachers::router::{init_teachers_add_router, init_teachers_delete_router};
use crate::modules::users::router::{init_users_add_router, init_users_get_router};
use crate::state::AppState;

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);

    if config.allows_any() {
        return layer.allow_origin(AllowOrigin::any());
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    layer
        .allow_origin(allowed_origins)
        .allow_credentials(true)
}

fn init_add_router() -> Router<AppState> {
    Router::new()
        .merge(init_semesters_add_router())
        .merge(init_roster_add_router())
        .merge(init_schools_add_router())
        .merge(init_users_add_router())
        .merge(init_teachers_add_router())
        .merge(init_classrooms_add_router())
}

fn init_get_router() -> Router<AppState> {
    Router::new()
        .merge(init_semesters_get_router())
        .merge(init_roster_get_router())
        .merge(init_schools_get_router())
        .merge(init_users_get_router())
        .merge(init_classrooms_get_router())
}

fn init_delete_router() -> Router<AppState> {
    Router::new()
        .merge(init_auth_delete_router())
        .merge(init_semesters_delete_router())
        .merge(init_roster_delete_router())
        .merge(init_teachers_delete_router())
        .merge(init_classrooms_delete_router())
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/metrics", get(metrics_handler))
        .nest(
            "/api",
            Router::new()
                .merge(init_health_router())
                .nest("/auth", init_auth_router())
                .nest("/add", init_add_router())
                .nest("/get", init_get_router())
                .nest("/delete", init_delete_router()),
        )
        .with_state(state.clone())
        .layer(cors_layer(&state.cors_config))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
