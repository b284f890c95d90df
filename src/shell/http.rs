use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    response::Html,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::contacts::use_cases::delete_contact::inbound::http as delete_http;
use crate::modules::contacts::use_cases::edit_contact::inbound::http as edit_http;
use crate::modules::contacts::use_cases::import_contacts::inbound::http as import_http;
use crate::modules::contacts::use_cases::list_contacts::inbound::http as list_http;
use crate::shell::config::AppConfig;
use crate::shell::graphql::{AppSchema, schema};
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

pub fn router(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .route("/contacts", get(list_http::handle))
        .route("/contacts/import", post(import_http::handle))
        .route(
            "/contacts/{id}",
            get(list_http::handle_one)
                .put(edit_http::handle)
                .delete(delete_http::handle),
        )
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema(state.clone())))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
