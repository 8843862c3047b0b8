use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::{Path, Query, Request, State},
    http::Method,
    response::{Html, Redirect},
    routing::get,
};
use serde::Deserialize;
use tower::util::MapRequest;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    AppState,
    error::AppResult,
    models::{Movie, MovieForm},
    seed, templates,
};

/// The router wrapped in method override, so it must sit outside routing.
pub type App = MapRequest<Router, fn(Request) -> Request>;

pub fn app(state: Arc<AppState>) -> App {
    let public_dir = state.config.public_dir.clone();

    let router = Router::new()
        .route("/", get(root))
        .route("/movies", get(index).post(create))
        .route("/movies/new", get(new_movie))
        .route("/movies/seed", get(seed_movies))
        .route("/movies/{id}", get(show).put(update).patch(update).delete(destroy))
        .route("/movies/{id}/edit", get(edit))
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    MapRequest::new(router, method_override as fn(Request) -> Request)
}

#[derive(Debug, Deserialize)]
struct MethodOverride {
    #[serde(rename = "_method")]
    method: Option<String>,
}

/// Lets an HTML form `POST` to `?_method=PUT|PATCH|DELETE`.
fn method_override(mut req: Request) -> Request {
    if req.method() != Method::POST {
        return req;
    }

    let Ok(Query(MethodOverride { method: Some(method) })) =
        Query::<MethodOverride>::try_from_uri(req.uri())
    else {
        return req;
    };

    let overridden = match method.to_ascii_uppercase().as_str() {
        "PUT" => Method::PUT,
        "PATCH" => Method::PATCH,
        "DELETE" => Method::DELETE,
        _ => return req,
    };
    *req.method_mut() = overridden;
    req
}

pub async fn root() -> &'static str {
    "your server is running... better catch it."
}

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.movies.list_all().await?;
    Ok(Html(templates::index_page(&movies)))
}

pub async fn new_movie() -> Html<String> {
    Html(templates::new_page())
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Form(form): Form<MovieForm>,
) -> AppResult<Redirect> {
    state.movies.create(form).await?;
    Ok(Redirect::to("/movies"))
}

pub async fn seed_movies(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.movies.replace_all_with_seed(seed::starter_movies()).await?;
    Ok(Json(movies))
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let movie = state.movies.get_by_id(&id).await?;
    Ok(Html(templates::show_page(&movie)))
}

pub async fn edit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let movie = state.movies.get_by_id(&id).await?;
    Ok(Html(templates::edit_page(&movie)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<MovieForm>,
) -> AppResult<Redirect> {
    let movie = state.movies.update(&id, form).await?;
    Ok(Redirect::to(&format!("/movies/{}", movie.id)))
}

pub async fn destroy(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Redirect> {
    if !state.movies.delete(&id).await? {
        tracing::debug!(id = %id, "delete of absent movie");
    }
    Ok(Redirect::to("/movies"))
}
