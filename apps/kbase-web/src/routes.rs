use axum::{
	Form, Json, Router,
	extract::State,
	http::StatusCode,
	response::{Html, IntoResponse, Response},
	routing::{get, post},
};
use serde::{Deserialize, Serialize};

use kbase_service::{BatchReport, EntryInput, Error as ServiceError, KbService, Selection};

use crate::{html, state::AppState};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/", get(index).post(search_form))
		.route("/health", get(health))
		.route("/v1/search", post(search))
		.route("/v1/entries", post(entries))
		.route("/v1/reedit", post(reedit))
		.with_state(state)
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchForm {
	pub search_query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
	pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitView {
	pub key: String,
	pub weight: i64,
	pub score: u32,
	pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
	pub hits: Vec<HitView>,
	/// Absent when nothing matched, since enrichment is skipped then.
	pub enrichment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntriesRequest {
	pub entries: Vec<EntryInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReEditRequest {
	pub query: String,
	pub selection: String,
	pub weight: i64,
	pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReEditResponse {
	/// `None` when the selection was the return keyword.
	pub key: Option<String>,
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn index() -> Html<String> {
	Html(html::search_page(None, &[], None))
}

async fn search_form(
	State(state): State<AppState>,
	Form(form): Form<SearchForm>,
) -> Result<Html<String>, ApiError> {
	let response = run_search(&state, &form.search_query).await?;

	Ok(Html(html::search_page(
		Some(&form.search_query),
		&response.hits,
		response.enrichment.as_deref(),
	)))
}

async fn search(
	State(state): State<AppState>,
	Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = run_search(&state, &payload.query).await?;

	Ok(Json(response))
}

async fn entries(
	State(state): State<AppState>,
	Json(payload): Json<EntriesRequest>,
) -> Result<Json<BatchReport>, ApiError> {
	let mut service = state.service.lock().await;

	service.reload()?;

	let report = service.apply_batch(payload.entries)?;

	Ok(Json(report))
}

async fn reedit(
	State(state): State<AppState>,
	Json(payload): Json<ReEditRequest>,
) -> Result<Json<ReEditResponse>, ApiError> {
	let mut service = state.service.lock().await;

	service.reload()?;

	let hits = service.rank(&payload.query);

	match service.select(&hits, &payload.selection) {
		Selection::Return => Ok(Json(ReEditResponse { key: None })),
		Selection::Chosen { key, .. } => {
			service.re_edit(&key, payload.weight, &payload.description)?;

			Ok(Json(ReEditResponse { key: Some(key) }))
		},
		Selection::InvalidSelection { index, len } => Err(json_error(
			StatusCode::UNPROCESSABLE_ENTITY,
			"invalid_selection",
			format!("Selection {index} is outside 1-{len}."),
		)),
		Selection::InvalidInput { raw } => Err(json_error(
			StatusCode::UNPROCESSABLE_ENTITY,
			"invalid_input",
			format!("Selection {raw:?} is neither a number nor the return keyword."),
		)),
	}
}

async fn run_search(state: &AppState, query: &str) -> Result<SearchResponse, ApiError> {
	let (hits, lookup) = {
		let mut service = state.service.lock().await;

		service.reload()?;

		let hits: Vec<HitView> =
			service.rank(query).into_iter().map(|hit| hit_view(&service, hit)).collect();
		let lookup = (!hits.is_empty()).then(|| service.enrichment(query));

		(hits, lookup)
	};
	let Some(lookup) = lookup else {
		tracing::info!(query, "Search found no matching keys.");

		return Ok(SearchResponse { hits, enrichment: None });
	};
	let enrichment = lookup.await;

	tracing::info!(query, hits = hits.len(), "Search completed.");

	Ok(SearchResponse { hits, enrichment: Some(enrichment) })
}

fn hit_view(service: &KbService, hit: kbase_service::SearchHit) -> HitView {
	let description = service.describe(&hit.key).to_string();

	HitView { key: hit.key, weight: hit.weight, score: hit.score, description }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

pub fn json_error(status: StatusCode, code: &str, message: impl Into<String>) -> ApiError {
	ApiError::new(status, code, message)
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidRequest { message } =>
				json_error(StatusCode::BAD_REQUEST, "invalid_request", message),
			ServiceError::NotFound { message } =>
				json_error(StatusCode::NOT_FOUND, "not_found", message),
			ServiceError::Storage { message } => {
				tracing::error!(%message, "Storage failure while serving request.");

				json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", message)
			},
			ServiceError::Input { message } =>
				json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
