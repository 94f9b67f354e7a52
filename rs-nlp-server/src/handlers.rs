use std::sync::{Mutex, MutexGuard};

use actix_web::{get, post, web, HttpResponse, Responder};
use log::warn;
use serde::Deserialize;
use serde_json::Value;

use rs_nlp_core::analysis::ngram::{rank_json_tokens, NGramOrder};
use rs_nlp_core::analyzer::Analyzer;
use rs_nlp_core::config::DEFAULT_PREVIEW_LENGTH;
use rs_nlp_core::input::{AnalysisState, TextInput};
use rs_nlp_core::report::{
	ngram_records, no_repeats_message, ranking_records, AnalysisReport, FetchReport, PosReport,
	PreviewReport, SentimentReport, NO_ENTITIES_MESSAGE, NO_POS_TAGS_MESSAGE, NO_REPEATS_MESSAGE,
};
use rs_nlp_core::web::validate_url;

use crate::errors::ApiError;
use crate::fetch::PageFetcher;

/// State shared by every worker.
pub struct SharedData {
	pub analyzer: Analyzer,
}

impl SharedData {
	pub fn new(cache_capacity: usize) -> Self {
		Self { analyzer: Analyzer::new(cache_capacity) }
	}
}

/// Body of every analysis request.
///
/// A non-blank `url` takes precedence over `text`. When neither is given
/// the input is absent.
#[derive(Deserialize, Debug, Default)]
pub struct AnalysisRequest {
	#[serde(default)]
	pub text: Option<String>,
	#[serde(default)]
	pub url: Option<String>,
}

#[derive(Deserialize)]
struct NGramQuery {
	order: Option<usize>,
}

#[derive(Deserialize)]
struct PreviewQuery {
	length: Option<usize>,
}

fn lock(data: &web::Data<Mutex<SharedData>>) -> Result<MutexGuard<'_, SharedData>, ApiError> {
	data.lock().map_err(|_| ApiError::Internal("Analyzer lock failed".to_owned()))
}

/// Turns a request into a typed input, fetching the page when a URL is given.
async fn resolve_input(fetcher: &PageFetcher, request: &AnalysisRequest) -> Result<TextInput, ApiError> {
	match request.url.as_deref().map(str::trim).filter(|url| !url.is_empty()) {
		Some(url) => {
			let url = validate_url(url).inspect_err(|_| warn!("Rejected URL {url:?}"))?;
			Ok(TextInput::new(fetcher.fetch_text(url).await?))
		}
		None => Ok(TextInput::from(request.text.clone())),
	}
}

/// HTTP POST endpoint `/v1/ngrams`
///
/// Returns the repeating n-grams of one order (`?order=1|2|3`, default 2)
/// as `{occurrences, succesive_tokens}` records, most frequent first.
#[post("/v1/ngrams")]
async fn post_ngrams(
	data: web::Data<Mutex<SharedData>>,
	fetcher: web::Data<PageFetcher>,
	query: web::Query<NGramQuery>,
	request: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, ApiError> {
	let order = NGramOrder::from_size(query.order.unwrap_or(2))?;
	let input = resolve_input(&fetcher, &request).await?;

	let mut shared_data = lock(&data)?;
	let state = shared_data.analyzer.ngrams(&input, order);
	Ok(HttpResponse::Ok().json(AnalysisReport::from_state(state, &no_repeats_message(order), |ranked| {
		ngram_records(&ranked)
	})))
}

/// HTTP POST endpoint `/v1/ngrams/all`
///
/// Returns the repeating n-grams of every order, keyed `"1"`, `"2"`, `"3"`.
#[post("/v1/ngrams/all")]
async fn post_all_ngrams(
	data: web::Data<Mutex<SharedData>>,
	fetcher: web::Data<PageFetcher>,
	request: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, ApiError> {
	let input = resolve_input(&fetcher, &request).await?;

	let mut shared_data = lock(&data)?;
	let state = shared_data.analyzer.ngram_ranking(&input);
	Ok(HttpResponse::Ok().json(AnalysisReport::from_state(state, NO_REPEATS_MESSAGE, |ranking| {
		ranking_records(&ranking)
	})))
}

/// HTTP POST endpoint `/v1/ngrams/tokens`
///
/// Ranks an already tokenized sequence sent as a raw JSON array. Any
/// non-string element is rejected with 400.
#[post("/v1/ngrams/tokens")]
async fn post_token_ngrams(tokens: web::Json<Value>) -> Result<HttpResponse, ApiError> {
	let ranking = rank_json_tokens(&tokens).inspect_err(|e| warn!("Rejected token input: {e}"))?;
	let state = AnalysisState::from_value(ranking, |ranking| ranking.is_empty());
	Ok(HttpResponse::Ok().json(AnalysisReport::from_state(state, NO_REPEATS_MESSAGE, |ranking| {
		ranking_records(&ranking)
	})))
}

/// HTTP POST endpoint `/v1/pos`
///
/// Returns the frequency of every part-of-speech tag and the most common one.
#[post("/v1/pos")]
async fn post_pos(
	data: web::Data<Mutex<SharedData>>,
	fetcher: web::Data<PageFetcher>,
	request: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, ApiError> {
	let input = resolve_input(&fetcher, &request).await?;

	let mut shared_data = lock(&data)?;
	let state = shared_data.analyzer.pos(&input);
	let report = match state {
		AnalysisState::Ready(frequency) => {
			let report = PosReport::from(&frequency);
			match report.summary() {
				Some(summary) => AnalysisReport::ok_with_message(report, summary),
				None => AnalysisReport::ok(report),
			}
		}
		other => AnalysisReport::from_state(other, NO_POS_TAGS_MESSAGE, |frequency| PosReport::from(&frequency)),
	};
	Ok(HttpResponse::Ok().json(report))
}

/// HTTP POST endpoint `/v1/entities`
#[post("/v1/entities")]
async fn post_entities(
	data: web::Data<Mutex<SharedData>>,
	fetcher: web::Data<PageFetcher>,
	request: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, ApiError> {
	let input = resolve_input(&fetcher, &request).await?;

	let mut shared_data = lock(&data)?;
	let state = shared_data.analyzer.entities(&input);
	Ok(HttpResponse::Ok().json(AnalysisReport::from_state(state, NO_ENTITIES_MESSAGE, |entities| entities)))
}

/// HTTP POST endpoint `/v1/sentiment`
#[post("/v1/sentiment")]
async fn post_sentiment(
	data: web::Data<Mutex<SharedData>>,
	fetcher: web::Data<PageFetcher>,
	request: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, ApiError> {
	let input = resolve_input(&fetcher, &request).await?;

	let mut shared_data = lock(&data)?;
	let state = shared_data.analyzer.sentiment(&input);
	let report = match state {
		AnalysisState::Ready(sentiment) => {
			let report = SentimentReport::from(sentiment);
			let summary = report.summary.clone();
			AnalysisReport::ok_with_message(report, summary)
		}
		other => AnalysisReport::from_state(other, "", SentimentReport::from),
	};
	Ok(HttpResponse::Ok().json(report))
}

/// HTTP POST endpoint `/v1/stats`
///
/// Returns the word and character counts of the input.
#[post("/v1/stats")]
async fn post_stats(
	data: web::Data<Mutex<SharedData>>,
	fetcher: web::Data<PageFetcher>,
	request: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, ApiError> {
	let input = resolve_input(&fetcher, &request).await?;

	let shared_data = lock(&data)?;
	let report = match shared_data.analyzer.stats(&input) {
		AnalysisState::Ready(stats) => AnalysisReport::ok_with_message(stats, stats.summary()),
		other => AnalysisReport::from_state(other, "", |stats| stats),
	};
	Ok(HttpResponse::Ok().json(report))
}

/// HTTP POST endpoint `/v1/preview`
///
/// Returns the first `?length=` tokens (0 to 300, default 50) of the input.
#[post("/v1/preview")]
async fn post_preview(
	data: web::Data<Mutex<SharedData>>,
	fetcher: web::Data<PageFetcher>,
	query: web::Query<PreviewQuery>,
	request: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, ApiError> {
	let length = query.length.unwrap_or(DEFAULT_PREVIEW_LENGTH);
	let input = resolve_input(&fetcher, &request).await?;

	let shared_data = lock(&data)?;
	let state = shared_data.analyzer.preview(&input, length)?;
	Ok(HttpResponse::Ok().json(AnalysisReport::from_state(state, "Nothing to preview.", |preview| {
		PreviewReport { preview }
	})))
}

/// HTTP POST endpoint `/v1/fetch`
///
/// Returns the paragraph text scraped from `url`.
#[post("/v1/fetch")]
async fn post_fetch(
	fetcher: web::Data<PageFetcher>,
	request: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, ApiError> {
	let Some(url) = request.url.as_deref() else {
		return Err(ApiError::BadRequest("Missing url".to_owned()));
	};
	let url = validate_url(url)?;
	let text = fetcher.fetch_text(url).await?;
	Ok(HttpResponse::Ok().json(AnalysisReport::ok(FetchReport { text })))
}

#[get("/v1/health")]
async fn get_health() -> impl Responder {
	HttpResponse::Ok().body("ok")
}

/// Registers every endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(post_ngrams)
		.service(post_all_ngrams)
		.service(post_token_ngrams)
		.service(post_pos)
		.service(post_entities)
		.service(post_sentiment)
		.service(post_stats)
		.service(post_preview)
		.service(post_fetch)
		.service(get_health);
}
