use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, post, web};

use serde::{Deserialize, Serialize};

use rs_shard_core::digest::Md5Digest;
use rs_shard_core::partition::analyzer::{AssignmentRecord, analyze};
use rs_shard_core::partition::summary::{DistributionSummary, summarize};
use rs_shard_core::pattern::generator::generate_many;

/// Query parameters for the `/v1/generate` endpoint.
#[derive(Deserialize)]
struct GenerateParams {
	pattern: String,
	count: Option<i64>,
}

/// Request body for the `/v1/analyze` endpoint.
#[derive(Deserialize)]
struct AnalyzeRequest {
	keys: Vec<String>,
	partition_count: u64,
}

/// Request body for the `/v1/simulate` endpoint.
#[derive(Deserialize)]
struct SimulateRequest {
	pattern: String,
	count: Option<i64>,
	partition_count: u64,
}

#[derive(Serialize)]
struct AnalyzeResponse {
	records: Vec<AssignmentRecord>,
	summary: DistributionSummary,
}

#[derive(Serialize)]
struct SimulateResponse {
	keys: Vec<String>,
	records: Vec<AssignmentRecord>,
	summary: DistributionSummary,
}

fn analyze_keys(keys: &[String], partition_count: u64) -> Result<AnalyzeResponse, String> {
	let records = analyze(&Md5Digest, keys, partition_count).map_err(|e| e.to_string())?;
	let indexes: Vec<u64> = records.iter().map(|r| r.partition_index).collect();
	let summary = summarize(partition_count, &indexes).map_err(|e| e.to_string())?;
	Ok(AnalyzeResponse { records, summary })
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates a batch of synthetic keys from a restricted pattern.
/// Returns the keys as a JSON array of strings.
#[get("/v1/generate")]
async fn get_generated(query: web::Query<GenerateParams>) -> impl Responder {
	let count = query.count.unwrap_or(10);

	match generate_many(&query.pattern, count) {
		Ok(keys) => HttpResponse::Ok().json(keys),
		Err(e) => HttpResponse::BadRequest().body(e.to_string()),
	}
}

/// HTTP POST endpoint `/v1/analyze`
///
/// Maps the supplied keys to partitions and returns the per-key
/// records together with the distribution summary.
#[post("/v1/analyze")]
async fn post_analyze(body: web::Json<AnalyzeRequest>) -> impl Responder {
	match analyze_keys(&body.keys, body.partition_count) {
		Ok(response) => HttpResponse::Ok().json(response),
		Err(e) => HttpResponse::BadRequest().body(e),
	}
}

/// HTTP POST endpoint `/v1/simulate`
///
/// Generates keys from a pattern, then analyzes them in one call:
/// the full stress-test loop.
#[post("/v1/simulate")]
async fn post_simulate(body: web::Json<SimulateRequest>) -> impl Responder {
	let count = body.count.unwrap_or(1000);

	let keys = match generate_many(&body.pattern, count) {
		Ok(keys) => keys,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
	};

	match analyze_keys(&keys, body.partition_count) {
		Ok(response) => HttpResponse::Ok().json(SimulateResponse {
			keys,
			records: response.records,
			summary: response.summary,
		}),
		Err(e) => HttpResponse::BadRequest().body(e),
	}
}

/// Main entry point for the server.
///
/// The core is stateless and side-effect-free, so no shared state is
/// needed; every request carries all of its inputs.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - CORS is permissive so a browser frontend can call it directly.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	HttpServer::new(|| {
		App::new()
			.wrap(Cors::permissive())
			.service(get_generated)
			.service(post_analyze)
			.service(post_simulate)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
