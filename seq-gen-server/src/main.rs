use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware, post, web};

use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use seq_gen_core::io::{LINE_WIDTH, format_fasta};
use seq_gen_core::{
	BaseWeights, Error, SequenceGenerator, SequenceRecord, SequenceRequest, Statistics, calculate_statistics,
	seeded_rng,
};

/// HTTP front-end of the sequence generator.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Address to bind
	#[arg(long, default_value = "127.0.0.1")]
	host: String,

	/// Port to listen on
	#[arg(long, default_value_t = 5000)]
	port: u16,

	/// Base weights as "A,C,G,T"
	#[arg(long)]
	weights: Option<BaseWeights>,
}

/// Query parameters of the `/v1/generate` and `GET /v1/statistics` endpoints
#[derive(Deserialize)]
struct GenerateParams {
	length: Option<String>,
	id: Option<String>,
	description: Option<String>,
	token: Option<String>,
	seed: Option<u64>,
	line_width: Option<usize>,
}

impl GenerateParams {
	/// Validates the parameters the same way the interactive prompts do.
	fn request(&self) -> Result<SequenceRequest, Error> {
		SequenceRequest::new(
			self.length.as_deref().unwrap_or(""),
			self.id.as_deref().unwrap_or(""),
			self.description.as_deref().unwrap_or(""),
			self.token.as_deref().unwrap_or(""),
		)
	}
}

struct SharedData {
	generator: SequenceGenerator,
}

impl SharedData {
	/// Builds a record for a request with its own random source.
	fn build(&self, params: &GenerateParams) -> Result<(SequenceRecord, u64), Error> {
		let request = params.request()?;
		let (mut rng, seed) = seeded_rng(params.seed);
		Ok((self.generator.build_record(&request, &mut rng), seed))
	}
}

#[derive(Serialize)]
struct GeneratedStatistics {
	header: String,
	sequence: String,
	insertion: usize,
	seed: u64,
	statistics: Statistics,
}

/// Maps an error to a status code, the message is the body.
fn error_response(e: &Error) -> HttpResponse {
	let mut response = match e {
		Error::Input(_) => HttpResponse::BadRequest(),
		Error::EmptyComposition => HttpResponse::UnprocessableEntity(),
		_ => {
			warn!("Request failed: {}", e);
			HttpResponse::InternalServerError()
		}
	};
	response.body(e.to_string())
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates a record from the query parameters and returns it as FASTA
/// text. Nothing is written to disk.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<SharedData>, query: web::Query<GenerateParams>) -> impl Responder {
	match data.build(&query) {
		Ok((record, _)) => HttpResponse::Ok()
			.content_type("text/plain; charset=utf-8")
			.body(format_fasta(&record.header(), &record.sequence, query.line_width.unwrap_or(LINE_WIDTH))),
		Err(e) => error_response(&e),
	}
}

/// HTTP GET endpoint `/v1/statistics`
///
/// Same parameters as `/v1/generate`; returns the record and its
/// statistics as JSON.
#[get("/v1/statistics")]
async fn get_statistics(data: web::Data<SharedData>, query: web::Query<GenerateParams>) -> impl Responder {
	let (record, seed) = match data.build(&query) {
		Ok(built) => built,
		Err(e) => return error_response(&e),
	};
	match record.statistics() {
		Ok(statistics) => HttpResponse::Ok().json(GeneratedStatistics {
			header: record.header(),
			sequence: record.sequence,
			insertion: record.insertion,
			seed,
			statistics,
		}),
		Err(e) => error_response(&e),
	}
}

/// HTTP POST endpoint `/v1/statistics`
///
/// Computes the statistics of the raw request body.
#[post("/v1/statistics")]
async fn post_statistics(body: String) -> impl Responder {
	match calculate_statistics(&body) {
		Ok(statistics) => HttpResponse::Ok().json(statistics),
		Err(e) => error_response(&e),
	}
}

fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(get_generated)
		.service(get_statistics)
		.service(post_statistics);
}

/// Main entry point for the server.
///
/// Builds the generator once and shares it read-only between workers;
/// every request gets its own random source.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

	let args = Args::parse();
	let generator = SequenceGenerator::new(args.weights.unwrap_or_default())
		.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
	let shared_data = web::Data::new(SharedData { generator });

	info!("Listening on {}:{}", args.host, args.port);
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.wrap(middleware::Logger::default())
			.app_data(shared_data.clone())
			.configure(configure)
	})
		.bind((args.host.as_str(), args.port))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;

	fn shared_data() -> web::Data<SharedData> {
		web::Data::new(SharedData { generator: SequenceGenerator::default() })
	}

	#[actix_web::test]
	async fn test_generate_returns_fasta() {
		let app = test::init_service(App::new().app_data(shared_data()).configure(configure)).await;
		let req = test::TestRequest::get()
			.uri("/v1/generate?length=200&id=seq1&description=a%20test&token=Ada&seed=7")
			.to_request();
		let body = test::call_and_read_body(&app, req).await;
		let text = std::str::from_utf8(&body).unwrap();

		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines[0], ">seq1 a test");
		assert_eq!(lines[1].len(), 80);
		assert_eq!(lines[1..].concat().len(), 203);
		assert!(lines[1..].concat().contains("Ada"));
	}

	#[actix_web::test]
	async fn test_generate_is_reproducible_with_seed() {
		let app = test::init_service(App::new().app_data(shared_data()).configure(configure)).await;
		let uri = "/v1/generate?length=50&id=s&token=x&seed=99";
		let first = test::call_and_read_body(&app, test::TestRequest::get().uri(uri).to_request()).await;
		let second = test::call_and_read_body(&app, test::TestRequest::get().uri(uri).to_request()).await;
		assert_eq!(first, second);
	}

	#[actix_web::test]
	async fn test_generate_rejects_invalid_input() {
		let app = test::init_service(App::new().app_data(shared_data()).configure(configure)).await;
		for uri in [
			"/v1/generate?length=0&id=s&token=x",
			"/v1/generate?length=abc&id=s&token=x",
			"/v1/generate?length=10&token=x",
			"/v1/generate?length=10&id=s",
			"/v1/generate?length=100000000000000&id=s&token=x",
			"/v1/statistics?length=100000001&id=s&token=x",
		] {
			let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
			assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
		}
	}

	#[actix_web::test]
	async fn test_get_statistics_json() {
		let app = test::init_service(App::new().app_data(shared_data()).configure(configure)).await;
		let req = test::TestRequest::get()
			.uri("/v1/statistics?length=1000&id=seq1&token=zz&seed=1")
			.to_request();
		let value: serde_json::Value = test::call_and_read_body_json(&app, req).await;

		assert_eq!(value["header"], "seq1 ");
		assert_eq!(value["seed"], 1);
		assert_eq!(value["statistics"]["total"], 1000);
		let sum: f64 = ["A", "C", "G", "T"]
			.iter()
			.map(|n| value["statistics"]["percentages"][n].as_f64().unwrap())
			.sum();
		assert!((sum - 100.0).abs() < 1e-9);
	}

	#[actix_web::test]
	async fn test_post_statistics() {
		let app = test::init_service(App::new().app_data(shared_data()).configure(configure)).await;

		let req = test::TestRequest::post().uri("/v1/statistics").set_payload("CCGG").to_request();
		let value: serde_json::Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(value["ratio"], "unbounded");
		assert_eq!(value["percentages"]["C"], 50.0);

		let req = test::TestRequest::post().uri("/v1/statistics").set_payload("AAAAxyz").to_request();
		let value: serde_json::Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(value["ratio"]["finite"], 0.0);

		let req = test::TestRequest::post().uri("/v1/statistics").set_payload("xyz").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
	}
}
