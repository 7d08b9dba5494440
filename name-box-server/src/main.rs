mod config;

use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use log::{error, info};
use serde::{Deserialize, Serialize};

use name_box_core::model::prompt::{image_prompt, ImageStyle};
use name_box_core::model::selection::symbol_library;
use name_box_core::{CombinationGenerator, Lexicon, NameAnalyzer};

use crate::config::ServerConfig;

/// Query parameters of `/v1/analyze`
#[derive(Deserialize)]
struct AnalyzeParams {
	name: Option<String>,
}

/// Query parameters of `/v1/prompt`
#[derive(Deserialize)]
struct PromptParams {
	element1: Option<String>,
	element2: Option<String>,
	style: Option<String>, // wire value, ex. "ink" or "3d"; none for the base prompt
}

#[derive(Serialize)]
struct StyleOption {
	value: &'static str,
	label: &'static str,
}

/// Read-only state shared by every worker.
///
/// Nothing here is mutated after startup, so no lock is needed.
struct SharedData {
	analyzer: NameAnalyzer,
	generator: CombinationGenerator,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
	value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// HTTP GET endpoint `/v1/analyze`
///
/// Returns both candidate imagery lists for `name`.
#[get("/v1/analyze")]
async fn get_analyze(data: web::Data<SharedData>, query: web::Query<AnalyzeParams>) -> impl Responder {
	// Blank names are rejected here; the analyzer gets the name untrimmed,
	// since padding shifts character positions
	let name = match query.name.as_deref() {
		Some(name) if !name.trim().is_empty() => name,
		_ => return HttpResponse::BadRequest().body("Missing or empty name"),
	};
	HttpResponse::Ok().json(data.analyzer.analyze(name))
}

/// HTTP GET endpoint `/v1/combination`
///
/// Draws one curated or random combination.
#[get("/v1/combination")]
async fn get_combination(data: web::Data<SharedData>) -> impl Responder {
	let combination = data.generator.generate(&mut rand::rng());
	HttpResponse::Ok().json(combination)
}

#[get("/v1/styles")]
async fn get_styles() -> impl Responder {
	let styles: Vec<StyleOption> = ImageStyle::ALL
		.into_iter()
		.map(|style| StyleOption { value: style.value(), label: style.label() })
		.collect();
	HttpResponse::Ok().json(styles)
}

/// HTTP GET endpoint `/v1/prompt`
///
/// Builds the image generation prompt for two imagery words.
#[get("/v1/prompt")]
async fn get_prompt(query: web::Query<PromptParams>) -> impl Responder {
	let (element1, element2) = match (non_empty(&query.element1), non_empty(&query.element2)) {
		(Some(e1), Some(e2)) => (e1, e2),
		_ => return HttpResponse::BadRequest().body("element1 and element2 are required"),
	};
	let style = match non_empty(&query.style).map(str::parse::<ImageStyle>) {
		None => None,
		Some(Ok(style)) => Some(style),
		Some(Err(e)) => return HttpResponse::BadRequest().body(e),
	};
	HttpResponse::Ok().body(image_prompt(element1, element2, style))
}

#[get("/v1/symbols")]
async fn get_symbols() -> impl Responder {
	HttpResponse::Ok().json(symbol_library())
}

/// Registers every endpoint.
fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(get_analyze)
		.service(get_combination)
		.service(get_styles)
		.service(get_prompt)
		.service(get_symbols);
}

/// Builds the lexicon named by the configuration, or the built-in one.
fn load_lexicon(config: &ServerConfig) -> Result<Lexicon, Box<dyn std::error::Error>> {
	match &config.lexicon {
		Some(path) => Lexicon::new(path),
		None => Ok(Lexicon::default()),
	}
}

/// Main entry point for the server.
///
/// Loads the lexicon, shares the analyzer and generator with every worker,
/// and starts an Actix-web HTTP server.
///
/// # Notes
/// - The bind address and lexicon file come from `ServerConfig`.
/// - Log level follows `RUST_LOG` (default `info`).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = ServerConfig::from_env();
	let lexicon = match load_lexicon(&config) {
		Ok(lexicon) => lexicon,
		Err(e) => {
			error!("Failed to load lexicon: {e}");
			return Err(std::io::Error::other(e.to_string()));
		}
	};
	info!("Using lexicon '{}' ({} characters)", lexicon.name(), lexicon.len());

	let shared_data = web::Data::new(SharedData {
		analyzer: NameAnalyzer::new(lexicon),
		generator: CombinationGenerator::default(),
	});

	info!("Listening on {}", config.bind);
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.configure(routes)
	})
		.bind(config.bind.as_str())?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::{http::StatusCode, test};
	use name_box_core::{Combination, ImageryOptions};

	fn shared_data() -> web::Data<SharedData> {
		web::Data::new(SharedData {
			analyzer: NameAnalyzer::default(),
			generator: CombinationGenerator::default(),
		})
	}

	#[actix_web::test]
	async fn analyze_returns_both_lists() {
		let app = test::init_service(App::new().app_data(shared_data()).configure(routes)).await;
		let req = test::TestRequest::get().uri("/v1/analyze?name=%E5%BC%A0%E4%B8%89").to_request();
		let options: ImageryOptions = test::call_and_read_body_json(&app, req).await;
		assert_eq!(options.element1_options[0], "帐篷");
		assert_eq!(options.element2_options.len(), 5);
	}

	#[actix_web::test]
	async fn analyze_keeps_leading_padding() {
		let app = test::init_service(App::new().app_data(shared_data()).configure(routes)).await;
		let req = test::TestRequest::get().uri("/v1/analyze?name=%20%E5%BC%A0").to_request();
		let options: ImageryOptions = test::call_and_read_body_json(&app, req).await;
		// ' ' sits at index 0, so '张' is odd and feeds the second list
		assert_eq!(options, NameAnalyzer::default().analyze(" 张"));
		assert_eq!(options.element2_options[0], "帐篷");
	}

	#[actix_web::test]
	async fn analyze_rejects_blank_names() {
		let app = test::init_service(App::new().app_data(shared_data()).configure(routes)).await;
		for uri in ["/v1/analyze", "/v1/analyze?name=%20"] {
			let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
			assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
		}
	}

	#[actix_web::test]
	async fn combination_pairs_distinct_elements() {
		let app = test::init_service(App::new().app_data(shared_data()).configure(routes)).await;
		for _ in 0..20 {
			let req = test::TestRequest::get().uri("/v1/combination").to_request();
			let combination: Combination = test::call_and_read_body_json(&app, req).await;
			assert_ne!(combination.element1.id, combination.element2.id);
		}
	}

	#[actix_web::test]
	async fn prompt_validates_style() {
		let app = test::init_service(App::new().app_data(shared_data()).configure(routes)).await;

		let req = test::TestRequest::get().uri("/v1/prompt?element1=dragon&element2=cat&style=anime").to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert!(String::from_utf8_lossy(&body).starts_with("A creative, whimsical fusion of dragon and cat, anime style"));

		let req = test::TestRequest::get().uri("/v1/prompt?element1=dragon&element2=cat&style=oil").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn styles_and_symbols_are_listed() {
		let app = test::init_service(App::new().app_data(shared_data()).configure(routes)).await;

		let req = test::TestRequest::get().uri("/v1/styles").to_request();
		let styles: serde_json::Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(styles.as_array().map(Vec::len), Some(ImageStyle::ALL.len()));
		assert_eq!(styles[4]["value"], "3d");

		let req = test::TestRequest::get().uri("/v1/symbols").to_request();
		let symbols: serde_json::Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(symbols.as_array().map(Vec::len), Some(4));
	}
}
