use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::Parser;
use log::{info, warn};

use name_box_client::{ApiClient, ClientConfig, SymbolPair, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use name_box_core::model::prompt::{image_prompt, ImageStyle};
use name_box_core::model::report::GeneratedBox;
use name_box_core::model::selection::SymbolSelection;
use name_box_core::{ImageryOptions, Lexicon, NameAnalyzer};

/// Turn a name into a blind box
#[derive(Parser, Debug)]
#[command(name = "name-box", version)]
struct Cli {
	/// Name or nickname to analyze
	name: String,

	/// Image style (realistic, cartoon, watercolor, ink, 3d, anime, pixar)
	#[arg(long)]
	style: Option<ImageStyle>,

	/// Ask the API for the symbol pair instead of the local lexicon
	#[arg(long, conflicts_with = "offline")]
	remote: bool,

	/// Skip image generation
	#[arg(long)]
	offline: bool,

	/// Lexicon file used instead of the built-in table
	#[arg(long)]
	lexicon: Option<PathBuf>,

	/// Generation API root
	#[arg(long, env = "NAME_BOX_API_URL", default_value = DEFAULT_API_URL)]
	api_url: String,

	/// Request timeout in seconds
	#[arg(long, env = "NAME_BOX_API_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
	timeout: u64,

	/// Enable debug logging
	#[arg(short, long)]
	verbose: bool,
}

/// Picks the first option of each list, skipping a repeat of the first pick.
fn first_pair(options: &ImageryOptions) -> Option<SymbolPair> {
	let mut selection = SymbolSelection::new();
	selection.toggle(options.element1_options.first()?);
	let second = options
		.element2_options
		.iter()
		.find(|candidate| !selection.contains(candidate))?;
	selection.toggle(second);
	selection.pair().map(|(symbol1, symbol2)| SymbolPair::new(symbol1, symbol2))
}

/// Rejects blank names and hands back the name untrimmed.
///
/// Padding is part of the name: it shifts every character's position.
fn checked_name(name: &str) -> Result<&str, String> {
	if name.trim().is_empty() {
		return Err("Please enter a name or nickname".to_owned());
	}
	Ok(name)
}

fn print_options(options: &ImageryOptions) {
	println!("Element 1: {}", options.element1_options.join(" / "));
	println!("Element 2: {}", options.element2_options.join(" / "));
}

fn print_box(generated: &GeneratedBox) {
	println!();
	println!("[{}] {}", generated.rarity, generated.title());
	println!("{}", generated.analysis);
	match &generated.image_url {
		Some(url) => println!("Image: {url}"),
		None => println!("Image: (not generated)"),
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let cli = Cli::parse();
	let level = if cli.verbose { "debug" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

	let name = checked_name(&cli.name)?;

	let client = ApiClient::new(&ClientConfig {
		base_url: cli.api_url.clone(),
		timeout: Duration::from_secs(cli.timeout),
	})?;

	let pair = if cli.remote {
		let response = client.generate_symbols(name)?;
		info!("API proposed {} symbol pairs", response.symbol_dict.len());
		let option = response
			.symbol_dict
			.into_iter()
			.next()
			.ok_or("The API returned no symbol pair")?;
		SymbolPair::new(&option.symbol1, &option.symbol2)
	} else {
		let lexicon = match &cli.lexicon {
			Some(path) => Lexicon::new(path)?,
			None => Lexicon::default(),
		};
		let options = NameAnalyzer::new(lexicon).analyze(name);
		print_options(&options);
		first_pair(&options).ok_or("Not enough imagery to build a pair")?
	};

	println!("Prompt: {}", image_prompt(&pair.symbol1, &pair.symbol2, cli.style));

	let id = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis().to_string();
	let mut generated = GeneratedBox::new(&id, &pair.symbol1, &pair.symbol2, &mut rand::rng());

	if !cli.offline {
		if !client.check_connection() {
			warn!("API at {} did not answer the health check", cli.api_url);
		}
		let image = client.generate_image(&pair)?;
		info!("Image generation status: {}", image.status);
		generated.attach_image(&image.image_url);
	}

	generated.open()?;
	print_box(&generated);
	Ok(())
}
