use std::process;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use clap::Parser;
use mkdoc_cli::MkdocCli;
use mkdoc_core::MkdocConfig;
use mkdoc_core::MkdocResult;
use mkdoc_core::ScanOptions;
use mkdoc_core::render_json;
use mkdoc_core::scan_project;
use mkdoc_core::write_outputs;
use owo_colors::OwoColorize;
use owo_colors::Stream;
use tracing_subscriber::EnvFilter;

static USE_COLOR: AtomicBool = AtomicBool::new(true);

const TAG: &str = "[mkdoc]";

fn color_enabled() -> bool {
	USE_COLOR.load(Ordering::Relaxed)
}

/// The progress line prefix, green when color is enabled and stdout can
/// display it.
fn tag() -> String {
	if color_enabled() {
		TAG.if_supports_color(Stream::Stdout, |text| text.green())
			.to_string()
	} else {
		TAG.to_string()
	}
}

fn main() {
	let args = MkdocCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	if let Err(error) = run(&args) {
		let report: miette::Report = error.into();
		eprintln!("{report:?}");
		process::exit(2);
	}
}

fn init_tracing(verbose: bool, use_color: bool) {
	let default_directive = if verbose {
		"mkdoc=debug,mkdoc_core=debug"
	} else {
		"warn"
	};
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

fn load_config(args: &MkdocCli) -> MkdocResult<MkdocConfig> {
	if let Some(path) = &args.config {
		return MkdocConfig::load_file(path);
	}

	let cwd = std::env::current_dir()?;
	Ok(MkdocConfig::load(&cwd)?.unwrap_or_default())
}

fn run(args: &MkdocCli) -> MkdocResult<()> {
	let config = load_config(args)?;
	let options = ScanOptions::from_config(Some(&config));

	println!("{} Scanning directory: {}", tag(), args.root.display());
	let report = scan_project(&args.root, &options, |path| {
		println!("{} Parsing: {}", tag(), path.display());
	})?;
	tracing::debug!(
		files = report.files.len(),
		declarations = report.declarations,
		"scan finished"
	);

	if report.is_empty() {
		println!("{} No back section macros found.", tag());
		return Ok(());
	}

	if args.dry_run {
		println!("{}", render_json(&report.tree)?);
		return Ok(());
	}

	let out_dir = args.out_dir.clone().unwrap_or(config.output_dir);
	let written = write_outputs(&report.tree, &out_dir, args.format.into(), &config.html)?;

	if let Some(path) = written.json {
		println!("{} JSON saved to {}", tag(), path.display());
	}

	if let Some(path) = written.html {
		println!("{} HTML saved to {}", tag(), path.display());
	}

	Ok(())
}
