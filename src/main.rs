// src/main.rs

use std::env;
use std::error::Error;
use std::path::Path;

use trial_csv_render::config::RunConfig;
use trial_csv_render::pipeline::run;
use trial_csv_render::style::StyleContext;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 || args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: {} [config.json]", args[0]);
        eprintln!("Without a config file the built-in foot/hand groups are rendered.");
        std::process::exit(2);
    }

    let config = match args.get(1) {
        Some(path) => RunConfig::from_json_file(Path::new(path))?,
        None => {
            log::info!("No config file given, using the built-in groups.");
            RunConfig::builtin()
        }
    };

    log::info!(
        "trial_csv_render {} - {} group(s) to render",
        trial_csv_render::crate_version(),
        config.groups.len()
    );

    // Style is fixed for the rest of the process from here on.
    let style = StyleContext::install(config.style.clone());

    let outcomes = run(&config, style);
    let failed: Vec<&str> = outcomes
        .iter()
        .filter(|(_, result)| result.is_err())
        .map(|(name, _)| name.as_str())
        .collect();

    if failed.is_empty() {
        log::info!("All {} group(s) rendered.", outcomes.len());
        Ok(())
    } else {
        Err(format!(
            "{} of {} group(s) failed: {}",
            failed.len(),
            outcomes.len(),
            failed.join(", ")
        )
        .into())
    }
}

// src/main.rs
