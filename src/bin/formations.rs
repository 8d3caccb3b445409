use lib::formations::helpers;
use lib::formations::models;
use lib::formations::run_tool::run;

use std::error::Error;

use clap::Parser;
use helpers::load_config;
use log::info;
use models::Args;

fn main() -> Result<(), Box<dyn Error>> {
    /* Get all the required resources */
    let args = Args::parse();
    let config = load_config(&args)?;

    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(config.log_level)
        .init();
    info!(
        "Read config.json from {}",
        std::path::absolute(&args.config_json_path)?.display()
    );

    /* Run the demonstration */
    let mut stdout = std::io::stdout();
    run(&mut stdout, &config)?;
    Ok(())
}
