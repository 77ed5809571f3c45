use arg_bag::utils::{logger, validation::Validate};
use arg_bag::{CliConfig, Printer, StdoutSink};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting arg-bag");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let bag = match config.build_bag() {
        Ok(bag) => bag,
        Err(e) => {
            tracing::error!("❌ Failed to build argument bag: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let mut printer = Printer::new(StdoutSink::new());

    match printer.print_bag(&bag) {
        Ok(pair_lines) => {
            tracing::info!("✅ Printed {} pair-lines", pair_lines);
        }
        Err(e) => {
            tracing::error!("❌ Printing failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
