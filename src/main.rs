use clap::Parser;
use small_utils::utils::{error::UtilsError, logger};
use small_utils::{CliConfig, UtilsEngine};

fn main() {
    let cli = CliConfig::parse();

    let settings = match cli.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            fail(&e);
        }
    };

    logger::init_cli_logger(cli.verbose, settings.log_level());
    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("Resolved settings: {:?}", settings);

    let operation = match cli.to_operation(&settings) {
        Ok(operation) => operation,
        Err(e) => fail(&e),
    };

    let engine = UtilsEngine::new(settings);
    match engine.run(operation) {
        Ok(output) => println!("{}", output),
        Err(e) => fail(&e),
    }
}

fn fail(e: &UtilsError) -> ! {
    tracing::error!(
        "Operation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
