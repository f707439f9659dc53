use clap::Parser;
use record_report::utils::error::ErrorSeverity;
use record_report::utils::{logger, validation};
use record_report::utils::validation::Validate;
use record_report::{CliConfig, LocalStorage, Prompter, ReportEngine, ReportError, ReportPipeline};
use std::io;

fn exit_code(e: &ReportError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: ReportError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

fn main() {
    let args = CliConfig::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::debug!("CLI args: {:?}", args);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let config = match args.resolve(&mut prompter) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    if let Err(e) = config.validate() {
        fail(e);
    }

    // Existence, file type and readability are checked before any processing starts.
    if let Err(e) = validation::check_input_file(&config.input_path) {
        fail(e);
    }

    if args.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = ReportPipeline::new(LocalStorage::new(), config);
    let mut engine = ReportEngine::new_with_monitoring(pipeline, args.monitor);

    match engine.run_with(|report| println!("\n{}", report.text)) {
        Ok(summary) => {
            let saved_to = std::fs::canonicalize(&summary.output_path)
                .unwrap_or_else(|_| summary.output_path.clone());
            println!("\nReport saved to: {}", saved_to.display());
        }
        Err(e) => fail(e),
    }
}
