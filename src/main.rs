use anyhow::Context;
use clap::Parser;
use terminal_input::utils::logger;
use terminal_input::{CliConfig, EnvContextSource, NodeError};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            // logging isn't up yet: the config decides its format
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_logger(&config.log_level, &config.log_format, cli.verbose);
    tracing::debug!("Resolved config: {:?}", config);

    match terminal_input::main_with(EnvContextSource, &config) {
        Ok(context) => {
            tracing::info!(
                node = context.node(),
                variable = context.variable(),
                "Runtime context acquired"
            );
            println!("✅ Runtime context found for node `{}`", context.node());
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Node failed to start: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            report(&e).context("failed to write error report")?;
            std::process::exit(e.exit_code());
        }
    }
}

fn report(e: &NodeError) -> std::io::Result<()> {
    use std::io::Write;

    let mut stderr = std::io::stderr().lock();
    writeln!(stderr, "❌ {}", e.user_friendly_message())?;
    writeln!(stderr, "💡 Suggestion: {}", e.recovery_suggestion())?;
    Ok(())
}
