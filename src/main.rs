use anyhow::Result;
use realm_of_shadows::config::Config;
use realm_of_shadows::console::{self, Session};
use realm_of_shadows::i18n::TableValidator;
use realm_of_shadows::notify::ConsoleNotifier;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr, so it does not interleave with the page)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("realm_of_shadows=info".parse()?),
        )
        .init();

    info!("Starting Realm of Shadows pre-registration");

    let report = TableValidator::validate_table();
    for warning in &report.warnings {
        warn!("Translation table: {}", warning);
    }
    if report.has_errors() {
        anyhow::bail!("Translation table is incomplete: {:?}", report.errors);
    }

    let config = Config::from_env()?;
    let session = Session::new(&config, Arc::new(ConsoleNotifier));
    session.start();

    println!("{}", session.render_page());
    println!("\n{}", console::HELP);

    console::run(&session, BufReader::new(tokio::io::stdin())).await?;

    info!(
        "Translation lookups: {}",
        session.store().metrics().report().summary()
    );
    Ok(())
}
