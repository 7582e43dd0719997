use bank_accounts::run::run;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Logs go to stderr, so they never get mixed with the scenario on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let stdout = std::io::stdout();
    if let Err(err) = run(stdout.lock()) {
        tracing::error!(%err, "scenario aborted");
        std::process::exit(1);
    }
}
