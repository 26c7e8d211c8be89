use anyhow::Result;
use clap::Parser;
use skygaze::{cli::Cli, gateway};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.validate()?;

    if cli.serve {
        // A fmt layer would scribble over the alternate screen, so tracing
        // is only wired up in gateway mode.
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "skygaze=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();

        let state = gateway::GatewayState::from_env(cli.provider_url.clone());
        return gateway::serve(&cli.bind, state).await;
    }

    skygaze::run(cli).await
}
