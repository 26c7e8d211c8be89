use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "skygaze",
    version,
    about = "City weather lookup in the terminal"
)]
pub struct Cli {
    /// Run the provider gateway instead of the interactive client
    #[arg(long)]
    pub serve: bool,

    /// Gateway listen address (serve mode)
    #[arg(long, default_value = "127.0.0.1:8788")]
    pub bind: String,

    /// Gateway the client talks to
    #[arg(long, default_value = "http://127.0.0.1:8788")]
    pub gateway_url: String,

    /// Override the upstream provider base URL (serve mode)
    #[arg(long)]
    pub provider_url: Option<String>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.provider_url.is_some() && !self.serve {
            anyhow::bail!("--provider-url only applies with --serve");
        }
        Ok(())
    }
}
