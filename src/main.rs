use anyhow::Result;
use clap::Parser;
use tuido::cli::Cli;
use tuido::config::Config;
use tuido::logger::Logger;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", Config::default_config_toml()?);
        return Ok(());
    }

    let mut config = Config::load_or_create(cli.config.as_deref())?;
    cli.apply(&mut config)?;

    Logger::init(&config.logging)?;
    log::debug!("config: {:?}", config);

    // Run the TUI application
    tuido::ui::run_app(config, Vec::new()).await?;

    Ok(())
}
