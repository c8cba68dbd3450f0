use anyhow::Result;
use clap::Parser;

use packlist::cli::{self, Cli, Commands, StdinPrompt};
use packlist::store::FixedAnswer;
use packlist::Config;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.file, cli.seed)?;

    match cli.command {
        Commands::Add {
            quantity,
            description,
        } => {
            cli::handle_add(&config, description, quantity).await?;
        }
        Commands::Remove { id } => {
            cli::handle_remove(&config, id).await?;
        }
        Commands::Toggle { id } => {
            cli::handle_toggle(&config, id).await?;
        }
        Commands::Clear { yes } => {
            if yes {
                cli::handle_clear(&config, &mut FixedAnswer(true)).await?;
            } else {
                cli::handle_clear(&config, &mut StdinPrompt).await?;
            }
        }
        Commands::List { sort } => {
            cli::handle_list(&config, sort).await?;
        }
        Commands::Stats => {
            cli::handle_stats(&config).await?;
        }
    }

    Ok(())
}
