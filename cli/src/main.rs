mod adapters;
mod commands;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, Commands, browse, search};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    let cfg = commands.to_config();
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        None | Some(Commands::Browse) => browse::browse(&cfg).await,
        Some(Commands::Search {
            query,
            settle_timeout,
        }) => search::search(query, Duration::from_secs(settle_timeout), &cfg).await,
    }
}
