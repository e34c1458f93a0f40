//! slctl - Main entry point

use clap::Parser;
use log::{debug, info};

use slctl::sl::{guests, hosts, ordering, CredentialsResolver, SlClient};
use slctl::{Cli, Command, HostCommand};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting slctl v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> slctl::Result<()> {
    let resolver = CredentialsResolver::new(cli.username.clone(), cli.api_key.clone());
    let credentials = resolver.resolve()?;
    debug!("Using API host {}", cli.api_host);

    let client = SlClient::new(
        credentials.username,
        credentials.api_key,
        cli.api_host.clone(),
    );

    let Command::Host { command } = &cli.command;
    match command {
        HostCommand::List(args) => hosts::commands::run_list(&client, args, cli.quiet).await,
        HostCommand::Guests(args) => guests::commands::run_guests(&client, args, cli.quiet).await,
        HostCommand::Detail(args) => hosts::commands::run_detail(&client, args, cli.quiet).await,
        HostCommand::Create(args) => ordering::commands::run_create(&client, args, cli.quiet).await,
        HostCommand::CreateOptions(args) => {
            ordering::commands::run_create_options(&client, args, cli.quiet).await
        }
        HostCommand::CancelGuests(args) => {
            guests::commands::run_cancel_guests(&client, args, cli.quiet).await
        }
    }
}
