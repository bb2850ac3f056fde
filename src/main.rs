mod args;

use args::Args;
use clap::Parser;
use etcd_discovery_url::{DiscoveryError, DiscoveryUrlFetcher, InvocationLog};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), DiscoveryError> {
    let config = args.to_config()?;
    let fetcher = DiscoveryUrlFetcher::new()?;

    let output = if args.log {
        let mut journal = InvocationLog::open(&args.log_file)?;
        fetcher.fetch_logged(&config, &mut journal).await?
    } else {
        if args.note.is_some() {
            log::warn!("Note is only recorded with --log, ignoring it");
        }
        fetcher.fetch(&config).await?
    };

    println!("{}", output.to_json()?);
    Ok(())
}
