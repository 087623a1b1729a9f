use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dotenv::dotenv;

use bulksender::configure::load_config;
use bulksender::logger::setup_logger;
use bulksender::transfer::{
    BulkTransferEngine, DispatchStrategy, EngineConfig, LedgerEndpoint, ProgressFn, RetryPolicy,
};

/// Send a batch of assets to one recipient.
#[derive(Parser, Debug)]
#[command(name = "bulk_send")]
struct Args {
    /// Comma separated asset ids
    #[arg(long)]
    assets: String,

    /// Recipient id
    #[arg(long)]
    recipient: String,

    /// Profile process id; all assets are sent through this one handle
    #[arg(long, conflicts_with = "process_ids")]
    profile_id: Option<String>,

    /// Comma separated ledger process ids; assets are spread
    /// round-robin across them
    #[arg(long)]
    process_ids: Option<String>,

    /// Override the ledger base url from config
    #[arg(long)]
    ledger_url: Option<String>,
}

fn split_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let config = load_config()?;
    setup_logger(&config)?;

    let args = Args::parse();
    let asset_ids = split_ids(&args.assets);
    let ledger_url = args.ledger_url.as_deref().unwrap_or(&config.ledger_url);

    let client = LedgerEndpoint::build_client();
    let dispatch = if let Some(raw) = &args.process_ids {
        DispatchStrategy::Pooled(LedgerEndpoint::build_pool(
            &client,
            ledger_url,
            &split_ids(raw),
        ))
    } else if let Some(profile_id) = &args.profile_id {
        DispatchStrategy::Shared(Arc::new(LedgerEndpoint::new(
            client.clone(),
            ledger_url,
            profile_id,
        )))
    } else {
        return Err("either --profile-id or --process-ids is required".into());
    };

    let engine = BulkTransferEngine::new(EngineConfig {
        retry: RetryPolicy {
            max_attempts: config.max_attempts,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        },
        max_in_flight: config.max_in_flight,
    });

    println!("Starting transfer...");
    let on_progress: ProgressFn = Arc::new(|count| println!("Transferred {} assets...", count));
    let result = engine
        .run(dispatch, &asset_ids, &args.recipient, Some(on_progress))
        .await?;

    println!(
        "Complete! Successfully transferred {} assets. Failed: {}",
        result.success_count, result.fail_count
    );
    if !result.failed_assets.is_empty() {
        println!("Failed assets: {}", result.failed_assets.join(", "));
        process::exit(1);
    }

    Ok(())
}
