use anyhow::Result;
use env_logger::Builder;
use log::LevelFilter;
use solana_lending_client::constants::DEFAULT_RPC_URL;
use solana_lending_client::{
    ClassificationRecord, LendingOpcode, RpcLendingClient, SyncConfig, SyncPipeline,
};
use solana_pubkey::Pubkey;
use std::io::Write;
use std::str::FromStr;

const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

// Simple CLI without clap
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .unwrap()
                    .as_secs(),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for --version command
    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        println!("Solana Lending Client v{}", solana_lending_client::VERSION);
        return Ok(());
    }

    if args.len() < 2 {
        println!("Solana Lending Client v{}", solana_lending_client::VERSION);
        println!("\nUsage:");
        println!(
            "  {} <WALLET_ADDRESS> [--cluster URL] [--limit N] [--json]",
            args[0]
        );
        println!("  {} --version", args[0]);
        println!("\nOptions:");
        println!("  --cluster, -c URL    Use the specified RPC URL (default: mainnet-beta)");
        println!("  --limit, -n N        Examine at most N new signatures this run (default: 100)");
        println!("  --json               Print the classified records as JSON");
        println!("  --version, -v        Show version information");
        return Ok(());
    }

    let wallet = Pubkey::from_str(&args[1])?;

    // Parse optional arguments
    let mut cluster = DEFAULT_RPC_URL.to_string();
    let mut config = SyncConfig::default();
    let mut json = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--cluster" | "-c" => {
                if i + 1 < args.len() {
                    cluster = args[i + 1].clone();
                    i += 2;
                } else {
                    println!("Error: Missing value for --cluster");
                    return Ok(());
                }
            }
            "--limit" | "-n" => {
                if i + 1 < args.len() {
                    config.max_new_per_sync = args[i + 1].parse()?;
                    i += 2;
                } else {
                    println!("Error: Missing value for --limit");
                    return Ok(());
                }
            }
            "--json" => {
                json = true;
                i += 1;
            }
            _ => {
                println!("Unknown argument: {}", args[i]);
                i += 1;
            }
        }
    }

    println!("Scanning lending history for wallet: {}", wallet);

    let mut pipeline = SyncPipeline::with_config(RpcLendingClient::new(&cluster), config);
    let records = pipeline.sync(Some(&wallet)).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No lending transactions on record for this wallet.");
        return Ok(());
    }

    for opcode in LendingOpcode::DISPLAYED {
        let group: Vec<&ClassificationRecord> =
            records.iter().filter(|r| r.opcode == opcode).collect();
        if group.is_empty() {
            continue;
        }

        // Every opcode in the display set has a label.
        let label = opcode.display_label().unwrap_or("Other");
        println!("\n{} ({})", label, group.len());
        for record in group {
            let status = if record.raw.is_err() { "Error" } else { "Success" };
            println!(
                "  {}  fee {:.9} SOL  {}",
                record.signature,
                record.raw.fee as f64 / LAMPORTS_PER_SOL,
                status
            );
        }
    }

    Ok(())
}
