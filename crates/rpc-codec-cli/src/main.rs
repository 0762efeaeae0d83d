//! `rpc-codec`: an operator harness around the `rpc-codec` library.
//!
//! Reads JSON-RPC payloads from files, runs them through the translators and
//! prints summaries or re-encoded JSON. The translation contract lives in the
//! library; nothing here adds to it.

use std::path::{Path, PathBuf};

use alloy::primitives::{B256, U256};
use clap::{ArgAction, Args, Parser, Subcommand};
use color_eyre::eyre::{eyre, Context, Result};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use rpc_codec::encoding::{decode_hash, decode_padded_address, decode_quantity};
use rpc_codec::{
    block, receipt, CanonicalBlock, CanonicalReceipt, ReceiptOutcome, RpcBlock, RpcReceipt,
    SealedBlock, SealedTransaction,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rpc-codec")]
#[command(about = "Inspect and re-encode Ethereum JSON-RPC payload files with rpc-codec")]
#[command(version)]
struct Cli {
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,

    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a block with full transaction objects and summarize it.
    Block(BlockArgs),
    /// Decode one receipt or an array of receipts.
    Receipts(ReceiptsArgs),
    /// Decode a block and encode it back, trusting the payload's hashes.
    Reencode(ReencodeArgs),
}

#[derive(Args, Debug)]
struct BlockArgs {
    /// Path to an `eth_getBlockBy*` result (or full JSON-RPC response).
    file: PathBuf,
}

#[derive(Args, Debug)]
struct ReceiptsArgs {
    /// Path to an `eth_getTransactionReceipt` result, or an array of them.
    file: PathBuf,
}

#[derive(Args, Debug)]
struct ReencodeArgs {
    /// Path to an `eth_getBlockBy*` result with full transaction objects.
    file: PathBuf,

    /// Emit transaction hashes instead of transaction objects.
    #[arg(long)]
    hashes_only: bool,

    /// Total difficulty to report; defaults to the payload's own value.
    #[arg(long)]
    total_difficulty: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ReceiptInput {
    Many(Vec<RpcReceipt>),
    One(Box<RpcReceipt>),
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet)?;

    match cli.command {
        Commands::Block(args) => handle_block(args),
        Commands::Receipts(args) => handle_receipts(args),
        Commands::Reencode(args) => handle_reencode(args),
    }
}

fn init_tracing(verbose: u8, quiet: bool) -> Result<()> {
    let level = if quiet {
        Level::WARN
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.as_str()))
        .wrap_err("failed to initialize tracing filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Reads a JSON payload, unwrapping a JSON-RPC response envelope if present.
fn read_payload(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .wrap_err_with(|| format!("{} is not valid JSON", path.display()))?;

    match value {
        Value::Object(mut envelope) if envelope.contains_key("jsonrpc") => {
            if let Some(error) = envelope.get("error") {
                return Err(eyre!("{} holds a JSON-RPC error: {}", path.display(), error));
            }
            envelope
                .remove("result")
                .filter(|result| !result.is_null())
                .ok_or_else(|| eyre!("{} holds a JSON-RPC response without a result", path.display()))
        }
        other => Ok(other),
    }
}

fn read_block(path: &Path) -> Result<RpcBlock> {
    serde_json::from_value(read_payload(path)?)
        .wrap_err_with(|| format!("{} is not an RPC block object", path.display()))
}

fn handle_block(args: BlockArgs) -> Result<()> {
    let raw = read_block(&args.file)?;
    let canonical = block::from_wire(&raw)
        .wrap_err_with(|| format!("failed to translate block in {}", args.file.display()))?;

    println!("{}", block_table(&canonical));
    info!(
        block_number = %canonical.header.number,
        transactions = canonical.transactions.len(),
        "block decoded"
    );
    Ok(())
}

fn block_table(block: &CanonicalBlock) -> Table {
    let header = &block.header;
    let present = |set: bool| if set { "yes" } else { "no" };
    let count = |ty: u8| {
        block
            .transactions
            .iter()
            .filter(|tx| tx.tx_type() == ty)
            .count()
            .to_string()
    };

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["number".to_string(), header.number.to_string()]);
    table.add_row(vec!["timestamp".to_string(), header.timestamp.to_string()]);
    table.add_row(vec![
        "gas used / limit".to_string(),
        format!("{} / {}", header.gas_used, header.gas_limit),
    ]);
    table.add_row(vec![
        "base fee".to_string(),
        header
            .base_fee_per_gas
            .map(|fee| fee.to_string())
            .unwrap_or_else(|| "-".to_string()),
    ]);
    table.add_row(vec![
        "withdrawals root".to_string(),
        present(header.withdrawals_root.is_some()).to_string(),
    ]);
    table.add_row(vec![
        "blob fields".to_string(),
        present(header.blob_gas_used.is_some() || header.excess_blob_gas.is_some()).to_string(),
    ]);
    table.add_row(vec![
        "beacon root".to_string(),
        present(header.parent_beacon_block_root.is_some()).to_string(),
    ]);
    table.add_row(vec!["legacy txs".to_string(), count(0)]);
    table.add_row(vec!["access-list txs".to_string(), count(1)]);
    table.add_row(vec!["fee-market txs".to_string(), count(2)]);
    table
}

fn handle_receipts(args: ReceiptsArgs) -> Result<()> {
    let input: ReceiptInput = serde_json::from_value(read_payload(&args.file)?)
        .wrap_err_with(|| format!("{} is not an RPC receipt or array of receipts", args.file.display()))?;
    let raws = match input {
        ReceiptInput::Many(raws) => raws,
        ReceiptInput::One(raw) => vec![*raw],
    };

    let receipts = raws
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            receipt::from_wire(raw).wrap_err_with(|| format!("failed to translate receipt #{i}"))
        })
        .collect::<Result<Vec<_>>>()?;

    println!("{}", receipts_table(&receipts));
    info!(receipts = receipts.len(), "receipts decoded");
    Ok(())
}

fn receipts_table(receipts: &[CanonicalReceipt]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Kind", "Outcome", "Cumulative gas", "Logs"]);
    for (i, receipt) in receipts.iter().enumerate() {
        let (kind, outcome) = match receipt.outcome {
            ReceiptOutcome::StateRoot(root) => ("pre-byzantium", truncate_hash(&root.to_string())),
            ReceiptOutcome::Status(true) => ("post-byzantium", "success".to_string()),
            ReceiptOutcome::Status(false) => ("post-byzantium", "failure".to_string()),
        };
        table.add_row(vec![
            i.to_string(),
            kind.to_string(),
            outcome,
            receipt.cumulative_gas_used.to_string(),
            receipt.logs.len().to_string(),
        ]);
    }
    table
}

fn handle_reencode(args: ReencodeArgs) -> Result<()> {
    let raw = read_block(&args.file)?;
    let encoded = reencode(&raw, args.total_difficulty.as_deref(), !args.hashes_only)
        .wrap_err_with(|| format!("failed to re-encode block in {}", args.file.display()))?;

    println!(
        "{}",
        serde_json::to_string_pretty(&encoded).wrap_err("failed to serialize block")?
    );
    Ok(())
}

/// Decodes `raw`, seals it with the hashes and senders the payload itself
/// reports, and encodes it back.
fn reencode(
    raw: &RpcBlock,
    total_difficulty: Option<&str>,
    include_transactions: bool,
) -> Result<RpcBlock> {
    let CanonicalBlock {
        header,
        transactions,
    } = block::from_wire(raw)?;

    let rpc_codec::BlockTransactions::Full(raw_txs) = &raw.transactions else {
        return Err(eyre!("block has no transaction objects"));
    };

    let sealed_txs = transactions
        .into_iter()
        .zip(raw_txs)
        .enumerate()
        .map(|(i, (tx, raw_tx))| {
            let hash = raw_tx
                .hash
                .as_deref()
                .ok_or_else(|| eyre!("transaction #{i} has no hash"))?;
            let from = raw_tx
                .from
                .as_deref()
                .ok_or_else(|| eyre!("transaction #{i} has no sender"))?;
            Ok(SealedTransaction::new(
                tx,
                decode_hash("hash", hash)?,
                decode_padded_address("from", from)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    let block_hash = raw
        .hash
        .as_deref()
        .ok_or_else(|| eyre!("block has no hash"))?;
    let sealed = SealedBlock::new(header, sealed_txs, decode_hash("hash", block_hash)?);

    let total_difficulty = match total_difficulty.or(raw.total_difficulty.as_deref()) {
        Some(value) => decode_quantity("totalDifficulty", value)?,
        None => U256::ZERO,
    };
    let ommers = raw
        .uncles
        .iter()
        .map(|uncle| decode_hash("uncles", uncle))
        .collect::<Result<Vec<B256>, _>>()?;

    Ok(block::to_wire(
        &sealed,
        total_difficulty,
        &ommers,
        include_transactions,
    )?)
}

/// Truncate a hex hash for compact table display.
fn truncate_hash(hash: &str) -> String {
    if hash.len() > 14 {
        format!("{}…{}", &hash[..8], &hash[hash.len() - 4..])
    } else {
        hash.to_string()
    }
}
