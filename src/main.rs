use std::collections::BTreeMap;
use std::fs;
use std::io::{ BufRead, BufReader };

use anyhow::{ bail, Context, Result };
use clap::Parser;

use swaplens::config::ParserSettings;
use swaplens::logger::{ self, init_file_logging, LogTag };
use swaplens::parser::types::{ ParseOutcome, RawTransaction };
use swaplens::parser::TransactionParser;

/// Reconstruct canonical swaps from raw transaction balance changes.
///
/// Reads transactions as JSON (one object) or JSONL (one object per line)
/// and reports, for each, either the parsed swap record(s) or the typed
/// reason the transaction is not a swap.
#[derive(Parser, Debug)]
#[command(name = "swaplens", about = "Balance-truth swap parser")]
struct Args {
    /// Parse a single transaction from a JSON file
    #[arg(long)]
    file: Option<String>,

    /// Parse a JSONL batch, one transaction per line
    #[arg(long)]
    batch: Option<String>,

    /// Optional TOML settings file (extra core tokens, system accounts)
    #[arg(long)]
    config: Option<String>,

    /// Emit wire-format JSON on stdout instead of human output
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_file_logging();

    let settings = match &args.config {
        Some(path) => {
            let settings = ParserSettings::load_from_file(path)?;
            logger::info(LogTag::Config, &format!("Loaded settings from {}", path));
            settings
        }
        None => ParserSettings::default(),
    };
    let parser = TransactionParser::new(settings);

    if let Some(path) = &args.file {
        let content = fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
        let tx: RawTransaction = serde_json
            ::from_str(&content)
            .with_context(|| format!("failed to parse {}", path))?;
        if let Err(message) = tx.validate() {
            logger::error(LogTag::Parser, &message);
            bail!(message);
        }
        let outcome = parser.parse_transaction(&tx);
        report_outcome(&tx, &outcome, args.json);
        return Ok(());
    }

    if let Some(path) = &args.batch {
        run_batch(&parser, path, args.json)?;
        return Ok(());
    }

    logger::warn(LogTag::System, "Nothing to do: pass --file or --batch");
    Ok(())
}

fn run_batch(parser: &TransactionParser, path: &str, as_json: bool) -> Result<()> {
    let reader = BufReader::new(
        fs::File::open(path).with_context(|| format!("failed to open {}", path))?
    );

    let mut total = 0usize;
    let mut simple = 0usize;
    let mut split = 0usize;
    let mut erase_counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut skipped = 0usize;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let tx: RawTransaction = match serde_json::from_str(&line) {
            Ok(tx) => tx,
            Err(e) => {
                logger::warn(LogTag::Batch, &format!("Line {}: bad JSON: {}", line_no + 1, e));
                skipped += 1;
                continue;
            }
        };
        if let Err(message) = tx.validate() {
            logger::warn(LogTag::Batch, &format!("Line {}: {}", line_no + 1, message));
            skipped += 1;
            continue;
        }

        total += 1;
        let outcome = parser.parse_transaction(&tx);
        match &outcome {
            ParseOutcome::Swap(_) => {
                simple += 1;
            }
            ParseOutcome::Split(_) => {
                split += 1;
            }
            ParseOutcome::Erase(reason) => {
                *erase_counts.entry(reason.as_str()).or_insert(0) += 1;
            }
        }
        report_outcome(&tx, &outcome, as_json);
    }

    logger::info(
        LogTag::Batch,
        &format!(
            "Processed {} transactions: {} swaps, {} split pairs, {} erased, {} skipped",
            total,
            simple,
            split,
            total - simple - split,
            skipped
        )
    );
    for (reason, count) in &erase_counts {
        logger::info(LogTag::Batch, &format!("  {} x {}", count, reason));
    }

    Ok(())
}

fn report_outcome(tx: &RawTransaction, outcome: &ParseOutcome, as_json: bool) {
    if as_json {
        match serde_json::to_string(&outcome.to_wire()) {
            Ok(encoded) => println!("{}", encoded),
            Err(e) => logger::error(LogTag::Parser, &format!("Serialization failed: {}", e)),
        }
        return;
    }

    match outcome {
        ParseOutcome::Swap(swap) => {
            let base = swap.base_asset.symbol.clone().unwrap_or_else(|| short_mint(&swap.base_asset.mint));
            logger::log(
                LogTag::Parser,
                match swap.direction {
                    swaplens::parser::types::Direction::Buy => "BUY",
                    swaplens::parser::types::Direction::Sell => "SELL",
                },
                &format!(
                    "{} {} {} by {} (confidence {})",
                    short_sig(&tx.signature),
                    swap.amounts.base_amount(),
                    base,
                    swap.swapper,
                    swap.confidence
                )
            );
        }
        ParseOutcome::Split(pair) => {
            logger::success(
                LogTag::Parser,
                &format!(
                    "{} split pair ({}): sell {} / buy {}",
                    short_sig(&tx.signature),
                    pair.split_reason,
                    short_mint(&pair.sell_record.base_asset.mint),
                    short_mint(&pair.buy_record.base_asset.mint)
                )
            );
        }
        ParseOutcome::Erase(reason) => {
            logger::log(
                LogTag::Parser,
                "ERASE",
                &format!("{} rejected: {}", short_sig(&tx.signature), reason)
            );
        }
    }
}

fn short_sig(signature: &str) -> String {
    if signature.len() > 16 {
        format!("{}...{}", &signature[..8], &signature[signature.len() - 8..])
    } else {
        signature.to_string()
    }
}

fn short_mint(mint: &str) -> String {
    if mint.len() > 12 { format!("{}...", &mint[..12]) } else { mint.to_string() }
}
