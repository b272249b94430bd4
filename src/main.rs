use billsnap::prelude::*;
use billsnap::vocabulary::POLICY_AREAS;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;

/// Pull legislative metadata from congress.gov
#[derive(Parser, Debug)]
#[command(name = "billsnap")]
#[command(about = "Pull bill titles, summaries, sponsors and subjects from congress.gov")]
#[command(version)]
struct Args {
    /// Site to scrape (default: https://www.congress.gov, or BILLSNAP_BASE_URL env var)
    #[arg(long = "base-url", global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (default: 30, or BILLSNAP_TIMEOUT env var)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long = "log-level", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print metadata for one bill as JSON
    Bill {
        /// Chamber of Congress: house or senate
        chamber: String,

        /// Bill number, e.g. 183 for H.R.183
        number: u32,

        /// Congressional session (default: 115)
        #[arg(long)]
        congress: Option<u32>,

        /// Print a single field instead of the whole record
        #[arg(long, value_enum)]
        field: Option<Field>,

        /// Include the bill text in the full record
        #[arg(long = "full-text")]
        full_text: bool,
    },

    /// Print the Bioguide ID -> member name directory as JSON
    Members,

    /// List the policy areas bills are classified under
    Vocabulary,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Field {
    Url,
    Title,
    Summary,
    PolicyAreas,
    Sponsor,
    Cosponsors,
    FullTextLink,
    FullText,
    RollCall,
}

fn print_available_commands() {
    println!("Available commands:");
    println!("  bill        Print metadata for one bill as JSON");
    println!("  members     Print the Bioguide ID directory as JSON");
    println!("  vocabulary  List the policy-area vocabulary");
}

fn build_config(base_url: Option<String>, timeout: Option<u64>) -> anyhow::Result<Config> {
    let mut builder = ConfigBuilder::new();

    // Flag first, then environment variable, then default
    if let Some(url) = base_url.or_else(|| std::env::var("BILLSNAP_BASE_URL").ok()) {
        builder = builder.base_url_str(&url)?;
    }

    let env_timeout = std::env::var("BILLSNAP_TIMEOUT")
        .ok()
        .map(|s| s.parse::<u64>())
        .transpose()
        .map_err(|e| anyhow::anyhow!("Invalid BILLSNAP_TIMEOUT: {}", e))?;
    if let Some(secs) = timeout.or(env_timeout) {
        builder = builder.timeout_secs(secs);
    }

    Ok(builder.build()?)
}

fn field_value(bill: &BillSnap, field: Field) -> billsnap::Result<Value> {
    let value = match field {
        Field::Url => Value::from(bill.url()),
        Field::Title => serde_json::to_value(bill.title()?)?,
        Field::Summary => serde_json::to_value(bill.summary()?)?,
        Field::PolicyAreas => serde_json::to_value(bill.policy_areas()?)?,
        Field::Sponsor => serde_json::to_value(bill.sponsor()?)?,
        Field::Cosponsors => serde_json::to_value(bill.cosponsors()?)?,
        Field::FullTextLink => serde_json::to_value(bill.full_text_link()?)?,
        Field::FullText => serde_json::to_value(bill.full_text()?)?,
        Field::RollCall => serde_json::to_value(bill.roll_call()?)?,
    };
    Ok(value)
}

fn run_bill_command(config: &Config, cmd: Command) -> anyhow::Result<()> {
    let Command::Bill {
        chamber,
        number,
        congress,
        field,
        full_text,
    } = cmd
    else {
        unreachable!()
    };

    let congress = congress.unwrap_or(config.default_congress);
    let bill = BillSnap::with_config(config, &chamber, number, congress)?;

    let output = match field {
        Some(field) => field_value(&bill, field)?,
        None => serde_json::to_value(bill.record(full_text)?)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_members_command(config: &Config) -> anyhow::Result<()> {
    let fetcher = HttpFetcher::new(config)?;
    let directory = MemberDirectory::load(&fetcher, config)?;

    println!("{}", serde_json::to_string_pretty(&directory)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = build_config(args.base_url, args.timeout)?;

    match args.command {
        Some(cmd @ Command::Bill { .. }) => run_bill_command(&config, cmd),
        Some(Command::Members) => run_members_command(&config),
        Some(Command::Vocabulary) => {
            for area in POLICY_AREAS {
                println!("{}", area);
            }
            Ok(())
        }
        None => {
            print_available_commands();
            Ok(())
        }
    }
}
