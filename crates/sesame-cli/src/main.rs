//! `sesame` — generate passwords satisfying a fixed rule set.
//!
//! The heavy lifting lives in `sesame-core`; this binary only parses
//! arguments, loads an optional JSON rule file, and prints results.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sesame_core::{generate_valid_password, PasswordPolicy, PasswordPolicyBuilder};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sesame", version, about = "Policy-constrained password generator")]
struct Cli {
    /// Use the privileged-account tier (minimum length 15 instead of 12).
    #[arg(long)]
    privileged: bool,

    /// Number of passwords to emit, one per line.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// JSON rule file; defaults to the built-in recommended rules.
    #[arg(long, value_name = "FILE")]
    policy: Option<PathBuf>,

    /// Personal or organizational token the output must not contain
    /// (repeatable).
    #[arg(long = "forbid", value_name = "TOKEN")]
    forbidden_tokens: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let policy = load_policy(&cli)?;

    tracing::debug!(
        count = cli.count,
        privileged = cli.privileged,
        "generating passwords"
    );
    for _ in 0..cli.count {
        let password = generate_valid_password(&policy, cli.privileged)
            .context("the rule set rejects every candidate; relax it and retry")?;
        println!("{password}");
    }
    Ok(())
}

fn load_policy(cli: &Cli) -> anyhow::Result<PasswordPolicy> {
    let builder = match &cli.policy {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading rule file {}", path.display()))?;
            serde_json::from_str::<PasswordPolicyBuilder>(&raw)
                .with_context(|| format!("parsing rule file {}", path.display()))?
        }
        None => PasswordPolicy::recommended_builder(),
    };
    builder
        .forbidden_tokens(cli.forbidden_tokens.iter().cloned())
        .build()
        .context("invalid rule set")
}
