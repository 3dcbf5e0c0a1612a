//! DSA CLI
//!
//! Command-line interface around the DSA core:
//! - Domain parameter and key pair generation
//! - Message signing
//! - Signature verification

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dsa_core::{sign, DomainParameters, KeyPair};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, Level};

/// dsa - DSA signing node
#[derive(Parser)]
#[command(name = "dsa")]
#[command(about = "DSA key generation, signing, and verification")]
#[command(version)]
struct Cli {
    /// Data directory for key material
    #[arg(short, long, env = "DEST", default_value = "./data")]
    dest: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate domain parameters and a key pair
    Keygen {
        /// Subgroup order q (decimal)
        #[arg(short, long)]
        q: String,

        /// Prime modulus p (decimal); q must divide p - 1
        #[arg(short, long)]
        p: String,
    },

    /// Sign a message
    Sign {
        /// Message text to sign
        #[arg(short, long)]
        message: String,

        /// File to write the two signature lines to
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Verify a signature
    Verify {
        /// Message text to check
        #[arg(short, long)]
        message: String,

        /// File holding the two signature lines
        #[arg(short, long)]
        signature: PathBuf,
    },
}

/// Persisted key material: domain parameters plus the key pair
#[derive(Serialize, Deserialize)]
struct KeyFile {
    params: DomainParameters,
    keypair: KeyPair,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    // Ensure data directory exists
    std::fs::create_dir_all(&cli.dest)?;

    match cli.command {
        Commands::Keygen { ref q, ref p } => {
            run_keygen(&cli, q, p)?;
        }
        Commands::Sign {
            ref message,
            ref out,
        } => {
            run_sign(&cli, message, out.as_deref())?;
        }
        Commands::Verify {
            ref message,
            ref signature,
        } => {
            run_verify(&cli, message, signature)?;
        }
    }

    Ok(())
}

fn run_keygen(cli: &Cli, q: &str, p: &str) -> Result<()> {
    let q: BigUint = q.parse().context("q must be a decimal integer")?;
    let p: BigUint = p.parse().context("p must be a decimal integer")?;

    info!(%q, %p, "Building domain parameters");

    let params = DomainParameters::new(q, p)?;
    let mut rng = StdRng::from_entropy();
    let keypair = KeyPair::generate(&params, &mut rng);
    let key_file = KeyFile { params, keypair };

    // Save key material
    let key_path = cli.dest.join("key.json");
    let json = serde_json::to_string_pretty(&key_file)?;
    std::fs::write(&key_path, json)?;

    info!(
        y = %key_file.keypair.y,
        path = ?key_path,
        "Key pair generated and saved"
    );

    println!("Generator g: {}", key_file.params.g);
    println!("Public value y: {}", key_file.keypair.y);

    Ok(())
}

fn run_sign(cli: &Cli, message: &str, out: Option<&Path>) -> Result<()> {
    let key_file = load_key_file(cli)?;

    let mut rng = StdRng::from_entropy();
    let signature = sign::sign(&key_file.params, &key_file.keypair, message, &mut rng)?;

    info!(r = %signature.r, s = %signature.s, "Message signed");

    let text = signature.to_string();
    if let Some(path) = out {
        std::fs::write(path, &text)?;
        info!(path = ?path, "Signature saved");
    }
    println!("{}", text);

    Ok(())
}

fn run_verify(cli: &Cli, message: &str, signature_path: &Path) -> Result<()> {
    let key_file = load_key_file(cli)?;

    let text = std::fs::read_to_string(signature_path)
        .with_context(|| format!("cannot read {}", signature_path.display()))?;
    let lines: Vec<&str> = text.trim_end().split("\r\n").collect();

    let outcome = sign::verify_lines(&key_file.params, &key_file.keypair.y, message, &lines)?;

    info!(v = %outcome.v, accepted = outcome.accepted, "Verification complete");

    println!("{}", outcome);
    if outcome.accepted {
        println!("Signature valid");
    } else {
        println!("Signature invalid");
        std::process::exit(1);
    }

    Ok(())
}

fn load_key_file(cli: &Cli) -> Result<KeyFile> {
    let key_path = cli.dest.join("key.json");
    let json = std::fs::read_to_string(&key_path)
        .with_context(|| format!("cannot read {}, run keygen first", key_path.display()))?;
    let key_file: KeyFile = serde_json::from_str(&json)?;
    Ok(key_file)
}
