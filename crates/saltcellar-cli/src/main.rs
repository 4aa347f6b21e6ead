//! `saltcellar` — command-line shell over `saltcellar-core`.
//!
//! Prints generated values on stdout, diagnostics on stderr. Defaults come
//! from an optional JSON settings file and are overridden by flags.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use saltcellar_core::{
    generate_long_uuid, generate_nonce, generate_password, generate_serial, generate_short_uuid,
    generate_uuid, Argon2Password, CryptoError, KeyedDigest, Oneway, OutOfRangePolicy,
    SaltGenerator, Settings,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random salt
    Salt {
        /// Output length in characters
        #[arg(short, long)]
        length: Option<usize>,

        /// Bits per character: 4 (hex), 5 (base36) or 6 (base62)
        #[arg(short, long)]
        bits: Option<u8>,

        /// Redraw out-of-range base-62 symbols from the CSPRNG
        #[arg(long)]
        strict: bool,
    },
    /// Generate a hex nonce (8, 16, 32, 40, 64 or 128 characters)
    Nonce {
        /// Nonce length
        #[arg(short, long)]
        length: Option<usize>,

        /// Seed from a time-based serial instead of the CSPRNG
        #[arg(long)]
        serial_seed: bool,
    },
    /// Generate a time-based decimal serial
    Serial,
    /// Generate a 128-bit UUID
    Uuid {
        /// Set RFC 4122 version-4 bits
        #[arg(long)]
        v4: bool,

        /// Print the hyphenated form
        #[arg(long)]
        hyphenated: bool,
    },
    /// Generate 64 random bits in the given base
    ShortUuid {
        /// Base, 2 to 62
        #[arg(short, long)]
        base: Option<u32>,
    },
    /// Generate 128 random bits in the given base
    LongUuid {
        /// Base, 2 to 62
        #[arg(short, long)]
        base: Option<u32>,
    },
    /// Generate a random password
    Password {
        /// Password length
        #[arg(short, long)]
        length: Option<usize>,

        /// Include symbols
        #[arg(long)]
        symbols: bool,
    },
    /// Hash a secret
    Hash {
        /// Algorithm family
        #[arg(short, long, value_enum, default_value_t = Family::Argon2)]
        algorithm: Family,

        /// The secret to hash
        input: String,
    },
    /// Check a secret against a stored hash; exits 1 on mismatch
    Verify {
        /// The secret to check
        input: String,

        /// The stored hash
        hash: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Family {
    /// Argon2id password hash
    Argon2,
    /// Salted HMAC with the configured key
    Hmac,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run a subcommand. `Ok(None)` means the command ran but reports failure
/// through the exit code only.
fn run(command: Commands, settings: &Settings) -> Result<Option<String>, CryptoError> {
    let output = match command {
        Commands::Salt {
            length,
            bits,
            strict,
        } => {
            let generator = if strict {
                SaltGenerator::new(OutOfRangePolicy::Redraw)
            } else {
                settings.salt_generator()
            };
            generator.generate(
                Some(length.unwrap_or(settings.salt_length)),
                Some(bits.unwrap_or(settings.bits_per_char)),
            )?
        }
        Commands::Nonce {
            length,
            serial_seed,
        } => generate_nonce(
            length.unwrap_or(settings.nonce_length),
            settings.nonce_secure_random && !serial_seed,
        )?,
        Commands::Serial => generate_serial(),
        Commands::Uuid { v4, hyphenated } => generate_uuid(!v4, hyphenated)?,
        Commands::ShortUuid { base } => {
            generate_short_uuid(Some(base.unwrap_or(settings.uuid_base)))?
        }
        Commands::LongUuid { base } => {
            generate_long_uuid(Some(base.unwrap_or(settings.uuid_base)))?
        }
        Commands::Password { length, symbols } => generate_password(
            length.unwrap_or(settings.password_length),
            settings.password_letters_only && !symbols,
        )?,
        Commands::Hash { algorithm, input } => {
            let hash = match algorithm {
                Family::Argon2 => Argon2Password::new(settings.argon2.clone()).hash(&input),
                Family::Hmac => KeyedDigest::new(settings.keyed_digest.clone()).hash(&input),
            };
            match hash {
                Some(hash) => hash,
                None => {
                    tracing::error!("input rejected by the hash algorithm");
                    return Ok(None);
                }
            }
        }
        Commands::Verify { input, hash } => {
            let ok = if hash.starts_with("$argon2") {
                Argon2Password::default().verify(&input, &hash)
            } else {
                KeyedDigest::new(settings.keyed_digest.clone()).verify(&input, &hash)
            };
            if !ok {
                tracing::info!("hash mismatch");
                return Ok(None);
            }
            "ok".to_string()
        }
    };
    Ok(Some(output))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = cli
        .config
        .as_deref()
        .map(Settings::load)
        .unwrap_or_default();

    match run(cli.command, &settings) {
        Ok(Some(output)) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
