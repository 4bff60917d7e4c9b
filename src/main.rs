//! API-key authentication CLI.
//!
//! Companion binary for operating the credential verifier: run a single
//! authentication attempt against a configured user directory, mint the
//! secure hash a client must present, and manage configuration files.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

use apikey_auth::comparator::Sha256SecretComparator;
use apikey_auth::directory::InMemoryUserDirectory;
use apikey_auth::{
    AuthenticationProvider, AuthenticationRequest, AuthError, Config, CredentialVerifier,
    FailureClass, PresentedCredential,
};

/// API-key authentication CLI
#[derive(Parser)]
#[command(name = "apikey-auth")]
#[command(about = "API-key credential verification against a configured user directory")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Subcommands
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one authentication attempt against the configured directory
    Verify {
        /// API key identifying the account
        #[arg(long)]
        api_key: String,

        /// Salted digest of the caller's secret
        #[arg(long)]
        secure_hash: String,

        /// Salt the digest was computed with
        #[arg(long)]
        salt: String,
    },

    /// Compute the secure hash a client must present for a secret
    Hash {
        /// The secret to hash
        #[arg(long)]
        secret: String,

        /// Request salt; generated when omitted
        #[arg(long)]
        salt: Option<String>,
    },

    /// Generate a default configuration file
    Config {
        /// Output file path
        #[arg(short, long, default_value = "apikey-auth.toml")]
        output: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Configuration file to validate
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("failed to load configuration: {e}");
                return ExitCode::from(2);
            }
        },
        None => Config::default(),
    };

    if let Err(e) = apikey_auth::utils::logging::init_logging(&config.logging) {
        eprintln!("failed to initialize logging: {e}");
        return ExitCode::from(2);
    }

    match run(cli.command, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            match e.class() {
                FailureClass::Rejection => ExitCode::from(1),
                FailureClass::ServiceError => ExitCode::from(2),
            }
        }
    }
}

async fn run(command: Commands, config: Config) -> apikey_auth::Result<()> {
    match command {
        Commands::Verify {
            api_key,
            secure_hash,
            salt,
        } => {
            config.validate()?;

            let directory = InMemoryUserDirectory::from_entries(&config.auth.users);
            let verifier = CredentialVerifier::builder()
                .directory(Arc::new(directory))
                .comparator(Arc::new(Sha256SecretComparator::new()))
                .build()?;

            let request = AuthenticationRequest::ApiKey {
                api_key,
                credential: Some(PresentedCredential {
                    secure_hash,
                    request_salt: salt,
                }),
            };

            let verified = verifier.authenticate(&request).await?;
            info!(identity = %verified.identity, "authentication succeeded");
            println!("{}", verified.identity);
            Ok(())
        }

        Commands::Hash { secret, salt } => {
            let salt = salt.unwrap_or_else(|| apikey_auth::utils::generate_salt(16));
            let hash = Sha256SecretComparator::new().digest(&secret, &salt);
            println!("salt: {salt}");
            println!("secure_hash: {hash}");
            Ok(())
        }

        Commands::Config { output, force } => {
            if output.exists() && !force {
                return Err(AuthError::config(format!(
                    "{} already exists (use --force to overwrite)",
                    output.display()
                )));
            }
            Config::default().to_file(&output)?;
            info!(path = %output.display(), "wrote default configuration");
            Ok(())
        }

        Commands::Validate { file } => {
            let config = Config::from_file(&file)?;
            config.validate()?;
            info!(
                path = %file.display(),
                users = config.auth.users.len(),
                "configuration is valid"
            );
            Ok(())
        }
    }
}
