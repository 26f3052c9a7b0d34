//! lwe: generate keys and encrypt/decrypt files bit by bit.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use zeroize::Zeroizing;

use lwe_bits::file::{decrypt_file, encrypt_file};
use lwe_bits::serialize::{deserialize_ciphertexts, serialize_ciphertexts};
use lwe_bits::{keygen, Params, PublicKey, SecretKey};

#[derive(Parser)]
#[command(name = "lwe")]
#[command(about = "Toy LWE bit encryption for files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ParamArgs {
    /// Secret dimension n
    #[arg(long, default_value = "256")]
    dim: usize,

    /// Modulus q (defaults to the smallest power of two >= 50·n)
    #[arg(long)]
    modulus: Option<u64>,
}

impl ParamArgs {
    fn params(&self) -> Result<Params> {
        let params = match self.modulus {
            Some(q) => Params::with_modulus(self.dim, q),
            None => Params::try_new(self.dim)?,
        };
        params
            .validate()
            .map_err(|e| eyre::eyre!("Invalid parameters: {}", e))?;
        Ok(params)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Generate a key pair into public.key / secret.key
    Keygen {
        #[command(flatten)]
        params: ParamArgs,

        /// Output directory for the key files
        #[arg(long, default_value = "lwe_keys")]
        out_dir: PathBuf,

        /// Random seed for deterministic key generation (optional)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt a file with a public key
    Encrypt {
        #[command(flatten)]
        params: ParamArgs,

        #[arg(long)]
        public_key: PathBuf,

        #[arg(long)]
        input: PathBuf,

        /// Ciphertext output path
        #[arg(long)]
        output: PathBuf,
    },
    /// Decrypt a ciphertext file with a secret key
    Decrypt {
        #[command(flatten)]
        params: ParamArgs,

        #[arg(long)]
        secret_key: PathBuf,

        /// Ciphertext input path
        #[arg(long)]
        input: PathBuf,

        /// Plaintext output path (overwritten)
        #[arg(long)]
        output: PathBuf,
    },
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let start = Instant::now();

    match cli.command {
        Command::Keygen { params, out_dir, seed } => {
            let params = params.params()?;
            info!("Generating key pair: n = {}, q = {}", params.n, params.q);

            let mut rng = rng_from(seed);
            let (sk, pk) = keygen(&mut rng, &params).with_context(|| "Key generation failed")?;

            fs::create_dir_all(&out_dir)
                .with_context(|| format!("Failed to create {}", out_dir.display()))?;
            let pk_path = out_dir.join("public.key");
            let sk_path = out_dir.join("secret.key");
            fs::write(&pk_path, pk.to_bytes())
                .with_context(|| format!("Failed to write {}", pk_path.display()))?;
            fs::write(&sk_path, &*sk.to_bytes())
                .with_context(|| format!("Failed to write {}", sk_path.display()))?;

            info!("Public key: {}", pk_path.display());
            info!("Secret key: {}", sk_path.display());
        }
        Command::Encrypt { params, public_key, input, output } => {
            let params = params.params()?;
            let bytes = fs::read(&public_key)
                .with_context(|| format!("Failed to read {}", public_key.display()))?;
            let pk = PublicKey::from_bytes(&bytes, params.n).ok_or_else(|| {
                eyre::eyre!("{} is not a public key for n = {}", public_key.display(), params.n)
            })?;

            let mut rng = StdRng::from_entropy();
            let cts = encrypt_file(&mut rng, &params, &pk, &input)
                .with_context(|| format!("Failed to encrypt {}", input.display()))?;
            fs::write(&output, serialize_ciphertexts(&cts))
                .with_context(|| format!("Failed to write {}", output.display()))?;

            info!("Encrypted {} bits into {}", cts.len(), output.display());
        }
        Command::Decrypt { params, secret_key, input, output } => {
            let params = params.params()?;
            let bytes = Zeroizing::new(
                fs::read(&secret_key)
                    .with_context(|| format!("Failed to read {}", secret_key.display()))?,
            );
            let sk = SecretKey::from_bytes(&bytes, params.n).ok_or_else(|| {
                eyre::eyre!("{} is not a secret key for n = {}", secret_key.display(), params.n)
            })?;

            let data = fs::read(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let cts = deserialize_ciphertexts(&data, params.n).ok_or_else(|| {
                eyre::eyre!("{} is not a ciphertext sequence for n = {}", input.display(), params.n)
            })?;
            decrypt_file(&params, &sk, &cts, &output)
                .with_context(|| format!("Failed to decrypt into {}", output.display()))?;

            info!("Decrypted {} bits into {}", cts.len(), output.display());
        }
    }

    info!("Done in {:.2?}", start.elapsed());
    Ok(())
}
