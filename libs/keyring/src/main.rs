//! spacekey CLI - derive, encode, and sign with space chain ed25519 keys

use clap::{Parser, Subcommand};
use spacekey_keyring::{digest, verify, Bech32Prefixes, Keypair, Role};

#[derive(Parser)]
#[command(name = "spacekey")]
#[command(about = "Derive, encode, and sign with space chain ed25519 keys", long_about = None)]
#[command(version)]
struct Cli {
    /// Base bech32 prefix the six role prefixes are derived from
    #[arg(short = 'p', long, global = true, default_value = "space")]
    prefix: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the public key and the six bech32 encodings for a secret key
    #[command(name = "show")]
    Show {
        /// Hex-encoded 64-byte secret key
        #[arg(short = 's', long = "secret-key")]
        secret_key: String,
    },
    /// Sign the SHA-256 digest of a message and verify the result
    #[command(name = "sign")]
    Sign {
        /// Hex-encoded 64-byte secret key
        #[arg(short = 's', long = "secret-key")]
        secret_key: String,

        /// Message to digest and sign
        #[arg(short = 'm', long)]
        message: String,
    },
}

fn show(prefixes: &Bech32Prefixes, sk_hex: &str) -> Result<(), String> {
    let keypair = Keypair::from_hex(sk_hex).map_err(|e| e.to_string())?;

    println!("Public key: {}", keypair.public_key().to_hex());
    println!("Address:    {}", keypair.address().to_hex());

    println!("\nAddress encodings:");
    let encoded = prefixes
        .encode_all(keypair.address().as_bytes())
        .map_err(|e| e.to_string())?;
    for (role, s) in &encoded {
        println!("  {:<22} {s}", role.label());
    }

    let pk_bech32 = prefixes
        .encode(Role::AccountPublicKey, &keypair.public_key().to_bytes())
        .map_err(|e| e.to_string())?;
    println!("\nPublic key (bech32):   {pk_bech32}");

    Ok(())
}

fn sign_message(sk_hex: &str, message: &str) -> Result<(), String> {
    let keypair = Keypair::from_hex(sk_hex).map_err(|e| e.to_string())?;

    let h = digest(message.as_bytes());
    let sig = keypair.sign_digest(&h);
    let ok = verify(keypair.public_key(), &h, &sig);

    println!("Digest:    {}", hex::encode(h));
    println!("Signature: {}", sig.to_hex());
    println!("Verified:  {ok}");

    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let prefixes = Bech32Prefixes::with_base(&cli.prefix);

    let result = match cli.command {
        Commands::Show { secret_key } => show(&prefixes, &secret_key),
        Commands::Sign {
            secret_key,
            message,
        } => sign_message(&secret_key, &message),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
