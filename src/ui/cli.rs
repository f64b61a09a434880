// Command line interface
// One subcommand per operation; without one the interactive menu runs

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use super::menu::Menu;
use crate::config::{RsaConfig, DEFAULT_MAX_DRAWS, DEFAULT_PRIME_LIMIT, DEFAULT_WITNESS_LIMIT};
use crate::rsa::{decode, encode, recover_private_key, sign, verify, KeyGenerator};

#[derive(Debug, Parser)]
#[command(name = "tiny-rsa", version, about = "Textbook RSA with keys small enough to break")]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Largest prime accepted during key generation
    #[arg(long, global = true, default_value_t = DEFAULT_PRIME_LIMIT)]
    pub prime_limit: i64,

    /// Fermat witnesses are scanned below this bound
    #[arg(long, global = true, default_value_t = DEFAULT_WITNESS_LIMIT)]
    pub witness_limit: i64,

    /// Random draws per sampling loop before giving up
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DRAWS, conflicts_with = "unbounded")]
    pub max_draws: u64,

    /// Keep drawing until a prime or exponent turns up
    #[arg(long, global = true)]
    pub unbounded: bool,

    /// Accept keys whose two primes are equal
    #[arg(long, global = true)]
    pub allow_equal_primes: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive menu (the default)
    Menu,
    /// Generate a key pair (n, e, d)
    Keygen,
    /// Encode a message with the public key
    Encode {
        #[arg(short)]
        n: i64,
        #[arg(short)]
        e: i64,
        message: String,
    },
    /// Decode a message with the private key
    Decode {
        #[arg(short)]
        n: i64,
        #[arg(short)]
        d: i64,
        /// Encoded blocks, with or without spaces
        encoded: String,
    },
    /// Sign a message with the private key
    Sign {
        #[arg(short)]
        n: i64,
        #[arg(short)]
        d: i64,
        message: String,
    },
    /// Recover the signed text with the public key
    Verify {
        #[arg(short)]
        n: i64,
        #[arg(short)]
        e: i64,
        signature: String,
    },
    /// Factor n and derive the private exponent
    Crack {
        #[arg(short)]
        n: i64,
        #[arg(short)]
        e: i64,
    },
}

impl Cli {
    pub fn config(&self) -> RsaConfig {
        RsaConfig::default()
            .with_prime_limit(self.prime_limit)
            .with_witness_limit(self.witness_limit)
            .with_max_draws((!self.unbounded).then_some(self.max_draws))
            .with_equal_primes(self.allow_equal_primes)
    }

    /// Level passed to the logger unless `RUST_LOG` says otherwise
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn execute<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<()> {
        let config = self.config();
        config.validate().context("invalid configuration")?;

        match &self.command {
            None | Some(Command::Menu) => Menu::new(input, output, config).run(),
            Some(Command::Keygen) => {
                let keypair = KeyGenerator::new(config)?.generate_key_pair()?;
                writeln!(output, "{}", keypair)?;
                Ok(())
            }
            Some(Command::Encode { n, e, message }) => {
                writeln!(output, "{}", encode(*n, *e, message)?)?;
                Ok(())
            }
            Some(Command::Decode { n, d, encoded }) => {
                writeln!(output, "{}", decode(*n, *d, encoded)?)?;
                Ok(())
            }
            Some(Command::Sign { n, d, message }) => {
                writeln!(output, "{}", sign(*n, *d, message)?)?;
                Ok(())
            }
            Some(Command::Verify { n, e, signature }) => {
                writeln!(output, "{}", verify(*n, *e, signature)?)?;
                Ok(())
            }
            Some(Command::Crack { n, e }) => {
                let d = recover_private_key(*n, *e)
                    .with_context(|| format!("could not recover a key for n = {}", n))?;
                writeln!(output, "{}", d)?;
                Ok(())
            }
        }
    }
}
