//! aesenvelope - encrypt or decrypt a file with a password
//!
//! Thin front end over the library: parses two positional paths, obtains the
//! password, opens the files and reports the outcome through the exit status.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use aesenvelope_rs::aliases::PasswordString;
use aesenvelope_rs::{decrypt, encrypt, EnvelopeError};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::Password;
use tracing::Level;

/// Password-based AES-256-CBC file encryption
#[derive(Parser, Debug)]
#[command(name = "aesenvelope")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encrypt INPUT into an envelope written to OUTPUT
    Encrypt {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
    /// Decrypt the envelope at INPUT, writing the plaintext to OUTPUT
    Decrypt {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
}

/// Where the password comes from.
trait PasswordProvider {
    fn password(&self, confirm: bool) -> Result<PasswordString>;
}

/// Hidden terminal prompt, or the first stdin line when stdin is piped.
struct TerminalPrompt;

impl PasswordProvider for TerminalPrompt {
    fn password(&self, confirm: bool) -> Result<PasswordString> {
        if !io::stdin().is_terminal() {
            return read_password_line(io::stdin().lock());
        }

        let mut prompt = Password::new().with_prompt("Enter password");
        if confirm {
            prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
        }
        let password = prompt.interact().context("failed to read password")?;
        Ok(PasswordString::new(password))
    }
}

/// Longest password accepted from a pipe, in bytes.
const MAX_PIPED_PASSWORD: usize = 255;

/// Read a piped password the way the C tools' `scanf("%255s")` does: the
/// first whitespace-delimited word of the line, at most 255 bytes. A password
/// with spaces therefore derives the same key here as it did there.
fn read_password_line<R: BufRead>(mut reader: R) -> Result<PasswordString> {
    let mut line = PasswordString::new(String::new());
    reader
        .read_line(&mut line)
        .context("failed to read password from stdin")?;

    let word = line.split_whitespace().next().unwrap_or_default();
    let mut end = word.len().min(MAX_PIPED_PASSWORD);
    while !word.is_char_boundary(end) {
        end -= 1;
    }
    if end == 0 {
        bail!("no password given on stdin");
    }
    Ok(PasswordString::new(word[..end].to_owned()))
}

fn run(cli: Cli, passwords: &dyn PasswordProvider) -> Result<&'static str> {
    match cli.command {
        Commands::Encrypt { input, output } => {
            let password = passwords.password(true)?;
            transform(&input, &output, |src, dst| encrypt(src, dst, &password))
                .context("encryption failed")?;
            Ok("Encryption completed")
        }
        Commands::Decrypt { input, output } => {
            let password = passwords.password(false)?;
            transform(&input, &output, |src, dst| decrypt(src, dst, &password))
                .map_err(|err| decrypt_failure(err, &input))?;
            Ok("Decryption completed")
        }
    }
}

/// Blame the input file when the envelope itself is bad, the run otherwise.
fn decrypt_failure(err: anyhow::Error, input: &Path) -> anyhow::Error {
    let malformed = err
        .downcast_ref::<EnvelopeError>()
        .is_some_and(EnvelopeError::is_malformed_input);
    if malformed {
        err.context(format!("{} is not a readable envelope", input.display()))
    } else {
        err.context("decryption failed")
    }
}

/// Open both files, run `op`, and remove `output` again if anything failed.
fn transform<F>(input: &Path, output: &Path, op: F) -> Result<()>
where
    F: FnOnce(BufReader<File>, &mut BufWriter<File>) -> Result<(), EnvelopeError>,
{
    if let (Ok(a), Ok(b)) = (fs::canonicalize(input), fs::canonicalize(output)) {
        if a == b {
            bail!("input and output are the same file: {}", input.display());
        }
    }

    let source = File::open(input).with_context(|| format!("cannot open {}", input.display()))?;
    let sink = File::create(output).with_context(|| format!("cannot create {}", output.display()))?;
    let mut writer = BufWriter::new(sink);

    let result = op(BufReader::new(source), &mut writer)
        .and_then(|()| writer.flush().map_err(EnvelopeError::Io));

    if let Err(err) = result {
        drop(writer);
        let _ = fs::remove_file(output);
        return Err(err.into());
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(cli, &TerminalPrompt) {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
