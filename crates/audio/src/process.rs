//! File-level encrypt/decrypt operations
//!
//! Masking is symmetric, so [`Mode`] only changes the wording of the
//! outcome. Failures from the container or the filesystem are reported in
//! the returned [`ProcessOutcome`] rather than propagated.

use core::fmt;
use core::str::FromStr;
use std::fs;
use std::path::Path;

use a5cipher_algorithms::A51;
use a5cipher_api::error::{Error, Result, ResultExt};
use a5cipher_api::KeystreamGenerator;
use log::{info, warn};

use crate::cipher::SampleCipher;
use crate::container::{AudioContainer, WavContainer};

/// Direction label for a file operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    fn past_tense(self) -> &'static str {
        match self {
            Mode::Encrypt => "encrypted",
            Mode::Decrypt => "decrypted",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Encrypt => f.write_str("encrypt"),
            Mode::Decrypt => f.write_str("decrypt"),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("encrypt") {
            Ok(Mode::Encrypt)
        } else if s.eq_ignore_ascii_case("decrypt") {
            Ok(Mode::Decrypt)
        } else {
            Err(Error::validation(
                "mode",
                format!("expected 'encrypt' or 'decrypt', got '{}'", s),
            ))
        }
    }
}

/// Success flag and human-readable message for a file operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub success: bool,
    pub message: String,
}

impl ProcessOutcome {
    fn succeeded(message: String) -> Self {
        Self {
            success: true,
            message,
        }
    }

    fn failed(err: &Error) -> Self {
        Self {
            success: false,
            message: format!("Error processing audio file: {}", err),
        }
    }
}

/// Decode `input` with `container`, mask its samples and re-encode it.
///
/// The format descriptor is passed back to the container unchanged.
pub fn process_audio_bytes<C, G>(
    container: &C,
    input: &[u8],
    generator: &mut G,
    cipher: &SampleCipher,
) -> Result<Vec<u8>>
where
    C: AudioContainer + ?Sized,
    G: KeystreamGenerator,
{
    let (format, pcm) = container.decode(input)?;
    let masked = cipher.apply_pcm(&pcm, &format, generator)?;
    container.encode(&format, &masked)
}

/// Encrypt or decrypt a WAV file with the default pipeline configuration
pub fn process_audio_file<P, Q>(input: P, output: Q, cipher: &mut A51, mode: Mode) -> ProcessOutcome
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    process_audio_file_with(
        &WavContainer,
        &SampleCipher::default(),
        input,
        output,
        cipher,
        mode,
    )
}

/// Encrypt or decrypt a file with an explicit container and pipeline.
///
/// The output file is only written once processing has succeeded.
pub fn process_audio_file_with<C, P, Q>(
    container: &C,
    masking: &SampleCipher,
    input: P,
    output: Q,
    cipher: &mut A51,
    mode: Mode,
) -> ProcessOutcome
where
    C: AudioContainer + ?Sized,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (input, output) = (input.as_ref(), output.as_ref());

    match run(container, masking, input, output, cipher) {
        Ok(()) => {
            info!(
                "{} {} -> {}",
                mode.past_tense(),
                input.display(),
                output.display()
            );
            ProcessOutcome::succeeded(format!(
                "Successfully {} audio file.\nSource: {}\nOutput saved to: {}\nKey: {}",
                mode.past_tense(),
                input.display(),
                output.display(),
                cipher.key_hex()
            ))
        }
        Err(err) => {
            warn!("failed to {} {}: {}", mode, input.display(), err);
            ProcessOutcome::failed(&err)
        }
    }
}

fn run<C: AudioContainer + ?Sized>(
    container: &C,
    masking: &SampleCipher,
    input: &Path,
    output: &Path,
    cipher: &mut A51,
) -> Result<()> {
    let bytes = fs::read(input).with_context("reading input audio file")?;
    let processed = process_audio_bytes(container, &bytes, cipher, masking)?;
    fs::write(output, processed).with_context("writing output audio file")
}
