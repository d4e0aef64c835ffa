//! Reads input files into `RationalSequence`s. Every whitespace-separated
//! token is a number: a fraction if it contains `/`, an integer otherwise.
use anyhow::{Context, Result};
use bstr::{io::BufReadExt, ByteSlice};
use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};
use tracing::debug;

use crate::error::RationalError;
use crate::rational::Rational;
use crate::sequence::RationalSequence;

/// Parses one token: `"n/d"` as a fraction, anything else as an integer.
pub fn parse_token(token: &str) -> std::result::Result<Rational, RationalError> {
    if token.contains('/') {
        token.parse()
    } else {
        let n = token.parse::<i64>().map_err(|_| RationalError::Value(token.to_string()))?;
        Ok(Rational::from_integer(n))
    }
}

/// Returns the file at `path` as a sequence, in the order its tokens appear.
pub fn sequence_from_path(path: &Path) -> Result<RationalSequence> {
    let path_display = format!("{}", path.display());
    let file = File::open(path).with_context(|| format!("Can't open file: {path_display}"))?;
    sequence_from_reader(decoded(file), &path_display)
}

/// Reads every line of `reader`, parsing each token and appending it to the
/// result. Errors name `source` and the one-based line number.
pub fn sequence_from_reader(mut reader: impl BufRead, source: &str) -> Result<RationalSequence> {
    let mut sequence = RationalSequence::new();
    let mut line_number = 0_usize;
    let mut failure = None;
    reader
        .for_byte_line(|line| {
            line_number += 1;
            for token in line.fields() {
                let parsed = match token.to_str() {
                    Ok(token) => parse_token(token),
                    Err(_) => Err(RationalError::Value(token.to_str_lossy().into_owned())),
                };
                match parsed.and_then(|r| sequence.append(r)) {
                    Ok(()) => {}
                    Err(e) => {
                        failure = Some(e);
                        return Ok(false);
                    }
                }
            }
            Ok(true)
        })
        .with_context(|| format!("Error reading file: {source}"))?;
    if let Some(e) = failure {
        return Err(e).with_context(|| format!("{source}:{line_number}"));
    }
    debug!(source, tokens = sequence.len(), "read input");
    Ok(sequence)
}

/// A buffered reader that decodes UTF-16 input (recognized by its Byte Order
/// Mark) to UTF-8, strips any BOM, and passes everything else through.
fn decoded<T: Read>(source: T) -> BufReader<DecodeReaderBytes<T, Vec<u8>>> {
    BufReader::new(
        DecodeReaderBytesBuilder::new()
            .bom_sniffing(true) // Look at the BOM to detect UTF-16 files and convert to UTF-8
            .strip_bom(true) // Remove the BOM before sending data to us
            .utf8_passthru(true) // Don't enforce UTF-8 (BOM or no BOM)
            .build(source),
    )
}
