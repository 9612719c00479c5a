//! Input reading for the assist binary.
//! Accepts UTF-8 text from a file or standard input and rejects binary data.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::AppError;

/// Read the whole input, from `path` when given, otherwise from stdin
pub fn read_input(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            let bytes = fs::read(path)?;
            text_from_bytes(&path.display().to_string(), &bytes)
        }
        None => {
            info!("Reading input from stdin");
            let mut bytes = Vec::new();
            io::stdin().lock().read_to_end(&mut bytes)?;
            text_from_bytes("<stdin>", &bytes)
        }
    }
}

/// Decode raw bytes as text, rejecting anything that looks binary
pub fn text_from_bytes(source: &str, bytes: &[u8]) -> Result<String, AppError> {
    let text = match String::from_utf8(bytes.to_vec()) {
        // Basic check for binary files (contains null bytes)
        Ok(text) if text.contains('\0') => return Err(binary_input(source, bytes)),
        Ok(text) => text,
        Err(e) if infer::get(bytes).is_some() => {
            debug!("Input from {} is not UTF-8: {}", source, e);
            return Err(binary_input(source, bytes));
        }
        Err(e) => return Err(e.into()),
    };

    let text = match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    };

    info!("Read {} characters from {}", text.chars().count(), source);
    Ok(text)
}

/// Rejection for binary data, naming the detected file type when `infer` knows it
fn binary_input(source: &str, bytes: &[u8]) -> AppError {
    let detected = infer::get(bytes)
        .map(|kind| format!("{} detected", kind.mime_type()))
        .unwrap_or_else(|| "null bytes".to_string());

    warn!("Rejected binary input from {} ({})", source, detected);
    AppError::Validation(format!(
        "Binary input is not supported ({} in {})",
        detected, source
    ))
}
