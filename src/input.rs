//! Interactive parameter input.
//!
//! Parameters not given on the command line are asked for on standard input,
//! one per line.

use std::io::{self, BufRead, Write};

/// Errors that can occur while reading operator input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The value was not a whole number greater than zero.
    #[error("{name} must be a positive integer, got {raw:?}")]
    NotPositive {
        /// Parameter being read
        name: &'static str,
        /// Text the operator entered
        raw: String,
    },

    /// Input ended before the value was entered.
    #[error("Input ended before {name} was entered")]
    Eof {
        /// Parameter being read
        name: &'static str,
    },

    /// Reading input or writing the prompt failed.
    #[error("Failed to read {name}: {source}")]
    Io {
        /// Parameter being read
        name: &'static str,
        /// Underlying failure
        #[source]
        source: io::Error,
    },
}

/// Result type alias for input operations.
pub type InputResult<T> = Result<T, InputError>;

/// Parses a strictly positive integer, ignoring surrounding whitespace.
///
/// # Example
///
/// ```rust
/// use graphgen::input::parse_positive;
///
/// assert_eq!(parse_positive("depth", " 4\n").unwrap(), 4);
/// assert!(parse_positive("depth", "0").is_err());
/// assert!(parse_positive("depth", "-2").is_err());
/// ```
pub fn parse_positive(name: &'static str, raw: &str) -> InputResult<usize> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(InputError::NotPositive {
            name,
            raw: raw.trim().to_string(),
        }),
    }
}

/// Writes `prompt` on its own line, then reads one positive integer.
pub fn prompt_positive<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    name: &'static str,
    prompt: &str,
) -> InputResult<usize> {
    let io_error = |source| InputError::Io { name, source };

    writeln!(writer, "{}", prompt).map_err(io_error)?;
    writer.flush().map_err(io_error)?;

    let mut line = String::new();
    if reader.read_line(&mut line).map_err(io_error)? == 0 {
        return Err(InputError::Eof { name });
    }
    parse_positive(name, &line)
}
