//! Coefficient acquisition from process arguments or an interactive prompt.

use std::io::{BufRead, Write};

use crate::core::error::InputError;
use crate::core::solver::Coefficients;
use crate::debug_log;

pub const PROMPT: &str = "Enter coefficients a b c separated by spaces: ";
pub const INVALID_INPUT: &str = "Invalid input. Please enter three numbers (e.g. 1 -3 2).";

fn parse_one(tok: &str) -> Result<f64, InputError> {
    let tok = tok.trim();
    let v: f64 = tok
        .parse()
        .map_err(|_| InputError::NotANumber(tok.to_string()))?;
    if !v.is_finite() {
        return Err(InputError::NonFinite(tok.to_string()));
    }
    Ok(v)
}

pub fn parse_coefficients<S: AsRef<str>>(tokens: &[S]) -> Result<Coefficients, InputError> {
    let [a, b, c] = tokens else {
        return Err(InputError::WrongCount(tokens.len()));
    };
    Ok(Coefficients::new(
        parse_one(a.as_ref())?,
        parse_one(b.as_ref())?,
        parse_one(c.as_ref())?,
    ))
}

/// Three numeric arguments or nothing; a failure here is silent.
pub fn from_args<S: AsRef<str>>(args: &[S]) -> Option<Coefficients> {
    match parse_coefficients(args) {
        Ok(coeffs) => Some(coeffs),
        Err(e) => {
            if !args.is_empty() {
                debug_log!("arguments rejected ({e}); falling back to prompt");
            }
            None
        }
    }
}

/// Prompts until a line holds three numbers. `on_invalid` renders the retry
/// message so the caller controls styling.
pub fn prompt_coefficients<R, W, F>(
    reader: &mut R,
    writer: &mut W,
    mut on_invalid: F,
) -> Result<Coefficients, InputError>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> String,
{
    let mut line = String::new();
    loop {
        write!(writer, "{}", PROMPT)?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            writeln!(writer)?;
            return Err(InputError::EndOfInput);
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match parse_coefficients(&tokens[..]) {
            Ok(coeffs) => return Ok(coeffs),
            Err(e) if e.is_retryable() => {
                debug_log!("rejected input line: {e}");
                writeln!(writer, "{}", on_invalid(INVALID_INPUT))?;
            }
            Err(e) => return Err(e),
        }
    }
}
