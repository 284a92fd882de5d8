//! Line prompts for the terminal front end.

use std::io::{self, BufRead, Write};

use crate::error::AppError;

/// Write `text` to `output`, then read one line from `input` without its
/// line ending.
pub fn prompt(
    mut input: impl BufRead,
    mut output: impl Write,
    text: &str,
) -> Result<String, AppError> {
    write!(output, "{text}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Yes/no question defaulting to no.
pub fn confirm(input: impl BufRead, output: impl Write, question: &str) -> Result<bool, AppError> {
    let answer = prompt(input, output, &format!("{question} [y/N] "))?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

/// Read a secret from the controlling terminal with echo turned off.
pub fn read_secret(text: &str) -> Result<String, AppError> {
    Ok(rpassword::prompt_password(text)?)
}
