use std::io::{BufRead, Write};

use thiserror::Error;

use crate::model::change::dollars_to_cents;

const PROMPT: &str = "Change owed: ";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before a valid amount was entered")]
    Closed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Prompts until a line parses to an amount whose rounded-cents value is
/// strictly positive. Non-positive and unparseable lines re-prompt silently.
pub fn read_positive_cents(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<i64, PromptError> {
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }

        if let Ok(dollars) = line.trim().parse::<f64>() {
            let cents = dollars_to_cents(dollars);
            if cents > 0 {
                return Ok(cents);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    fn run(lines: &str) -> (Result<i64, PromptError>, String) {
        let mut input = Cursor::new(lines);
        let mut output = Vec::new();
        let result = read_positive_cents(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_accepts_first_positive_amount() {
        let (result, output) = run("0.41\n");
        assert_eq!(41, result.unwrap());
        assert_eq!("Change owed: ", output);
    }

    #[test]
    fn test_reprompts_on_non_positive() {
        let (result, output) = run("0\n-1.5\n4.2\n");
        assert_eq!(420, result.unwrap());
        assert_eq!(3, output.matches(PROMPT).count());
    }

    #[test]
    fn test_reprompts_on_unparseable() {
        let (result, output) = run("change\n\n0.25\n");
        assert_eq!(25, result.unwrap());
        assert_eq!(3, output.matches(PROMPT).count());
    }

    #[test]
    fn test_rejects_amount_that_rounds_to_zero() {
        let (result, _) = run("0.001\n0.01\n");
        assert_eq!(1, result.unwrap());
    }

    #[test]
    fn test_closed_input() {
        let (result, _) = run("-3\n");
        assert!(matches!(result, Err(PromptError::Closed)));
    }
}
