//! User interaction operations (confirmation prompt).

use anyhow::Result;

use super::RealRuntime;

use std::io::{self, BufRead, Write};

/// Core, testable implementation that reads from any BufRead and writes to
/// any Write. This is intentionally free-standing so tests can exercise it
/// without needing a RealRuntime.
///
/// Only `y`/`yes`/`n`/`no` (case-insensitive) are accepted; anything else
/// re-prompts. A closed input stream counts as a decline.
pub(crate) fn confirm_with_io<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    loop {
        writeln!(output, "ok?(y/n)")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => {}
        }
    }
}

impl RealRuntime {
    pub(crate) fn confirm_impl(&self) -> Result<bool> {
        // Wire the generic implementation to real stdin/stdout.
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut stdin_lock = stdin.lock();
        confirm_with_io(&mut stdin_lock, &mut stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::confirm_with_io;
    use anyhow::Result;
    use std::io::Cursor;

    #[test]
    fn accepts_yes_and_short_y() -> Result<()> {
        let cases = vec!["y\n", "Y\n", "yes\n", " YES \n", "  y  \n"];
        for case in cases {
            let mut input = Cursor::new(case.as_bytes());
            let mut output = Vec::new();
            let ok = confirm_with_io(&mut input, &mut output)?;
            assert!(ok, "expected '{}' to be accepted as yes", case);
        }
        Ok(())
    }

    #[test]
    fn accepts_no_and_short_n() -> Result<()> {
        let cases = vec!["n\n", "N\n", "no\n", " NO \n"];
        for case in cases {
            let mut input = Cursor::new(case.as_bytes());
            let mut output = Vec::new();
            let ok = confirm_with_io(&mut input, &mut output)?;
            assert!(!ok, "expected '{}' to be accepted as no", case);
        }
        Ok(())
    }

    #[test]
    fn reprompts_until_a_valid_answer() -> Result<()> {
        let mut input = Cursor::new(b"maybe\n\nok\ny\n".as_slice());
        let mut output = Vec::new();
        let ok = confirm_with_io(&mut input, &mut output)?;
        assert!(ok);

        // One prompt per read attempt: three rejects plus the final accept.
        let out = String::from_utf8(output)?;
        assert_eq!(out.matches("ok?(y/n)").count(), 4);
        Ok(())
    }

    #[test]
    fn closed_input_is_a_decline() -> Result<()> {
        let mut input = Cursor::new(b"".as_slice());
        let mut output = Vec::new();
        let ok = confirm_with_io(&mut input, &mut output)?;
        assert!(!ok);
        Ok(())
    }

    #[test]
    fn prompt_is_written_before_reading() -> Result<()> {
        let mut input = Cursor::new(b"n\n".as_slice());
        let mut output = Vec::new();
        let _ = confirm_with_io(&mut input, &mut output)?;
        let out = String::from_utf8(output)?;
        assert_eq!(out, "ok?(y/n)\n");
        Ok(())
    }
}
