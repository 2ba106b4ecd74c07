//! Interactive confirmation.

use std::io::{self, BufRead, Write};

/// Ask whether an existing target may be replaced.
///
/// Only an explicit `yes` confirms; anything else, including end of input,
/// declines.
pub fn confirm_overwrite<R, W>(input: &mut R, output: &mut W) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(
        output,
        "Target file already exists. Do you want to overwrite it? (yes/no) [no]: "
    )?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim() == "yes")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn answer(input: &str) -> bool {
        let mut output = Vec::new();
        confirm_overwrite(&mut Cursor::new(input), &mut output).unwrap()
    }

    #[test]
    fn only_yes_confirms() {
        assert!(answer("yes\n"));
        assert!(answer("  yes  \n"));
        assert!(!answer("y\n"));
        assert!(!answer("no\n"));
        assert!(!answer("\n"));
        assert!(!answer(""));
    }

    #[test]
    fn writes_question() {
        let mut output = Vec::new();
        confirm_overwrite(&mut Cursor::new("no\n"), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Target file already exists."));
    }
}
