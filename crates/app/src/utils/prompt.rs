//! Interactive input on stdin

use std::io::{self, BufRead, Write};

/// Print `label` to stderr and read one line from `input`, without the line
/// ending.
pub fn read_line(label: &str, input: &mut dyn BufRead) -> io::Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{label}")?;
    stderr.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Ask a yes/no question; anything but `y`/`yes` is a no.
pub fn confirm(question: &str, input: &mut dyn BufRead) -> io::Result<bool> {
    let answer = read_line(&format!("{question} [y/N] "), input)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn strips_line_endings() {
        let mut input = Cursor::new("hunter2\r\n");
        assert_eq!(read_line("", &mut input).unwrap(), "hunter2");
    }

    #[test]
    fn only_yes_confirms() {
        assert!(confirm("Delete?", &mut Cursor::new("Y\n")).unwrap());
        assert!(confirm("Delete?", &mut Cursor::new("yes\n")).unwrap());
        assert!(!confirm("Delete?", &mut Cursor::new("\n")).unwrap());
        assert!(!confirm("Delete?", &mut Cursor::new("nope\n")).unwrap());
    }
}
