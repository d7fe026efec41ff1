use std::io::{self, BufRead, IsTerminal, Read, Write};

/// Reads the comma-separated URL list from stdin. An interactive terminal
/// gets a prompt and a single line; piped input is read to the end.
pub fn read_urls() -> io::Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("Enter image URLs (comma-separated): ");
        io::stderr().flush()?;
        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;
        return Ok(line);
    }
    let mut raw = String::new();
    stdin.lock().read_to_string(&mut raw)?;
    Ok(raw.replace(['\n', '\r'], ","))
}
