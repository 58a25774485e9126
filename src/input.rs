use anyhow::{Context, Result};
use std::io::{self, BufRead, IsTerminal};
use zeroize::Zeroizing;

/// Read the password from stdin.
///
/// Piped input is read up to the first newline. On a terminal the password is
/// prompted for without echo.
pub fn read_password() -> Result<Zeroizing<Vec<u8>>> {
    if io::stdin().is_terminal() {
        let pw = rpassword::prompt_password("Password: ").context("failed to read password")?;
        return Ok(Zeroizing::new(pw.into_bytes()));
    }

    read_password_from(io::stdin().lock())
}

/// Read one line from `reader` and strip its trailing `\n`.
///
/// Nothing else is trimmed. A missing newline before EOF is fine, and so is an
/// empty password.
pub fn read_password_from<R: BufRead>(mut reader: R) -> Result<Zeroizing<Vec<u8>>> {
    let mut buf = Zeroizing::new(Vec::new());
    reader
        .read_until(b'\n', &mut buf)
        .context("failed to read password from stdin")?;

    if buf.last() == Some(&b'\n') {
        buf.pop();
    }

    Ok(buf)
}
