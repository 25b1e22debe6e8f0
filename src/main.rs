//! Demonstration key loop: raw mode on stdin, one keystroke per read.
//!
//! `q` quits, `z` answers `Z`, `u` moves the cursor up a line, any
//! other key answers `*`, and a zero-length read answers `T`. The
//! responses are this demo's policy, not the library's.

use std::io::{self, Write};
use std::os::unix::io::AsRawFd;

use anyhow::Context;

use rawtty::terminal::{Keypress, RawMode, read_keypress};

const CURSOR_UP: &[u8] = b"\x1b[A";

enum Action {
    Quit,
    Respond(&'static [u8]),
}

fn dispatch(key: Keypress) -> Action {
    match key {
        Keypress::Byte(b'q') => Action::Quit,
        Keypress::Byte(b'z') => Action::Respond(b"Z"),
        Keypress::Byte(b'u') => Action::Respond(CURSOR_UP),
        Keypress::Byte(_) => Action::Respond(b"*"),
        Keypress::Empty => Action::Respond(b"T"),
    }
}

fn main() -> anyhow::Result<()> {
    let fd = io::stdin().as_raw_fd();
    let session = RawMode::enable_on(fd).context("enabling raw mode on stdin")?;

    let mut out = io::stdout();
    loop {
        match dispatch(read_keypress(fd)?) {
            Action::Quit => break,
            Action::Respond(bytes) => {
                out.write_all(bytes)?;
                out.flush()?;
            }
        }
    }

    session.restore().context("restoring terminal attributes")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(key: Keypress) -> &'static [u8] {
        match dispatch(key) {
            Action::Respond(bytes) => bytes,
            Action::Quit => panic!("expected a response, got quit"),
        }
    }

    #[test]
    fn quits_on_q() {
        assert!(matches!(dispatch(Keypress::Byte(b'q')), Action::Quit));
    }

    #[test]
    fn named_keys_have_fixed_responses() {
        assert_eq!(response(Keypress::Byte(b'z')), b"Z");
        assert_eq!(response(Keypress::Byte(b'u')), b"\x1b[A");
        assert_eq!(response(Keypress::Byte(b'x')), b"*");
    }

    #[test]
    fn empty_read_responds_once_and_does_not_quit() {
        assert_eq!(response(Keypress::Empty), b"T");
    }
}
