/// ============================================
/// TERMINAL RAW MODE - TRANSFORMER
/// ============================================
use libc::{BRKINT, CS8, ECHO, ICANON, ICRNL, IEXTEN, INPCK, ISIG, ISTRIP, IXON, OPOST, VMIN, VTIME};
use std::io;
use std::os::unix::io::{AsRawFd, RawFd};

use crate::error::Result;
use crate::terminal::attrs::{Termios, get_attributes, set_attributes};

/// Derives the raw-mode attribute set from `original` without touching
/// it: break/CR-NL/parity/strip/flow-control input handling off,
/// output post-processing off, 8-bit characters, echo/canonical/
/// extended/signal local processing off, and reads satisfied by a
/// single byte with no inter-byte timeout.
pub fn raw_attributes(original: &Termios) -> Termios {
    let mut raw = *original;

    raw.c_iflag &= !(BRKINT | ICRNL | INPCK | ISTRIP | IXON);
    raw.c_oflag &= !OPOST;
    raw.c_cflag |= CS8;
    raw.c_lflag &= !(ECHO | ICANON | IEXTEN | ISIG);

    raw.c_cc[VMIN] = 1;
    raw.c_cc[VTIME] = 0;

    raw
}

/// Applies the raw-mode transform of `original` to `fd`. Either the
/// kernel accepts the whole attribute set or the call fails with the
/// terminal state untouched; failures propagate unchanged.
pub fn enter_raw_mode(fd: RawFd, original: &Termios) -> Result<()> {
    set_attributes(fd, &raw_attributes(original))
}

/// Scoped raw-mode session. Owns the attribute set captured before the
/// switch and restores it on drop, so the terminal is not left raw
/// when the caller unwinds. Explicit [`restore`](RawMode::restore) is
/// preferred on the normal exit path since drop cannot report errors.
pub struct RawMode {
    fd: RawFd,
    original: Termios,
}

impl RawMode {
    /// Enables raw mode on standard input.
    pub fn enable() -> Result<Self> {
        Self::enable_on(io::stdin().as_raw_fd())
    }

    /// Captures the current attributes of `fd` and switches it to raw
    /// mode. The descriptor is not owned; it must stay open for the
    /// lifetime of the session.
    pub fn enable_on(fd: RawFd) -> Result<Self> {
        let original = get_attributes(fd)?;
        enter_raw_mode(fd, &original)?;
        Ok(RawMode { fd, original })
    }

    /// The attribute set captured before entering raw mode.
    pub fn original(&self) -> &Termios {
        &self.original
    }

    /// Re-applies the saved original attributes.
    pub fn restore(&self) -> Result<()> {
        set_attributes(self.fd, &self.original)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
