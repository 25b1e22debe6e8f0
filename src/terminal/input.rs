use std::io;
use std::os::unix::io::RawFd;

use crate::error::{Result, TermError};

/// Outcome of a single-byte terminal read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keypress {
    /// One byte was delivered.
    Byte(u8),
    /// The read returned length zero. On a terminal this is a benign
    /// event, not end-of-stream; the reaction is left to the caller.
    Empty,
}

/// Blocks until the next read on `fd` completes. A negative length is
/// an error, a zero length is [`Keypress::Empty`].
pub fn read_keypress(fd: RawFd) -> Result<Keypress> {
    let mut buf = [0u8; 1];
    let n = unsafe { libc::read(fd, buf.as_mut_ptr().cast(), 1) };
    if n < 0 {
        Err(TermError::Read {
            source: io::Error::last_os_error(),
        })
    } else if n == 0 {
        Ok(Keypress::Empty)
    } else {
        Ok(Keypress::Byte(buf[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_on_closed_descriptor_is_read_error() {
        let err = read_keypress(-1).unwrap_err();
        match err {
            TermError::Read { source } => {
                assert_eq!(source.raw_os_error(), Some(libc::EBADF));
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }
}
