/// ============================================
/// TERMINAL ATTRIBUTES - ACCESSOR
/// ============================================
use libc::{TCSANOW, c_int};
use std::io;
use std::os::unix::io::RawFd;

use crate::error::{Op, Result, TermError};

/// The kernel's terminal attribute set. `libc::termios` pins the field
/// order, widths, and `c_cc` length to the platform ABI; any private
/// copy of the layout would risk corrupting terminal state through the
/// raw-pointer interface below.
pub type Termios = libc::termios;

/// Maps a control request's return value onto the two failure modes:
/// `-1` is an OS error (errno holds the cause), any other nonzero
/// value is a logical failure the OS did not explain. Both checks are
/// independent and neither is retried.
fn check(op: Op, ret: c_int) -> Result<()> {
    if ret == -1 {
        Err(TermError::Os {
            op,
            source: io::Error::last_os_error(),
        })
    } else if ret != 0 {
        Err(TermError::Failed { op, code: ret })
    } else {
        Ok(())
    }
}

/// Reads the current attribute set for `fd`. Fails if `fd` is not an
/// open terminal device.
pub fn get_attributes(fd: RawFd) -> Result<Termios> {
    let mut attrs: Termios = unsafe { std::mem::zeroed() };
    check(Op::GetAttrs, unsafe { libc::tcgetattr(fd, &mut attrs) })?;
    Ok(attrs)
}

/// Writes `attrs` into the kernel's line-discipline state for `fd`,
/// taking effect immediately (`TCSANOW`). The change persists until
/// the next set call; there is no partial application to roll back.
pub fn set_attributes(fd: RawFd, attrs: &Termios) -> Result<()> {
    check(Op::SetAttrs, unsafe { libc::tcsetattr(fd, TCSANOW, attrs) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::io::AsRawFd;

    #[test]
    fn get_on_closed_descriptor_is_os_error() {
        let err = get_attributes(-1).unwrap_err();
        match err {
            TermError::Os { op, source } => {
                assert_eq!(op, Op::GetAttrs);
                assert_eq!(source.raw_os_error(), Some(libc::EBADF));
            }
            other => panic!("expected OS error, got {other:?}"),
        }
    }

    #[test]
    fn set_on_closed_descriptor_is_os_error() {
        let attrs: Termios = unsafe { std::mem::zeroed() };
        let err = set_attributes(-1, &attrs).unwrap_err();
        match err {
            TermError::Os { op, source } => {
                assert_eq!(op, Op::SetAttrs);
                assert_eq!(source.raw_os_error(), Some(libc::EBADF));
            }
            other => panic!("expected OS error, got {other:?}"),
        }
    }

    #[test]
    fn get_on_non_terminal_is_not_a_tty() {
        let file = std::fs::File::open("/dev/null").unwrap();
        let err = get_attributes(file.as_raw_fd()).unwrap_err();
        match err {
            TermError::Os { op, source } => {
                assert_eq!(op, Op::GetAttrs);
                assert_eq!(source.raw_os_error(), Some(libc::ENOTTY));
            }
            other => panic!("expected OS error, got {other:?}"),
        }
    }
}
