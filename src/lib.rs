//! Raw-mode terminal control for character-at-a-time input on Unix.
//!
//! The core is small: [`terminal::get_attributes`] and
//! [`terminal::set_attributes`] are the only boundary with the
//! kernel's terminal driver, and [`terminal::raw_attributes`] derives
//! the raw (non-canonical, unechoed, single-byte) attribute set from a
//! saved original. [`terminal::RawMode`] wraps the three into a scoped
//! session that restores the terminal when it ends.
//!
//! ```no_run
//! use rawtty::terminal::{Keypress, RawMode, read_keypress};
//! use std::os::unix::io::AsRawFd;
//!
//! # fn main() -> rawtty::Result<()> {
//! let fd = std::io::stdin().as_raw_fd();
//! let session = RawMode::enable_on(fd)?;
//! loop {
//!     match read_keypress(fd)? {
//!         Keypress::Byte(b'q') => break,
//!         Keypress::Byte(_) | Keypress::Empty => {}
//!     }
//! }
//! session.restore()?;
//! # Ok(())
//! # }
//! ```
//!
//! A single caller on a single terminal is assumed. When several
//! processes set attributes on the same terminal the last write wins;
//! no coordination is attempted.

pub mod error;
pub mod terminal;

pub use error::{Result, TermError};
