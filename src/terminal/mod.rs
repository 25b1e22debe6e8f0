pub mod attrs;
pub mod input;
pub mod raw;

pub use attrs::{Termios, get_attributes, set_attributes};
pub use input::{Keypress, read_keypress};
pub use raw::{RawMode, enter_raw_mode, raw_attributes};
