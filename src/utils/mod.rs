// src/utils/mod.rs
mod clipboard;
mod format;
mod io;

pub use self::clipboard::*;
pub use self::format::*;
pub use self::io::*;
