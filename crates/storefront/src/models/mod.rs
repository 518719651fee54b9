//! Session-backed visitor models.

pub mod session;

pub use session::{Flash, FlashKind, keys};
