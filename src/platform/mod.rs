//! Platform collaborator boundary
//!
//! The window system, GPU, and input devices live outside this crate;
//! the host reaches them only through the narrow traits here:
//! - `input`: per-frame key/button snapshots
//! - `video`: load-by-name textures and an ordered sprite batch
//! - `headless`: in-memory backends for the demo binary and tests

pub mod headless;
pub mod input;
pub mod video;

pub use input::{InputSnapshot, InputSource};
pub use video::{ContentError, PixelRect, Sprite, SpriteBatch, TextureId, TextureLoader, Tint};
