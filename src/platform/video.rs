//! Video collaborator boundary
//!
//! The game needs exactly two things from a renderer: load-by-name
//! texture resolution at content time, and an immediate-mode sprite
//! batch at draw time. Draws land in submission order; later draws
//! occlude earlier ones.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle to a loaded texture. The default (zero) handle marks a
/// texture that was never resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// Destination rectangle in integer pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// RGBA tint multiplied into a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    /// Identity tint: the texture's own colors
    pub const WHITE: Tint = Tint {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
}

/// One queued draw: a texture stretched over a destination rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub texture: TextureId,
    pub dest: PixelRect,
    pub tint: Tint,
}

/// An asset name the loader could not resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentError {
    pub name: String,
}

impl ContentError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no texture asset named {:?}", self.name)
    }
}

impl std::error::Error for ContentError {}

/// Load-by-name texture resolution, called once per distinct asset name
/// during the load-content phase.
pub trait TextureLoader {
    fn load(&mut self, name: &str) -> Result<TextureId, ContentError>;
}

/// Immediate-mode sprite submission inside a begin/end scope.
pub trait SpriteBatch {
    fn begin(&mut self);
    fn draw(&mut self, texture: TextureId, dest: PixelRect, tint: Tint);
    fn end(&mut self);
}
