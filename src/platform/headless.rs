//! In-memory collaborators for the demo binary and tests
//!
//! The native build ships no window or GPU backend; these stand in for
//! one so the full lifecycle can run anywhere.

use super::input::{InputSnapshot, InputSource};
use super::video::{ContentError, PixelRect, Sprite, SpriteBatch, TextureId, TextureLoader, Tint};

/// Texture store that hands out sequential handles and remembers the
/// names it resolved, in load order.
#[derive(Debug, Default)]
pub struct HeadlessTextures {
    loaded: Vec<String>,
}

impl HeadlessTextures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asset names resolved so far, in load order
    pub fn loaded(&self) -> &[String] {
        &self.loaded
    }
}

impl TextureLoader for HeadlessTextures {
    fn load(&mut self, name: &str) -> Result<TextureId, ContentError> {
        // Handles start at 1; zero stays reserved for "never resolved".
        self.loaded.push(name.to_owned());
        Ok(TextureId(self.loaded.len() as u32))
    }
}

/// Sprite batch that records submissions instead of drawing them.
/// Keeps the most recent begin/end scope and counts completed scopes.
#[derive(Debug, Default)]
pub struct TraceBatch {
    sprites: Vec<Sprite>,
    completed_frames: u32,
}

impl TraceBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sprites submitted in the most recent scope, in draw order
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Number of begin/end scopes completed so far
    pub fn frame_count(&self) -> u32 {
        self.completed_frames
    }
}

impl SpriteBatch for TraceBatch {
    fn begin(&mut self) {
        self.sprites.clear();
    }

    fn draw(&mut self, texture: TextureId, dest: PixelRect, tint: Tint) {
        self.sprites.push(Sprite {
            texture,
            dest,
            tint,
        });
    }

    fn end(&mut self) {
        self.completed_frames += 1;
    }
}

/// Plays back a fixed sequence of snapshots, then repeats the final one.
/// Ending a script on an escape press therefore holds escape until the
/// host notices.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<InputSnapshot>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<InputSnapshot>) -> Self {
        Self { frames, cursor: 0 }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputSnapshot {
        let snap = match self.frames.get(self.cursor) {
            Some(snap) => *snap,
            None => self.frames.last().copied().unwrap_or_default(),
        };
        if self.cursor < self.frames.len() {
            self.cursor += 1;
        }
        snap
    }
}
