//! Render-command queue and the platform seam
//!
//! The renderer here is a passive collector: simulation code pushes
//! [`DrawCommand`]s into a [`RenderQueue`] and the engine submits the queue
//! once per frame to a [`Platform`]. Window creation, event polling, and the
//! actual rasterization are opaque platform services behind that trait; the
//! [`HeadlessPlatform`] drives the loop with scripted events and records the
//! queues it is asked to present, which is what the tests and demo binaries
//! run against.

use crate::application::AppEvent;
use crate::foundation::math::Rect;
use std::collections::VecDeque;
use thiserror::Error;

/// RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);

    /// Opaque white
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);

    /// Create an opaque color from RGB channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }
}

/// Color modulation applied to a sprite
///
/// Mirrors the three visual states the shooter distinguishes per asteroid
/// per frame; the mapping to concrete channel values lives here so every
/// backend tints identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    /// No modulation
    #[default]
    Neutral,

    /// Proximity warning (yellow)
    Warning,

    /// Collision (red)
    Collision,
}

impl Tint {
    /// Channel multipliers for this tint
    pub fn color_mod(self) -> [u8; 3] {
        match self {
            Self::Neutral => [0xFF, 0xFF, 0xFF],
            Self::Warning => [0xCC, 0xCC, 0x00],
            Self::Collision => [0xFF, 0x00, 0x00],
        }
    }
}

/// A single draw primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole frame to a color
    Clear(Color),

    /// Filled rectangle
    FillRect {
        /// Destination in screen space
        rect: Rect,
        /// Fill color
        color: Color,
    },

    /// Textured rectangle sourced from an atlas tile
    Sprite {
        /// Atlas tile as (column, row) grid coordinates
        tile: (u32, u32),
        /// Destination in screen space
        dst: Rect,
        /// Color modulation
        tint: Tint,
    },

    /// Debug text overlay line
    DebugText {
        /// Left edge in screen space
        x: f32,
        /// Baseline in screen space
        y: f32,
        /// Text to draw
        text: String,
    },
}

/// Draw commands collected over one frame
#[derive(Debug, Default)]
pub struct RenderQueue {
    commands: Vec<DrawCommand>,
}

impl RenderQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Drop all commands; called by the engine at the start of each frame
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// The commands submitted so far this frame
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of commands in the queue
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Platform-level errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Presenting a frame failed
    #[error("Present failed: {0}")]
    PresentFailed(String),
}

/// Window, event, and presentation services
///
/// Everything the loop needs from the outside world: pending events at the
/// top of the frame, and a sink for the finished render queue at the bottom.
pub trait Platform {
    /// Append this frame's pending events to `events`
    fn poll_events(&mut self, events: &mut Vec<AppEvent>);

    /// Present a finished frame
    fn present(&mut self, queue: &RenderQueue) -> Result<(), RenderError>;
}

/// Scripted, windowless platform
///
/// Delivers pre-programmed events at chosen frame numbers, requests shutdown
/// after an optional frame limit, and keeps the last presented queue around
/// for inspection. Stands in for a real windowing backend in tests and in
/// the demo binaries' headless runs.
#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    script: VecDeque<(u64, AppEvent)>,
    frame_limit: Option<u64>,
    frames_presented: u64,
    last_queue: Vec<DrawCommand>,
}

impl HeadlessPlatform {
    /// Create a platform that runs until the application quits on its own
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a platform that requests close after `frames` presented frames
    pub fn with_frame_limit(frames: u64) -> Self {
        Self {
            frame_limit: Some(frames),
            ..Self::default()
        }
    }

    /// Schedule an event for delivery at the start of frame `frame`
    ///
    /// The script is kept sorted by frame; events scheduled for the same
    /// frame are delivered in the order they were added.
    pub fn schedule(&mut self, frame: u64, event: AppEvent) {
        let index = self
            .script
            .iter()
            .position(|(scheduled, _)| *scheduled > frame)
            .unwrap_or(self.script.len());
        self.script.insert(index, (frame, event));
    }

    /// Schedule a key press-and-release across two consecutive frames
    pub fn schedule_key_tap(&mut self, frame: u64, key: crate::input::KeyCode) {
        self.schedule(frame, AppEvent::KeyInput { key, pressed: true });
        self.schedule(frame + 1, AppEvent::KeyInput { key, pressed: false });
    }

    /// Number of frames presented so far
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Commands from the most recently presented frame
    pub fn last_queue(&self) -> &[DrawCommand] {
        &self.last_queue
    }
}

impl Platform for HeadlessPlatform {
    fn poll_events(&mut self, events: &mut Vec<AppEvent>) {
        let current = self.frames_presented;
        while self.script.front().is_some_and(|(frame, _)| *frame <= current) {
            if let Some((_, event)) = self.script.pop_front() {
                events.push(event);
            }
        }

        if let Some(limit) = self.frame_limit {
            if current >= limit {
                events.push(AppEvent::CloseRequested);
            }
        }
    }

    fn present(&mut self, queue: &RenderQueue) -> Result<(), RenderError> {
        self.last_queue = queue.commands().to_vec();
        self.frames_presented += 1;
        Ok(())
    }
}
