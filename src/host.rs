//! Capabilities the host engine provides to the simulation core.
//!
//! The core never reaches for a global device: input, audio and draw
//! submission are handed to it explicitly on every call.

use glam::Vec2;

use crate::entities::Transform;

/// Logical screen size used for 2D sprite coordinates.
pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

// ── Input ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Up,
    Down,
    Fire,
    Confirm,
}

impl Button {
    pub const ALL: [Button; 6] = [
        Button::Left,
        Button::Right,
        Button::Up,
        Button::Down,
        Button::Fire,
        Button::Confirm,
    ];
}

/// Polled once per frame at the start of update.
pub trait InputProvider {
    fn is_pressed(&self, button: Button) -> bool;

    /// True only on the frame `button` goes from released to pressed.
    fn is_triggered(&self, button: Button) -> bool;

    /// Movement stick. `x` is lateral, `y` is depth (positive = away from camera).
    fn axis(&self) -> Vec2 {
        let lateral = self.is_pressed(Button::Right) as i32 - self.is_pressed(Button::Left) as i32;
        let depth = self.is_pressed(Button::Up) as i32 - self.is_pressed(Button::Down) as i32;
        Vec2::new(lateral as f32, depth as f32)
    }
}

// ── Audio ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    TitleBgm,
    GamePlayBgm,
    GameClearBgm,
    GameOverBgm,
    EnemyHit,
    PlayerHit,
}

/// Handle to a playing loop, returned by [`AudioProvider::play_loop`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VoiceHandle(pub u32);

/// Fire-and-forget audio. The core never waits on playback.
pub trait AudioProvider {
    fn play_one_shot(&mut self, sound: Sound);
    fn play_loop(&mut self, sound: Sound) -> VoiceHandle;
    fn stop(&mut self, voice: VoiceHandle);
}

// ── Drawing ───────────────────────────────────────────────────────────────────

/// Visual asset handles the core asks the host to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visual {
    Background,
    Stage,
    Player,
    Beam,
    Enemy,
    Title,
    EnterPrompt,
    GameClear,
    GameOver,
    ScoreLabel,
    /// A single decimal digit, 0..=9.
    Digit(u8),
    Life,
}

/// Stateless draw requests issued after update has completed.
pub trait DrawSink {
    fn draw_model(&mut self, transform: &Transform, visual: Visual);

    /// `position` is the top-left corner in screen pixels
    /// (`SCREEN_WIDTH` x `SCREEN_HEIGHT`).
    fn draw_sprite(&mut self, visual: Visual, position: Vec2);
}
