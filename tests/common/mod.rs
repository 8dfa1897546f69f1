//! Test doubles for the host capabilities.
#![allow(dead_code)]

use std::collections::HashSet;

use beam_shooter::entities::Transform;
use beam_shooter::host::{AudioProvider, Button, DrawSink, InputProvider, Sound, Visual, VoiceHandle};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Buttons held and triggered are set explicitly per frame.
#[derive(Default)]
pub struct ScriptedInput {
    pub held: HashSet<Button>,
    pub triggered: HashSet<Button>,
}

impl ScriptedInput {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Pressed this frame for the first time.
    pub fn tap(button: Button) -> Self {
        let mut input = Self::default();
        input.held.insert(button);
        input.triggered.insert(button);
        input
    }

    /// Held down, not newly pressed.
    pub fn hold(button: Button) -> Self {
        let mut input = Self::default();
        input.held.insert(button);
        input
    }
}

impl InputProvider for ScriptedInput {
    fn is_pressed(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    fn is_triggered(&self, button: Button) -> bool {
        self.triggered.contains(&button)
    }
}

// ── Audio ─────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingAudio {
    pub one_shots: Vec<Sound>,
    pub loops: Vec<(VoiceHandle, Sound)>,
    pub stopped: Vec<VoiceHandle>,
    next: u32,
}

impl RecordingAudio {
    pub fn count(&self, sound: Sound) -> usize {
        self.one_shots.iter().filter(|&&s| s == sound).count()
    }

    /// Loops started and not yet stopped.
    pub fn playing(&self) -> Vec<Sound> {
        self.loops
            .iter()
            .filter(|(v, _)| !self.stopped.contains(v))
            .map(|&(_, s)| s)
            .collect()
    }
}

impl AudioProvider for RecordingAudio {
    fn play_one_shot(&mut self, sound: Sound) {
        self.one_shots.push(sound);
    }

    fn play_loop(&mut self, sound: Sound) -> VoiceHandle {
        self.next += 1;
        let voice = VoiceHandle(self.next);
        self.loops.push((voice, sound));
        voice
    }

    fn stop(&mut self, voice: VoiceHandle) {
        self.stopped.push(voice);
    }
}

// ── Drawing ───────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingDraw {
    pub models: Vec<(Transform, Visual)>,
    pub sprites: Vec<(Visual, Vec2)>,
}

impl RecordingDraw {
    pub fn models_of(&self, visual: Visual) -> usize {
        self.models.iter().filter(|(_, v)| *v == visual).count()
    }

    pub fn sprites_of(&self, visual: Visual) -> usize {
        self.sprites.iter().filter(|(v, _)| *v == visual).count()
    }

    pub fn digits(&self) -> Vec<u8> {
        self.sprites
            .iter()
            .filter_map(|(v, _)| match v {
                Visual::Digit(d) => Some(*d),
                _ => None,
            })
            .collect()
    }
}

impl DrawSink for RecordingDraw {
    fn draw_model(&mut self, transform: &Transform, visual: Visual) {
        self.models.push((*transform, visual));
    }

    fn draw_sprite(&mut self, visual: Visual, position: Vec2) {
        self.sprites.push((visual, position));
    }
}
