//! Top-level scene state machine.
//!
//! ```text
//! Title ──confirm──▶ GamePlay ──life 0──▶ GameOver ──confirm (after delay)──▶ Title
//!                       └──clear score──▶ GameClear ──confirm (after delay)──▶ Title
//! ```
//!
//! Each scene owns its update and draw path and a looping background track.

use glam::Vec2;
use rand::Rng;

use crate::compute::{self, FrameOutcome};
use crate::config::Tuning;
use crate::entities::{GameWorld, SceneMode};
use crate::host::{AudioProvider, Button, DrawSink, InputProvider, Sound, Visual, VoiceHandle};

// ── HUD layout (screen pixels) ────────────────────────────────────────────────

const SCORE_LABEL_POS: Vec2 = Vec2::new(40.0, 20.0);
const SCORE_DIGITS_POS: Vec2 = Vec2::new(170.0, 20.0);
const BEST_DIGITS_POS: Vec2 = Vec2::new(560.0, 440.0);
const RESULT_SCORE_POS: Vec2 = Vec2::new(560.0, 380.0);
const DIGIT_ADVANCE: f32 = 32.0;
const SCORE_DIGITS: usize = 5;
const LIFE_POS: Vec2 = Vec2::new(900.0, 20.0);
const LIFE_ADVANCE: f32 = 60.0;
const ENTER_PROMPT_POS: Vec2 = Vec2::new(400.0, 500.0);

/// Prompt blink: visible for the second half of every period.
const PROMPT_BLINK_PERIOD: u32 = 40;

pub struct Game {
    mode: SceneMode,
    tuning: Tuning,
    world: GameWorld,
    /// Frames spent in the current scene.
    scene_frames: u32,
    bgm: Option<VoiceHandle>,
    best_score: u32,
}

impl Game {
    pub fn new(tuning: Tuning) -> Self {
        let world = compute::init_world(&tuning);
        Self {
            mode: SceneMode::Title,
            tuning,
            world,
            scene_frames: 0,
            bgm: None,
            best_score: 0,
        }
    }

    pub fn mode(&self) -> SceneMode {
        self.mode
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    pub fn scene_frames(&self) -> u32 {
        self.scene_frames
    }

    /// Best score reached in this process.
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    // ── Update ───────────────────────────────────────────────────────────────

    /// Run one frame of whichever scene is current.
    pub fn update(
        &mut self,
        input: &impl InputProvider,
        audio: &mut impl AudioProvider,
        rng: &mut impl Rng,
    ) {
        if self.bgm.is_none() {
            self.bgm = Some(audio.play_loop(bgm_for(self.mode)));
        }

        match self.mode {
            SceneMode::Title => self.title_update(input, audio),
            SceneMode::GamePlay => self.gameplay_update(input, audio, rng),
            SceneMode::GameClear | SceneMode::GameOver => self.result_update(input, audio),
        }
    }

    fn title_update(&mut self, input: &impl InputProvider, audio: &mut impl AudioProvider) {
        self.scene_frames = self.scene_frames.saturating_add(1);
        if input.is_triggered(Button::Confirm) {
            self.world = compute::init_world(&self.tuning);
            self.enter(SceneMode::GamePlay, audio);
        }
    }

    fn gameplay_update(
        &mut self,
        input: &impl InputProvider,
        audio: &mut impl AudioProvider,
        rng: &mut impl Rng,
    ) {
        self.scene_frames = self.scene_frames.saturating_add(1);
        let (outcome, _) = compute::gameplay_tick(&mut self.world, &self.tuning, input, audio, rng);
        match outcome {
            FrameOutcome::Continue => {}
            FrameOutcome::Depleted => self.finish_round(SceneMode::GameOver, audio),
            FrameOutcome::Cleared => self.finish_round(SceneMode::GameClear, audio),
        }
    }

    fn result_update(&mut self, input: &impl InputProvider, audio: &mut impl AudioProvider) {
        self.scene_frames = self.scene_frames.saturating_add(1);
        if self.scene_frames > self.tuning.result_delay && input.is_triggered(Button::Confirm) {
            self.enter(SceneMode::Title, audio);
        }
    }

    fn finish_round(&mut self, mode: SceneMode, audio: &mut impl AudioProvider) {
        self.best_score = self.best_score.max(self.world.ledger.score);
        self.enter(mode, audio);
    }

    fn enter(&mut self, mode: SceneMode, audio: &mut impl AudioProvider) {
        log::info!(
            "scene {:?} -> {:?} (score {}, life {})",
            self.mode,
            mode,
            self.world.ledger.score,
            self.world.ledger.life
        );
        if let Some(voice) = self.bgm.take() {
            audio.stop(voice);
        }
        self.mode = mode;
        self.scene_frames = 0;
        self.bgm = Some(audio.play_loop(bgm_for(mode)));
    }

    // ── Draw ─────────────────────────────────────────────────────────────────

    /// Issue draw requests for the current scene. Never mutates state.
    pub fn draw(&self, sink: &mut impl DrawSink) {
        sink.draw_sprite(Visual::Background, Vec2::ZERO);
        match self.mode {
            SceneMode::Title => self.title_draw(sink),
            SceneMode::GamePlay => self.gameplay_draw(sink),
            SceneMode::GameClear => self.result_draw(sink, Visual::GameClear),
            SceneMode::GameOver => self.result_draw(sink, Visual::GameOver),
        }
    }

    fn title_draw(&self, sink: &mut impl DrawSink) {
        sink.draw_sprite(Visual::Title, Vec2::ZERO);
        if self.scene_frames % PROMPT_BLINK_PERIOD >= PROMPT_BLINK_PERIOD / 2 {
            sink.draw_sprite(Visual::EnterPrompt, ENTER_PROMPT_POS);
        }
    }

    fn gameplay_draw(&self, sink: &mut impl DrawSink) {
        let world = &self.world;

        for segment in world.stage.segments() {
            sink.draw_model(&segment, Visual::Stage);
        }
        // Blink while invulnerable: hidden two frames out of every four.
        if world.ledger.player_timer % 4 < 2 {
            sink.draw_model(&world.player.transform, Visual::Player);
        }
        for (_, shot) in world.projectiles.iter() {
            sink.draw_model(&shot.transform, Visual::Beam);
        }
        for (_, enemy) in world.enemies.iter() {
            sink.draw_model(&enemy.transform, Visual::Enemy);
        }

        sink.draw_sprite(Visual::ScoreLabel, SCORE_LABEL_POS);
        draw_number(sink, world.ledger.score, SCORE_DIGITS_POS);
        for i in 0..world.ledger.life {
            sink.draw_sprite(Visual::Life, LIFE_POS + Vec2::new(i as f32 * LIFE_ADVANCE, 0.0));
        }
    }

    fn result_draw(&self, sink: &mut impl DrawSink, banner: Visual) {
        sink.draw_sprite(banner, Vec2::ZERO);
        draw_number(sink, self.world.ledger.score, RESULT_SCORE_POS);
        draw_number(sink, self.best_score, BEST_DIGITS_POS);
        if self.scene_frames > self.tuning.result_delay {
            sink.draw_sprite(Visual::EnterPrompt, ENTER_PROMPT_POS);
        }
    }
}

fn bgm_for(mode: SceneMode) -> Sound {
    match mode {
        SceneMode::Title => Sound::TitleBgm,
        SceneMode::GamePlay => Sound::GamePlayBgm,
        SceneMode::GameClear => Sound::GameClearBgm,
        SceneMode::GameOver => Sound::GameOverBgm,
    }
}

/// Fixed-width decimal readout, most significant digit first.
pub fn score_digits(value: u32) -> [u8; SCORE_DIGITS] {
    let mut rest = value.min(10u32.pow(SCORE_DIGITS as u32) - 1);
    let mut digits = [0u8; SCORE_DIGITS];
    for slot in digits.iter_mut().rev() {
        *slot = (rest % 10) as u8;
        rest /= 10;
    }
    digits
}

fn draw_number(sink: &mut impl DrawSink, value: u32, origin: Vec2) {
    for (i, digit) in score_digits(value).into_iter().enumerate() {
        let pos = origin + Vec2::new(i as f32 * DIGIT_ADVANCE, 0.0);
        sink.draw_sprite(Visual::Digit(digit), pos);
    }
}
