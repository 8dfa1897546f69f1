//! Terminal-backed input and audio for the core.
//!
//! Input model: instead of acting on each key event individually, we keep a
//! `key_frame` map recording the frame of the last press/repeat event for
//! every key. A key counts as held while that frame is recent. This works on
//! keyboard-enhancement terminals (real release events remove the key) and on
//! classic terminals (keys expire after `HOLD_WINDOW` frames of silence,
//! shorter than the OS repeat interval).

use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use beam_shooter::host::{AudioProvider, Button, InputProvider, Sound, VoiceHandle};

/// A key is considered held if its last press/repeat event arrived within
/// this many frames (≈130 ms at 60 FPS).
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn keys_for(button: Button) -> &'static [KeyCode] {
    match button {
        Button::Left => &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
        Button::Right => &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
        Button::Up => &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')],
        Button::Down => &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')],
        Button::Fire => &[KeyCode::Char(' ')],
        Button::Confirm => &[KeyCode::Enter],
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct TerminalInput {
    key_frame: HashMap<KeyCode, u64>,
    /// Buttons held at the end of the previous frame, for edge detection.
    previously_held: HashSet<Button>,
    frame: u64,
    quit: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Drain all pending events (non-blocking) and start a new frame.
    pub fn pump(&mut self, rx: &mpsc::Receiver<Event>) {
        self.previously_held = Button::ALL
            .into_iter()
            .filter(|&b| self.is_pressed(b))
            .collect();
        self.frame += 1;

        while let Ok(event) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            self.quit = true
                        }
                        _ => {}
                    }
                    self.key_frame.insert(code, self.frame);
                }
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat => {
                    self.key_frame.insert(code, self.frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    self.key_frame.remove(&code);
                }
            }
        }
    }
}

impl InputProvider for TerminalInput {
    fn is_pressed(&self, button: Button) -> bool {
        keys_for(button)
            .iter()
            .any(|key| is_held(&self.key_frame, key, self.frame))
    }

    fn is_triggered(&self, button: Button) -> bool {
        self.is_pressed(button) && !self.previously_held.contains(&button)
    }
}

// ── Audio ─────────────────────────────────────────────────────────────────────

/// One-shots ring the terminal bell; loops are only tracked by handle.
#[derive(Default)]
pub struct TerminalAudio {
    next_voice: u32,
    looping: Vec<(VoiceHandle, Sound)>,
    bell: bool,
}

impl TerminalAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a one-shot fired since the last call.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }
}

impl AudioProvider for TerminalAudio {
    fn play_one_shot(&mut self, sound: Sound) {
        log::debug!("sound {:?}", sound);
        self.bell = true;
    }

    fn play_loop(&mut self, sound: Sound) -> VoiceHandle {
        self.next_voice += 1;
        let voice = VoiceHandle(self.next_voice);
        self.looping.push((voice, sound));
        log::debug!("loop {:?} started as {:?}", sound, voice);
        voice
    }

    fn stop(&mut self, voice: VoiceHandle) {
        self.looping.retain(|(v, _)| *v != voice);
        log::debug!("voice {:?} stopped ({} still looping)", voice, self.looping.len());
    }
}
