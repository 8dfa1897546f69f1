mod display;
mod terminal;

use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal as term,
    ExecutableCommand,
};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;

use beam_shooter::{Game, GameConfig, Result, Tuning};

use display::TerminalCanvas;
use terminal::{TerminalAudio, TerminalInput};

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw mode on the alternate screen, so log lines go to a
/// file instead of stderr. Filter comes from `RUST_LOG` (default `warn`).
fn init_logging() {
    let path = std::env::temp_dir().join("beam_shooter.log");
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match std::fs::File::create(&path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(LevelFilter::Off);
        }
    }
    if let Err(e) = builder.try_init() {
        eprintln!("beam_shooter: logging disabled: {}", e);
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
    tuning: Tuning,
) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(tuning);
    let mut input = TerminalInput::new();
    let mut audio = TerminalAudio::new();

    loop {
        let frame_start = Instant::now();

        input.pump(rx);
        if input.quit_requested() {
            log::info!("quit requested (best score {})", game.best_score());
            return Ok(());
        }

        game.update(&input, &mut audio, &mut rng);

        let (width, height) = term::size()?;
        let mut canvas = TerminalCanvas::new(width, height, game.tuning().field);
        game.draw(&mut canvas);
        canvas.present(out, audio.take_bell())?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging();

    let config = match std::env::args_os().nth(1) {
        Some(path) => GameConfig::load(Path::new(&path))?,
        None => GameConfig::default(),
    };
    // Validated before raw mode so a bad file is reported on a normal screen.
    let tuning = config.tuning()?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    term::enable_raw_mode()?;
    out.execute(term::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, &config, tuning);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(term::LeaveAlternateScreen);
    let _ = term::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("{}", e);
    }
    result
}
