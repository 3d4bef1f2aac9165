use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use torus_snake::config::{Settings, PAUSE_POLL_INTERVAL_MS, THEME_CLASSIC};
use torus_snake::game::GameState;
use torus_snake::input::{GameInput, InputHandler};
use torus_snake::renderer;
use torus_snake::terminal_runtime::TerminalSession;

#[derive(Debug, Parser)]
#[command(version, about = "Wrap-around terminal snake")]
struct Cli {
    /// Seed the RNG for a reproducible food sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the initial speed from the settings file.
    #[arg(long)]
    speed: Option<u32>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Surface settings problems before the alternate screen swallows them.
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("warning: {error}; using defaults");
            Settings::default()
        }
    };

    let bounds = settings.grid();
    let speed = cli.speed.unwrap_or(settings.initial_speed);
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(bounds, speed, seed),
        None => GameState::new(bounds, speed),
    };

    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut last_tick = Instant::now();

    'game: loop {
        let render = state.render_state();
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &render, bounds, &THEME_CLASSIC))?;

        // While paused, fall back to a slow fixed poll so unpause and quit
        // stay responsive; otherwise sleep out the rest of the tick period.
        let poll_timeout = if state.is_paused() {
            Duration::from_millis(PAUSE_POLL_INTERVAL_MS)
        } else {
            state.tick_interval().saturating_sub(last_tick.elapsed())
        };

        for event in input.poll_inputs(poll_timeout)? {
            if event == GameInput::Quit {
                break 'game;
            }
            state.apply_input(event);
        }

        if last_tick.elapsed() >= state.tick_interval() {
            state.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
