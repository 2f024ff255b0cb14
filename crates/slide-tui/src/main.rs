mod animations;
mod app;
mod game;
mod render;
mod scores;
mod theme;

use app::App;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use slide_core::{DEFAULT_SHUFFLE_STEPS, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use theme::Theme;

/// Terminal sliding-tile puzzle
#[derive(Parser)]
#[command(name = "slide", version, about)]
struct Args {
    /// Board size N for an NxN grid
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Number of random shuffle steps (0 starts on a solved board)
    #[arg(long, default_value_t = DEFAULT_SHUFFLE_STEPS)]
    steps: usize,

    /// Fixed shuffle seed, for reproducible boards
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme: dark, light, or high-contrast
    #[arg(short, long, default_value = "dark")]
    theme: String,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if !(MIN_SIZE..=MAX_SIZE).contains(&args.size) {
        eprintln!(
            "Board size must be between {} and {} (got {})",
            MIN_SIZE, MAX_SIZE, args.size
        );
        std::process::exit(2);
    }
    let Some(theme) = Theme::by_name(&args.theme) else {
        eprintln!("Unknown theme '{}'; try dark, light, or high-contrast", args.theme);
        std::process::exit(2);
    };

    let app = App::new(args.size, args.steps, args.seed, theme)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Run the app
    let result = run_app(&mut stdout, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, mut app: App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let tick_rate = app.get_tick_rate();

        render::render(stdout, &mut app)?;
        stdout.flush()?;

        // Poll with a timeout so animations keep ticking without input
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            if let Event::Key(key) = event::read()? {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }

                match app.handle_key(key) {
                    app::AppAction::Continue => {}
                    app::AppAction::Quit => break,
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
