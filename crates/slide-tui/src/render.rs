use crate::app::{App, ScreenState};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Print, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use slide_core::{Position, BLANK};
use std::io::{self, Write};

pub fn render(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide)?;

    match app.screen_state {
        ScreenState::Playing => {
            execute!(stdout, Clear(ClearType::All))?;
            render_game_screen(stdout, app, term_width, term_height)?;
        }
        ScreenState::Win => {
            // No clear: the confetti pass repaints the whole area anyway
            render_win_screen(stdout, app, term_width, term_height)?;
        }
        ScreenState::Scores => {
            execute!(stdout, Clear(ClearType::All))?;
            render_scores_screen(stdout, app, term_width, term_height)?;
        }
    }

    execute!(stdout, Show)?;
    Ok(())
}

/// Width of one tile cell's interior in characters
fn cell_width(app: &App) -> usize {
    let size = app.game.size();
    (size * size - 1).to_string().len() + 2
}

/// Total width/height of the drawn board in characters
fn board_extent(app: &App) -> (u16, u16) {
    let size = app.game.size() as u16;
    let cell = cell_width(app) as u16;
    (size * (cell + 1) + 1, size * 2 + 1)
}

fn board_origin(app: &App, term_width: u16, term_height: u16) -> (u16, u16) {
    let (grid_width, grid_height) = board_extent(app);
    let x = term_width.saturating_sub(grid_width) / 2;
    // Title row above, status + help + message below
    let y = term_height.saturating_sub(grid_height + 5) / 2 + 1;
    (x.max(1), y.max(1))
}

fn render_game_screen(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let (start_x, start_y) = board_origin(app, term_width, term_height);
    let (grid_width, grid_height) = board_extent(app);

    let title = format!("Slide Puzzle {0}x{0}", app.game.size());
    let title_x = start_x + grid_width.saturating_sub(title.len() as u16) / 2;
    queue!(
        stdout,
        MoveTo(title_x, start_y.saturating_sub(1)),
        SetForegroundColor(app.theme.fg),
        Print(&title)
    )?;

    render_board(stdout, app, start_x, start_y)?;

    let status_y = start_y + grid_height + 1;
    render_status(stdout, app, start_x, status_y)?;
    render_help(
        stdout,
        app,
        start_x,
        status_y + 1,
        "←↑↓→ slide  n new  s scores  t theme  q quit",
    )?;

    if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, term_width, status_y + 3)?;
    }

    stdout.flush()
}

fn render_board(stdout: &mut io::Stdout, app: &App, start_x: u16, start_y: u16) -> io::Result<()> {
    let board = app.game.board();
    let size = app.game.size();
    let cell = cell_width(app);

    for row in 0..size {
        let y = start_y + (row as u16) * 2;
        render_rule(stdout, app, start_x, y, size, cell, row)?;

        let tile_y = y + 1;
        queue!(
            stdout,
            MoveTo(start_x, tile_y),
            SetForegroundColor(app.theme.border),
            Print("│")
        )?;
        for col in 0..size {
            let pos = Position::new(row, col);
            let value = board.value(pos).unwrap_or(BLANK);
            if value == BLANK {
                queue!(
                    stdout,
                    SetForegroundColor(app.theme.blank),
                    Print(format!("{:^cell$}", "·"))
                )?;
            } else {
                let color = if board.is_home(pos) {
                    app.theme.tile_home
                } else {
                    app.theme.tile
                };
                queue!(
                    stdout,
                    SetForegroundColor(color),
                    Print(format!("{:^cell$}", value))
                )?;
            }
            queue!(
                stdout,
                SetForegroundColor(app.theme.border),
                Print("│")
            )?;
        }
    }

    // Bottom rule
    let y = start_y + (size as u16) * 2;
    render_rule(stdout, app, start_x, y, size, cell, size)
}

/// One horizontal border line; `row` 0 is the top edge, `row == size` the
/// bottom edge
fn render_rule(
    stdout: &mut io::Stdout,
    app: &App,
    x: u16,
    y: u16,
    size: usize,
    cell: usize,
    row: usize,
) -> io::Result<()> {
    let (left, mid, right) = if row == 0 {
        ('┌', '┬', '┐')
    } else if row == size {
        ('└', '┴', '┘')
    } else {
        ('├', '┼', '┤')
    };

    let mut line = String::with_capacity(size * (cell + 1) + 1);
    line.push(left);
    for col in 0..size {
        for _ in 0..cell {
            line.push('─');
        }
        line.push(if col + 1 == size { right } else { mid });
    }

    queue!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(app.theme.border),
        Print(line)
    )
}

fn render_status(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let best = match app.scores.best(app.game.size()) {
        Some(best) => format!(
            "best {} moves / {:02}:{:02}",
            best.moves,
            best.time_secs / 60,
            best.time_secs % 60
        ),
        None => "no best yet".to_string(),
    };
    queue!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(app.theme.info),
        Print(format!(
            "Moves: {}   Time: {}   {}",
            app.game.moves(),
            app.game.format_time(),
            best
        ))
    )
}

fn render_help(
    stdout: &mut io::Stdout,
    app: &App,
    x: u16,
    y: u16,
    text: &str,
) -> io::Result<()> {
    queue!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(app.theme.key),
        Print(text)
    )
}

fn render_message(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    term_width: u16,
    y: u16,
) -> io::Result<()> {
    let x = term_width.saturating_sub(msg.len() as u16) / 2;
    queue!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(app.theme.success),
        Print(msg)
    )
}

fn render_win_screen(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    execute!(stdout, Clear(ClearType::All))?;

    // Solved board stays visible under the celebration
    let (start_x, start_y) = board_origin(app, term_width, term_height);
    render_board(stdout, app, start_x, start_y)?;

    for particle in app.win_screen.particles() {
        let x = particle.x as u16;
        let y = particle.y as u16;
        if x < term_width && y < term_height {
            queue!(
                stdout,
                MoveTo(x, y),
                SetForegroundColor(particle.color),
                Print(particle.glyph)
            )?;
        }
    }

    let banner = format!(
        "Solved in {} moves ({}){}",
        app.game.moves(),
        app.game.format_time(),
        if app.new_best { "  NEW BEST!" } else { "" }
    );
    let banner_x = term_width.saturating_sub(banner.len() as u16) / 2;
    let (_, grid_height) = board_extent(app);
    let banner_y = (start_y + grid_height + 1).min(term_height.saturating_sub(2));
    queue!(
        stdout,
        MoveTo(banner_x, banner_y),
        SetForegroundColor(app.theme.success),
        Print(&banner)
    )?;

    render_help(
        stdout,
        app,
        banner_x,
        banner_y + 1,
        "n new game  s scores  q quit",
    )?;
    stdout.flush()
}

fn render_scores_screen(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    _term_height: u16,
) -> io::Result<()> {
    let entries = app.scores.all();
    let title = "Best Scores";
    let x = term_width.saturating_sub(30) / 2;

    queue!(
        stdout,
        MoveTo(x, 2),
        SetForegroundColor(app.theme.fg),
        Print(title)
    )?;

    if entries.is_empty() {
        queue!(
            stdout,
            MoveTo(x, 4),
            SetForegroundColor(app.theme.info),
            Print("No solved puzzles yet.")
        )?;
    } else {
        for (i, (size, best)) in entries.iter().enumerate() {
            queue!(
                stdout,
                MoveTo(x, 4 + i as u16),
                SetForegroundColor(app.theme.info),
                Print(format!(
                    "{0}x{0}: {1} moves in {2:02}:{3:02}",
                    size,
                    best.moves,
                    best.time_secs / 60,
                    best.time_secs % 60
                ))
            )?;
        }
    }

    render_help(
        stdout,
        app,
        x,
        6 + entries.len() as u16,
        "esc back  n new game  q quit",
    )?;
    stdout.flush()
}
