//! Terminal front end: a ratatui board where Santa answers after a short pause.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{digit_position, move_cursor};

use crate::GameConfig;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use santa_tictactoe::{Game, SantaTicket};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the interactive game until the user quits.
pub async fn run(config: GameConfig) -> Result<()> {
    info!("Starting Santa tic-tac-toe");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &GameConfig,
) -> Result<()> {
    let mut app = App::new(Game::with_opponent(config.santa()));
    let mut delay_rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_os_rng(),
    };
    let (ticket_tx, mut ticket_rx) = mpsc::unbounded_channel::<SantaTicket>();

    loop {
        if let Some(ticket) = app.take_santa_ticket() {
            let delay = config.think_delay(&mut delay_rng);
            debug!(?ticket, ?delay, "Santa is thinking");
            let tx = ticket_tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                // The receiver is gone once the loop exits.
                let _ = tx.send(ticket);
            });
        }

        while let Ok(ticket) = ticket_rx.try_recv() {
            app.santa_ready(ticket);
        }

        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit() {
            info!("Leaving game");
            return Ok(());
        }

        tokio::task::yield_now().await;
    }
}
