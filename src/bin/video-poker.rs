use anyhow::Context;
use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use video_poker::cli::Cli;
use video_poker::game::{Game, SessionStatus, Summary};
use video_poker::logging::{self, LogSink};
use video_poker::text::run_plain;
use video_poker::tui::{app::AppState, controller};

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_tui(game: Game) -> anyhow::Result<(Summary, SessionStatus)> {
    let mut terminal = setup_terminal().context("failed to set up the terminal")?;
    let mut app = AppState::new(game);

    let res = controller::run(&mut terminal, &mut app);

    // Always attempt to restore terminal
    restore_terminal(terminal).context("failed to restore the terminal")?;
    res?;
    Ok((app.game.summary(), app.game.status()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let plain = cli.plain || !io::stdout().is_terminal();
    logging::init(&LogSink::choose(cli.log_file.as_deref(), plain), cli.log_level)
        .context("failed to initialize logging")?;

    let config = cli.session_config();
    config.validate().context("invalid session settings")?;
    let mut game = match cli.seed {
        Some(seed) => Game::seeded(config, seed),
        None => Game::new(config),
    };
    log::info!("video-poker {} starting {}", video_poker::VERSION, config.variant);

    if plain {
        let stdin = io::stdin();
        let summary = run_plain(&mut game, stdin.lock(), io::stdout())?;
        log::info!("session over: {summary}");
        if !game.status().is_terminal() {
            println!("{}", summary.quit_message());
            println!("{}", summary.range_message());
        }
        return Ok(());
    }

    let (summary, status) = run_tui(game)?;
    log::info!("session over: {summary}");
    match status {
        SessionStatus::Bankrupt => println!("{}", summary.bankrupt_message()),
        _ => println!("{}", summary.quit_message()),
    }
    println!("{}", summary.range_message());
    Ok(())
}
