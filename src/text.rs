//! Line-oriented front end for pipes, scripts and dumb terminals.

use crate::cards::Card;
use crate::engine::{Command, VideoPokerEngine};
use crate::events::{button_label, Presenter};
use crate::game::{Phase, Summary};
use crate::hand::HAND_SIZE;
use crate::keymap::command_for_key;
use std::io::{self, BufRead, Write};

/// Writes events as plain text lines.
///
/// `Presenter` methods cannot fail, so the first write error is kept and
/// reported by [`TextPresenter::check`].
pub struct TextPresenter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Return (and clear) the first write error since the last check.
    pub fn check(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => self.out.flush(),
        }
    }

    fn line(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{text}") {
            self.error = Some(err);
        }
    }
}

/// Cards on one line, and a `+` under each held card on the next.
fn hand_lines(cards: &[Card; HAND_SIZE], held: &[bool; HAND_SIZE]) -> (String, String) {
    let cards_line = cards.iter().map(|c| format!("{c} ")).collect::<String>();
    let marks_line =
        held.iter().map(|&h| if h { "+  " } else { "   " }).collect::<String>();
    (cards_line.trim_end().to_string(), marks_line.trim_end().to_string())
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn render_hand(&mut self, cards: &[Card; HAND_SIZE], held: &[bool; HAND_SIZE]) {
        let (cards_line, marks_line) = hand_lines(cards, held);
        self.line(&cards_line);
        self.line(&marks_line);
    }

    fn render_message(&mut self, text: &str) {
        self.line(text);
    }

    fn render_hand_name(&mut self, text: &str) {
        if !text.is_empty() {
            self.line(&format!("Hand: {text}"));
        }
    }

    fn render_score(&mut self, score: u64) {
        self.line(&format!("Bankroll: {score}"));
    }

    fn render_button_label(&mut self, phase: Phase) {
        self.line(&format!("[Enter] {}", button_label(phase)));
    }

    fn render_game_name(&mut self, text: &str) {
        self.line(&format!("=== {text} ==="));
    }
}

/// Drive `game` from `reader` until EOF or the session ends.
///
/// Each character of a line is mapped through the key bindings; an empty line
/// counts as Enter.
///
/// ```
/// use video_poker::config::SessionConfig;
/// use video_poker::game::Game;
/// use video_poker::text::run_plain;
///
/// let mut game = Game::seeded(SessionConfig::default(), 3);
/// let mut out = Vec::new();
/// let summary = run_plain(&mut game, "\nq\n".as_bytes(), &mut out).unwrap();
/// assert_eq!(summary.bankroll, 990);
/// assert!(String::from_utf8(out).unwrap().contains("You quit with 990 chips"));
/// ```
pub fn run_plain<E, R, W>(game: &mut E, reader: R, writer: W) -> io::Result<Summary>
where
    E: VideoPokerEngine + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut presenter = TextPresenter::new(writer);
    presenter.present(&game.start());
    presenter.check()?;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        let commands: Vec<Command> = if line.is_empty() {
            vec![Command::DealOrDraw]
        } else {
            line.chars().filter_map(command_for_key).collect()
        };
        for command in commands {
            log::debug!("plain input -> {command:?}");
            presenter.present(&game.dispatch(command));
            presenter.check()?;
            if game.status().is_terminal() {
                return Ok(game.summary());
            }
        }
    }
    Ok(game.summary())
}
