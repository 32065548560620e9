// Game engine API boundary. Front ends (TUI, plain line mode, tests) drive the
// game through `VideoPokerEngine` and render the returned events, without
// reaching into `Game` internals.

use crate::events::Event;
use crate::game::{Phase, SessionStatus, Summary};
use crate::hand::{Hand, HoldSet};
use crate::paytable::Paytable;
use crate::variant::Variant;

/// Every player intent the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Command {
    DealOrDraw,
    /// Slot 0..5.
    ToggleHold(usize),
    /// Multiplier digit 1..=5.
    SetBet(u8),
    ChangeVariant(Variant),
    Quit,
}

pub trait VideoPokerEngine {
    // Transitions
    fn start(&self) -> Vec<Event>;
    fn deal_or_draw(&mut self) -> Vec<Event>;
    fn toggle_hold(&mut self, position: usize) -> Vec<Event>;
    fn set_bet(&mut self, digit: u8) -> Vec<Event>;
    fn change_variant(&mut self, variant: Variant) -> Vec<Event>;
    fn quit(&mut self) -> Vec<Event>;

    fn dispatch(&mut self, command: Command) -> Vec<Event> {
        match command {
            Command::DealOrDraw => self.deal_or_draw(),
            Command::ToggleHold(position) => self.toggle_hold(position),
            Command::SetBet(digit) => self.set_bet(digit),
            Command::ChangeVariant(variant) => self.change_variant(variant),
            Command::Quit => self.quit(),
        }
    }

    // Queries
    fn bankroll(&self) -> u64;
    fn bet(&self) -> u64;
    fn phase(&self) -> Phase;
    fn status(&self) -> SessionStatus;
    fn variant(&self) -> Variant;
    fn paytable(&self) -> &Paytable;
    fn hand(&self) -> Option<&Hand>;
    fn holds(&self) -> HoldSet;
    fn summary(&self) -> Summary;
}

impl VideoPokerEngine for crate::game::Game {
    fn start(&self) -> Vec<Event> {
        self.start()
    }
    fn deal_or_draw(&mut self) -> Vec<Event> {
        self.deal_or_draw()
    }
    fn toggle_hold(&mut self, position: usize) -> Vec<Event> {
        self.toggle_hold(position)
    }
    fn set_bet(&mut self, digit: u8) -> Vec<Event> {
        self.set_bet(digit)
    }
    fn change_variant(&mut self, variant: Variant) -> Vec<Event> {
        self.change_variant(variant)
    }
    fn quit(&mut self) -> Vec<Event> {
        self.quit()
    }

    fn bankroll(&self) -> u64 {
        self.bankroll()
    }
    fn bet(&self) -> u64 {
        self.bet()
    }
    fn phase(&self) -> Phase {
        self.phase()
    }
    fn status(&self) -> SessionStatus {
        self.status()
    }
    fn variant(&self) -> Variant {
        self.variant()
    }
    fn paytable(&self) -> &Paytable {
        self.paytable()
    }
    fn hand(&self) -> Option<&Hand> {
        self.hand()
    }
    fn holds(&self) -> HoldSet {
        self.holds()
    }
    fn summary(&self) -> Summary {
        self.summary()
    }
}
