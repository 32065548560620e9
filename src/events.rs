//! Event outlet: what a transition asks the front end to show.
//!
//! Transitions never touch a screen. They return a list of [`Event`]s and a
//! [`Presenter`] replays that list onto whatever surface it owns.

use crate::cards::Card;
use crate::game::Phase;
use crate::hand::HAND_SIZE;

/// Shown while waiting for a deal.
pub const MSG_DEAL: &str = "To continue, deal a new hand";
/// Shown while holds can be chosen.
pub const MSG_DRAW: &str = "Choose the cards to hold, then draw";

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Event {
    Hand { cards: [Card; HAND_SIZE], held: [bool; HAND_SIZE] },
    Message(String),
    HandName(String),
    Score(u64),
    ButtonLabel(Phase),
    GameName(String),
}

/// Label for the deal/draw button in a given phase.
pub const fn button_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Deal => "Deal New Hand",
        Phase::Draw => "Draw Cards",
    }
}

/// Consumer of transition events.
///
/// Implement the `render_*` methods; [`Presenter::present`] dispatches a whole
/// batch in order.
pub trait Presenter {
    fn render_hand(&mut self, cards: &[Card; HAND_SIZE], held: &[bool; HAND_SIZE]);
    fn render_message(&mut self, text: &str);
    fn render_hand_name(&mut self, text: &str);
    fn render_score(&mut self, score: u64);
    fn render_button_label(&mut self, phase: Phase);
    fn render_game_name(&mut self, text: &str);

    fn present(&mut self, events: &[Event]) {
        for event in events {
            match event {
                Event::Hand { cards, held } => self.render_hand(cards, held),
                Event::Message(text) => self.render_message(text),
                Event::HandName(text) => self.render_hand_name(text),
                Event::Score(score) => self.render_score(*score),
                Event::ButtonLabel(phase) => self.render_button_label(*phase),
                Event::GameName(text) => self.render_game_name(text),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Presenter for Recorder {
        fn render_hand(&mut self, cards: &[Card; HAND_SIZE], held: &[bool; HAND_SIZE]) {
            let n = held.iter().filter(|&&h| h).count();
            self.0.push(format!("hand {} held {n}", cards[0]));
        }
        fn render_message(&mut self, text: &str) {
            self.0.push(format!("msg {text}"));
        }
        fn render_hand_name(&mut self, text: &str) {
            self.0.push(format!("name {text}"));
        }
        fn render_score(&mut self, score: u64) {
            self.0.push(format!("score {score}"));
        }
        fn render_button_label(&mut self, phase: Phase) {
            self.0.push(format!("button {}", button_label(phase)));
        }
        fn render_game_name(&mut self, text: &str) {
            self.0.push(format!("game {text}"));
        }
    }

    #[test]
    fn present_dispatches_in_order() {
        let mut r = Recorder::default();
        r.present(&[
            Event::GameName("Jacks or Better".into()),
            Event::Score(990),
            Event::ButtonLabel(Phase::Draw),
            Event::Message(MSG_DRAW.into()),
        ]);
        assert_eq!(
            r.0,
            vec![
                "game Jacks or Better".to_string(),
                "score 990".to_string(),
                "button Draw Cards".to_string(),
                format!("msg {MSG_DRAW}"),
            ]
        );
    }
}
