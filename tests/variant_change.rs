use video_poker::config::SessionConfig;
use video_poker::engine::{Command, VideoPokerEngine};
use video_poker::evaluator::Category;
use video_poker::events::Event;
use video_poker::game::{Game, Phase, SessionStatus};
use video_poker::variant::Variant;

fn played(hands: usize) -> Game {
    let mut game = Game::seeded(SessionConfig::default(), 31);
    game.dispatch(Command::SetBet(2));
    for _ in 0..hands {
        game.dispatch(Command::DealOrDraw);
        game.dispatch(Command::DealOrDraw);
    }
    game
}

#[test]
fn change_resets_session_and_deals() {
    for variant in Variant::ALL {
        let mut game = played(7);
        let events = game.dispatch(Command::ChangeVariant(variant));
        assert!(!events.is_empty());
        assert_eq!(game.variant(), variant);
        assert_eq!(game.paytable().variant(), variant);
        assert_eq!(game.hands_played(), 0);
        assert_eq!(game.multiplier(), 1);
        // the automatic opening deal debits one unit
        assert_eq!(game.bankroll(), 990);
        assert_eq!(game.session().range(), (1000, 1000));
        assert_eq!(game.phase(), Phase::Draw);
        assert!(game.history().is_empty());
        assert_eq!(game.status(), SessionStatus::Active);
    }
}

#[test]
fn change_reports_old_session_then_new_name() {
    let mut game = played(2);
    let summary = game.summary();
    let events = game.dispatch(Command::ChangeVariant(Variant::DoubleBonus));
    assert_eq!(events[0], Event::Message(summary.quit_message()));
    assert_eq!(events[1], Event::Message(summary.range_message()));
    assert_eq!(events[2], Event::GameName("Double Bonus".to_string()));
    assert!(events.contains(&Event::ButtonLabel(Phase::Draw)));
}

#[test]
fn change_mid_hand_abandons_it() {
    let mut game = Game::seeded(SessionConfig::default(), 5);
    game.dispatch(Command::DealOrDraw);
    game.dispatch(Command::ToggleHold(1));
    game.dispatch(Command::ChangeVariant(Variant::JacksOrBetter85));
    assert_eq!(game.bankroll(), 990);
    assert_eq!(game.holds().count(), 0);
    assert_eq!(game.deck().dealt(), 5);
}

#[test]
fn paytable_follows_the_variant() {
    let mut game = Game::seeded(SessionConfig::default(), 5);
    game.dispatch(Command::ChangeVariant(Variant::AllAmerican));
    assert_eq!(game.paytable().multiplier(Category::Straight), 8);
    assert_eq!(game.paytable().multiplier(Category::FullHouse), 8);
    game.dispatch(Command::DealOrDraw);
    game.dispatch(Command::ChangeVariant(Variant::JacksOrBetter));
    assert_eq!(game.paytable().multiplier(Category::Straight), 4);
    assert_eq!(game.paytable().multiplier(Category::FullHouse), 9);
}

#[test]
fn change_uses_configured_bankroll_and_unit() {
    let config = SessionConfig { starting_bankroll: 500, bet_unit: 5, variant: Variant::TensOrBetter };
    let mut game = Game::seeded(config, 5);
    assert_eq!(game.variant(), Variant::TensOrBetter);
    game.dispatch(Command::ChangeVariant(Variant::JacksOrBetter95));
    assert_eq!(game.bankroll(), 495);
    assert_eq!(game.bet(), 5);
}

#[test]
fn change_after_quit_is_ignored() {
    let mut game = played(1);
    game.dispatch(Command::Quit);
    assert!(game.dispatch(Command::ChangeVariant(Variant::AllAmerican)).is_empty());
    assert_eq!(game.variant(), Variant::JacksOrBetter);
}
