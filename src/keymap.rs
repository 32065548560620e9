use crate::engine::Command;
use crate::variant::Variant;

/// Keys for hold slots 0..5, left to right.
pub const HOLD_KEYS: [char; 5] = [' ', 'j', 'k', 'l', ';'];

/// Upper-case letter selecting each variant, in [`Variant::ALL`] order.
pub const fn variant_key(variant: Variant) -> char {
    match variant {
        Variant::AllAmerican => 'A',
        Variant::TensOrBetter => 'B',
        Variant::BonusPoker => 'C',
        Variant::DoubleBonus => 'D',
        Variant::DoubleBonusBonus => 'E',
        Variant::JacksOrBetter => 'F',
        Variant::JacksOrBetter95 => 'G',
        Variant::JacksOrBetter86 => 'H',
        Variant::JacksOrBetter85 => 'I',
        Variant::JacksOrBetter75 => 'J',
        Variant::JacksOrBetter65 => 'K',
    }
}

/// Map one key to a command using the classic keyboard layout.
///
/// ```
/// use video_poker::engine::Command;
/// use video_poker::keymap::command_for_key;
/// use video_poker::variant::Variant;
///
/// assert_eq!(command_for_key('\n'), Some(Command::DealOrDraw));
/// assert_eq!(command_for_key('k'), Some(Command::ToggleHold(2)));
/// assert_eq!(command_for_key('3'), Some(Command::SetBet(3)));
/// assert_eq!(command_for_key('B'), Some(Command::ChangeVariant(Variant::TensOrBetter)));
/// assert_eq!(command_for_key('x'), None);
/// ```
pub fn command_for_key(key: char) -> Option<Command> {
    if let Some(slot) = HOLD_KEYS.iter().position(|&k| k == key) {
        return Some(Command::ToggleHold(slot));
    }
    match key {
        '\n' | '\r' => Some(Command::DealOrDraw),
        '1'..='5' => key.to_digit(10).map(|d| Command::SetBet(d as u8)),
        'q' | 'e' => Some(Command::Quit),
        'A'..='K' => Variant::ALL
            .into_iter()
            .find(|&v| variant_key(v) == key)
            .map(Command::ChangeVariant),
        _ => None,
    }
}
