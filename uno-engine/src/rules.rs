use crate::card::{Card, CardColor};

/// Whether `card` may be placed on `top` while `active_color` is in effect.
///
/// Wild cards are always playable, including a Wild Draw Four while the
/// player still holds a card of the active color.
pub fn is_legal(card: &Card, top: &Card, active_color: CardColor) -> bool {
    card.is_wild() || card.color() == Some(active_color) || card.same_value(top)
}
