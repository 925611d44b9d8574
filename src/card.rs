use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq)]
pub enum CardColor {
    Red,
    Green,
    Blue,
    Yellow,
}

/// The face of a card that always carries a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColoredCard {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

impl ColoredCard {
    pub fn into_played_card(self, color: CardColor) -> PlayedCard {
        PlayedCard::Colored(color, self)
    }
}

/// A card as it sits in a hand or a pile. Wild cards carry no color here;
/// they receive one through `Game::choose_color` after being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Card {
    Colored(CardColor, ColoredCard),
    Wild,
    WildDrawFour,
}

/// Which wild face is awaiting a color choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WildKind {
    Wild,
    WildDrawFour,
}

/// The card legality is checked against: the most recently played card with
/// its color resolved. Constructed only with a concrete color, so an
/// unresolved wild can never leak into a legality check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayedCard {
    Colored(CardColor, ColoredCard),
    Wild(CardColor),
    WildDrawFour(CardColor),
}

impl Card {
    /// A card may follow the top of the discard iff it shares the top's
    /// color, both are number cards with the same number, or it is a wild.
    /// Matching on kind alone (a Skip on a Skip of another color) does not
    /// count.
    pub fn can_follow(&self, top: &PlayedCard) -> bool {
        match self {
            Card::Wild | Card::WildDrawFour => true,
            Card::Colored(color, colored) => {
                if *color == top.color() {
                    return true;
                }
                matches!(
                    (colored, top),
                    (
                        ColoredCard::Number(number),
                        PlayedCard::Colored(_, ColoredCard::Number(top_number)),
                    ) if number == top_number
                )
            }
        }
    }
}

impl PlayedCard {
    pub fn color(&self) -> CardColor {
        match self {
            PlayedCard::Colored(color, _)
            | PlayedCard::Wild(color)
            | PlayedCard::WildDrawFour(color) => *color,
        }
    }

    pub fn number(&self) -> Option<u8> {
        match self {
            PlayedCard::Colored(_, ColoredCard::Number(number)) => Some(*number),
            _ => None,
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Colored(color, card) => {
                write!(f, "{} {}", color, {
                    match card {
                        ColoredCard::Number(number) => number.to_string(),
                        ColoredCard::Skip => "Skip".to_string(),
                        ColoredCard::Reverse => "Reverse".to_string(),
                        ColoredCard::DrawTwo => "Draw Two".to_string(),
                    }
                })
            }
            Card::Wild => write!(f, "Wild"),
            Card::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}

impl Display for PlayedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayedCard::Colored(color, card) => Card::Colored(*color, *card).fmt(f),
            PlayedCard::Wild(color) => write!(f, "Wild ({color})"),
            PlayedCard::WildDrawFour(color) => write!(f, "Wild Draw Four ({color})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_correct_string_for_number_card() {
        let red_3 = Card::Colored(CardColor::Red, ColoredCard::Number(3));
        assert_eq!(red_3.to_string(), "Red 3");

        let yellow_5 = Card::Colored(CardColor::Yellow, ColoredCard::Number(5));
        assert_eq!(yellow_5.to_string(), "Yellow 5");
    }

    #[test]
    fn return_correct_string_for_action_cards() {
        let red_skip = Card::Colored(CardColor::Red, ColoredCard::Skip);
        assert_eq!(red_skip.to_string(), "Red Skip");

        let green_reverse = Card::Colored(CardColor::Green, ColoredCard::Reverse);
        assert_eq!(green_reverse.to_string(), "Green Reverse");

        let blue_draw_two = Card::Colored(CardColor::Blue, ColoredCard::DrawTwo);
        assert_eq!(blue_draw_two.to_string(), "Blue Draw Two");
    }

    #[test]
    fn return_correct_string_for_wild_cards() {
        assert_eq!(Card::Wild.to_string(), "Wild");
        assert_eq!(Card::WildDrawFour.to_string(), "Wild Draw Four");

        let resolved = PlayedCard::Wild(CardColor::Green);
        assert_eq!(resolved.to_string(), "Wild (Green)");
    }

    #[test]
    fn card_follows_on_matching_color() {
        let top = PlayedCard::Colored(CardColor::Red, ColoredCard::Number(5));

        let red_9 = Card::Colored(CardColor::Red, ColoredCard::Number(9));
        assert!(red_9.can_follow(&top));

        let red_skip = Card::Colored(CardColor::Red, ColoredCard::Skip);
        assert!(red_skip.can_follow(&top));
    }

    #[test]
    fn card_follows_on_matching_number() {
        let top = PlayedCard::Colored(CardColor::Red, ColoredCard::Number(5));

        let blue_5 = Card::Colored(CardColor::Blue, ColoredCard::Number(5));
        assert!(blue_5.can_follow(&top));

        let blue_7 = Card::Colored(CardColor::Blue, ColoredCard::Number(7));
        assert!(!blue_7.can_follow(&top));
    }

    #[test]
    fn wild_cards_follow_anything() {
        let top = PlayedCard::Colored(CardColor::Yellow, ColoredCard::Skip);

        assert!(Card::Wild.can_follow(&top));
        assert!(Card::WildDrawFour.can_follow(&top));
    }

    #[test]
    fn matching_kind_alone_does_not_follow() {
        let top = PlayedCard::Colored(CardColor::Red, ColoredCard::Skip);

        let blue_skip = Card::Colored(CardColor::Blue, ColoredCard::Skip);
        assert!(!blue_skip.can_follow(&top));
    }

    #[test]
    fn card_follows_resolved_wild_by_color_only() {
        let top = PlayedCard::Wild(CardColor::Green);

        let green_2 = Card::Colored(CardColor::Green, ColoredCard::Number(2));
        assert!(green_2.can_follow(&top));

        let red_2 = Card::Colored(CardColor::Red, ColoredCard::Number(2));
        assert!(!red_2.can_follow(&top));
    }
}
