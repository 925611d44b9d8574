use rand::{seq::SliceRandom, thread_rng};
use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor, ColoredCard},
    constants::*,
};

#[derive(Debug)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// Builds the full 108-card deck in a fixed order. Shuffling is the
    /// caller's move, which keeps the composition independently testable.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        for color in CardColor::iter() {
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Skip));
            }

            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Reverse));
            }

            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::DrawTwo));
            }

            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Number(*number)));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::Wild);
        }

        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(Card::WildDrawFour);
        }

        Self(cards)
    }

    pub(crate) fn shuffle(&mut self) {
        let mut rng = thread_rng();
        self.0.shuffle(&mut rng);
    }

    /// Effect draws come off the front. A short pile yields fewer cards,
    /// never an error; the discard pile is not reshuffled back in.
    pub(crate) fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.0.len());
        self.0.drain(0..count).collect::<Vec<_>>()
    }

    /// Hands are dealt off the back, the opposite end from effect draws.
    pub(crate) fn deal_cards(&mut self, count: usize) -> Vec<Card> {
        let split_at = self.0.len().saturating_sub(count);
        self.0.split_off(split_at)
    }

    /// Takes the colored card nearest the back, for seeding the discard
    /// pile. A round must never open against an unresolved wild.
    pub(crate) fn draw_colored_card(&mut self) -> Option<Card> {
        self.0
            .iter()
            .rposition(|card| matches!(card, Card::Colored(_, _)))
            .map(|pos| self.0.remove(pos))
    }

    pub(crate) fn cards_count(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_card_count_new_deck() {
        assert_eq!(Deck::new().cards_count(), TOTAL_CARDS_IN_DECK as usize);
    }

    #[test]
    fn correct_composition_new_deck() {
        let deck = Deck::new();

        let numbers = deck
            .0
            .iter()
            .filter(|card| matches!(card, Card::Colored(_, ColoredCard::Number(_))))
            .count();
        assert_eq!(numbers, 76);

        let actions = deck
            .0
            .iter()
            .filter(|card| {
                matches!(
                    card,
                    Card::Colored(
                        _,
                        ColoredCard::Skip | ColoredCard::Reverse | ColoredCard::DrawTwo,
                    )
                )
            })
            .count();
        assert_eq!(actions, 24);

        let wilds = deck
            .0
            .iter()
            .filter(|card| matches!(card, Card::Wild | Card::WildDrawFour))
            .count();
        assert_eq!(wilds, 8);
    }

    #[test]
    fn one_zero_and_two_of_each_other_number_per_color() {
        let deck = Deck::new();

        for color in CardColor::iter() {
            for number in 0..=9u8 {
                let copies = deck
                    .0
                    .iter()
                    .filter(|card| {
                        **card == Card::Colored(color, ColoredCard::Number(number))
                    })
                    .count();
                let expected = if number == 0 { 1 } else { 2 };
                assert_eq!(copies, expected, "{color} {number}");
            }
        }
    }

    #[test]
    fn draw_cards_saturates_on_short_pile() {
        let mut deck = Deck::new();
        deck.0.truncate(3);

        assert_eq!(deck.draw_cards(4).len(), 3);
        assert_eq!(deck.draw_cards(2).len(), 0);
    }

    #[test]
    fn deal_cards_takes_from_the_back() {
        let mut deck = Deck::new();
        let back = *deck.0.last().unwrap();

        let dealt = deck.deal_cards(HAND_SIZE);

        assert_eq!(dealt.len(), HAND_SIZE);
        assert!(dealt.contains(&back));
        assert_eq!(deck.cards_count(), TOTAL_CARDS_IN_DECK as usize - HAND_SIZE);
    }

    #[test]
    fn draw_colored_card_skips_wilds() {
        // An unshuffled deck ends in the eight wilds.
        let mut deck = Deck::new();

        let card = deck.draw_colored_card().unwrap();

        assert!(matches!(card, Card::Colored(_, _)));
        assert_eq!(deck.cards_count(), TOTAL_CARDS_IN_DECK as usize - 1);
    }
}
