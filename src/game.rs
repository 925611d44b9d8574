use tracing::debug;

use crate::card::{Card, CardColor, ColoredCard, PlayedCard, WildKind};
use crate::constants::{HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::deck::Deck;
use crate::error::{GameError, Result};
use crate::player::Player;
use crate::turn::{PendingColorChoice, PlayEffect, PlayOutcome};

/// One round of play, from deal to hand exhaustion.
///
/// The engine owns every card in the round; all mutation goes through
/// [`Game::play_card`] and [`Game::choose_color`], and a failed call leaves
/// the round untouched. Starting over (or changing the player count) means
/// constructing a fresh `Game` and dropping the old one.
#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    draw_pile: Deck,
    discard_pile: Vec<Card>,
    current_player: usize,
    last_card_played: PlayedCard,
    pending_choice: Option<PendingColorChoice>,
}

impl Game {
    /// Starts a round with generated player names.
    pub fn new(num_players: usize) -> Result<Self> {
        let names = (1..=num_players).map(|i| format!("Player {i}")).collect();
        Self::with_names(names)
    }

    /// Starts a round: shuffles a fresh deck, deals seven cards to each
    /// player, and seeds the discard pile with the first colored card so
    /// legality never opens against an unresolved wild.
    pub fn with_names(names: Vec<String>) -> Result<Self> {
        if names.len() < MIN_PLAYERS || names.len() > MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount(names.len()));
        }

        let mut draw_pile = Deck::new();
        draw_pile.shuffle();

        let players = names
            .into_iter()
            .map(|name| Player::new(name, draw_pile.deal_cards(HAND_SIZE)))
            .collect::<Vec<_>>();

        let seed_card = draw_pile
            .draw_colored_card()
            .expect("a freshly dealt deck always has a colored card left");
        let Card::Colored(color, colored) = seed_card else {
            unreachable!("draw_colored_card only returns colored cards");
        };

        debug!(players = players.len(), "round started");

        Ok(Self {
            players,
            draw_pile,
            discard_pile: vec![seed_card],
            current_player: 0,
            last_card_played: colored.into_played_card(color),
            pending_choice: None,
        })
    }

    /// Applies one play: checks it, runs the card's effect, then removes
    /// the card from the acting player's hand, pushes it onto the discard
    /// pile, and advances the turn.
    ///
    /// Wild plays do not advance the turn here; the round sits in the
    /// color-choice state until [`Game::choose_color`] resolves it.
    pub fn play_card(&mut self, player_index: usize, card_index: usize) -> Result<PlayOutcome> {
        if player_index != self.current_player {
            return Err(GameError::NotYourTurn);
        }
        if self.pending_choice.is_some() {
            return Err(GameError::AwaitingColorChoice);
        }
        let card = *self.players[player_index]
            .hand
            .get(card_index)
            .ok_or(GameError::CardNotInHand)?;
        if !card.can_follow(&self.last_card_played) {
            return Err(GameError::IllegalCard);
        }

        // Nothing above this line mutates; a rejected play leaves the round
        // exactly as it was.
        let actor = self.current_player;
        let player_count = self.players.len();

        let (effect, step) = match card {
            Card::Colored(_, ColoredCard::Number(_)) => (PlayEffect::Neutral, 1),
            Card::Colored(_, ColoredCard::Skip) => (PlayEffect::Skip, 2),
            Card::Colored(_, ColoredCard::Reverse) => {
                // Walks the order backwards. With two players that lands on
                // the actor again, the same seat a skip hands over to.
                let step = if player_count == 2 { 2 } else { player_count - 1 };
                (PlayEffect::Reverse, step)
            }
            Card::Colored(_, ColoredCard::DrawTwo) => {
                self.draw_cards_to_player((actor + 1) % player_count, 2);
                (PlayEffect::DrawTwo, 1)
            }
            Card::Wild => {
                self.pending_choice = Some(PendingColorChoice {
                    kind: WildKind::Wild,
                    advance_on_choice: true,
                });
                (PlayEffect::Wild, 0)
            }
            Card::WildDrawFour => {
                self.draw_cards_to_player((actor + 1) % player_count, 4);
                // Two steps now, past the player who drew; the final step
                // waits for the color choice.
                self.current_player = (actor + 2) % player_count;
                self.pending_choice = Some(PendingColorChoice {
                    kind: WildKind::WildDrawFour,
                    advance_on_choice: true,
                });
                (PlayEffect::WildDrawFour, 0)
            }
        };

        let card = self.players[actor].remove_card(card_index);
        self.discard_pile.push(card);
        if let Card::Colored(color, colored) = card {
            self.last_card_played = colored.into_played_card(color);
        }

        let round_over = self.players[actor].cards_count() == 0;
        if self.pending_choice.is_none() {
            self.current_player = (actor + step) % player_count;
        }

        debug!(player_index, %card, ?effect, round_over, "card played");

        Ok(PlayOutcome { effect, round_over })
    }

    /// Resolves the color of the wild on top of the discard pile and, when
    /// the play deferred it, advances the turn by the owed step.
    pub fn choose_color(&mut self, color: CardColor) -> Result<()> {
        let pending = self
            .pending_choice
            .take()
            .ok_or(GameError::NoPendingSelection)?;

        self.last_card_played = match pending.kind {
            WildKind::Wild => PlayedCard::Wild(color),
            WildKind::WildDrawFour => PlayedCard::WildDrawFour(color),
        };

        if pending.advance_on_choice {
            self.current_player = (self.current_player + 1) % self.players.len();
        }

        debug!(%color, "wild color chosen");

        Ok(())
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn draw_pile_count(&self) -> usize {
        self.draw_pile.cards_count()
    }

    pub fn discard_pile_count(&self) -> usize {
        self.discard_pile.len()
    }

    /// The card legality is currently checked against. While a color choice
    /// is pending this still names the previous top; `top_of_discard` shows
    /// the unresolved wild itself.
    pub fn last_card_played(&self) -> &PlayedCard {
        &self.last_card_played
    }

    pub fn top_of_discard(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    pub fn awaiting_color_choice(&self) -> bool {
        self.pending_choice.is_some()
    }

    pub fn pending_wild(&self) -> Option<WildKind> {
        self.pending_choice.map(|pending| pending.kind)
    }

    pub fn round_over(&self) -> bool {
        self.players.iter().any(|player| player.cards_count() == 0)
    }

    fn draw_cards_to_player(&mut self, player_index: usize, count: usize) {
        for card in self.draw_pile.draw_cards(count) {
            self.players[player_index].add_card(card);
        }
    }
}
