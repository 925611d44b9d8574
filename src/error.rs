use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("a round takes 2 to 10 players, got {0}")]
    InvalidPlayerCount(usize),
    #[error("not your turn")]
    NotYourTurn,
    #[error("a wild card is awaiting a color choice")]
    AwaitingColorChoice,
    #[error("no card at that position in hand")]
    CardNotInHand,
    #[error("that card cannot follow the last card played")]
    IllegalCard,
    #[error("no wild card is awaiting a color choice")]
    NoPendingSelection,
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
