use crate::card::WildKind;

/// Which special behavior a successful play carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayEffect {
    Neutral,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

/// Returned by `Game::play_card` on success. `round_over` is set when the
/// acting player's hand emptied; the engine keeps reporting it and leaves
/// stopping to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    pub effect: PlayEffect,
    pub round_over: bool,
}

/// The suspended state between a wild being played and its color being
/// chosen. While this exists, every play is rejected. `advance_on_choice`
/// records whether `choose_color` still owes the turn a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingColorChoice {
    pub(crate) kind: WildKind,
    pub(crate) advance_on_choice: bool,
}
