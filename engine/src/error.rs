use thiserror::Error;

use crate::army::Army;

/// Why an attack order was refused. The message is shown to the player as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderError {
    #[error("Invalid territory number.")]
    InvalidTerritory,

    #[error("You can only attack from your own territories ({0}).")]
    NotYourTerritory(Army),

    #[error("You need at least 2 troops to attack.")]
    NotEnoughTroops,

    #[error("You cannot attack a territory that is already yours.")]
    AlreadyYours,
}
