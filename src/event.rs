use serde::{Deserialize, Serialize};

use crate::coord::HexCoord;
use crate::piece::PieceKind;


// Everything the board reports outward. The orchestrator queues these during
// `render` and the host drains them with `Board::poll_event`; there is no
// callback wiring.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BoardEvent {
    TimerExpired,
    HexClicked { pos: HexCoord },
    PromotionChosen { kind: PieceKind },
}
