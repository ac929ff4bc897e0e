use crate::domain::hand::TWENTY_ONE;
use crate::engine::ActionKind;

/// Эвристика дилера: берёт карту, пока сумма меньше порога,
/// стоит на пороге и выше, а также при 21 или переборе.
pub fn dealer_decision(total: u32, stands_at: u32) -> ActionKind {
    if total >= TWENTY_ONE || total >= stands_at {
        ActionKind::Stay
    } else {
        ActionKind::Hit
    }
}
