use super::models::ChatTurn;

/// Keep the most recent turns whose combined length fits within
/// `budget` characters, in their original order.
///
/// Walks from the newest turn backwards and stops at the first turn
/// that doesn't fit. Turns are never truncated, so a newest turn that
/// is larger than the budget on its own results in an empty history.
pub fn clamp_history(history: &[ChatTurn], budget: usize) -> Vec<ChatTurn> {
    let mut used = 0;
    let mut keep = 0;

    for turn in history.iter().rev() {
        let len = turn.len();
        if used + len > budget {
            break;
        }
        used += len;
        keep += 1;
    }

    history[history.len() - keep..].to_vec()
}
