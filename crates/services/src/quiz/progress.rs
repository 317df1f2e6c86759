/// Aggregated view of quiz attempt progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based number of the question being presented (stays at the last
    /// question once the attempt completes).
    pub position: usize,
    pub total: usize,
    /// Questions answered and checked so far.
    pub answered: usize,
    pub score: u32,
    pub is_complete: bool,
}
