//! Milestone and boundary detection for scoring deliveries.
//!
//! Purely informational: these helpers never touch scores or phase.

/// Multiple-of-50 boundary crossed by a score moving from `old_total` to
/// `new_total`, if any. When a single delivery crosses more than one boundary
/// the highest crossed value is reported.
pub fn crossed_milestone(old_total: u32, new_total: u32) -> Option<u32> {
    let crossed = (new_total / 50) * 50;
    if crossed >= 50 && crossed > (old_total / 50) * 50 {
        Some(crossed)
    } else {
        None
    }
}

/// A delivery scoring exactly 4 or exactly 6 is a boundary.
pub fn is_boundary(runs: u8) -> bool {
    runs == 4 || runs == 6
}
