//! Business-hours traffic windowing.
//!
//! The dashboard's traffic chart shows a fixed window of store hours. Raw
//! per-hour visit counts come from the database; projecting them onto the
//! window (zero-filling quiet hours, deriving the exit figure) is pure
//! logic and lives here.

use crate::views::TrafficSlot;

/// First hour shown on the traffic chart (inclusive).
pub const OPEN_HOUR: i32 = 9;
/// Last hour shown on the traffic chart (inclusive).
pub const CLOSE_HOUR: i32 = 18;

/// Fraction of entries reported as exits.
///
/// Exits are not measured; the chart shows a placeholder heuristic of 80%
/// of the entry count, rounded down.
pub const EXIT_RATIO: f64 = 0.8;

/// Project raw `(hour, visit count)` pairs onto the fixed display window.
///
/// Always returns exactly `CLOSE_HOUR - OPEN_HOUR + 1` slots. Hours outside
/// the window are dropped; hours without a count report zero.
pub fn project_window(counts: &[(i32, i64)]) -> Vec<TrafficSlot> {
    (OPEN_HOUR..=CLOSE_HOUR)
        .map(|hour| {
            let entries = counts
                .iter()
                .find(|(h, _)| *h == hour)
                .map(|(_, n)| *n)
                .unwrap_or(0);
            TrafficSlot {
                time: format!("{hour:02}:00"),
                visitors: entries,
                entry: entries,
                exit: (entries as f64 * EXIT_RATIO).floor() as i64,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_counts_yield_ten_zero_slots() {
        let slots = project_window(&[]);
        assert_eq!(slots.len(), 10);
        assert_eq!(slots[0].time, "09:00");
        assert_eq!(slots[9].time, "18:00");
        assert!(slots.iter().all(|s| s.visitors == 0 && s.exit == 0));
    }

    #[test]
    fn counts_land_in_their_slot() {
        let slots = project_window(&[(9, 12), (18, 3)]);
        assert_eq!(slots[0].entry, 12);
        assert_eq!(slots[9].entry, 3);
        assert!(slots[1..9].iter().all(|s| s.entry == 0));
    }

    #[test]
    fn exit_is_eighty_percent_rounded_down() {
        let slots = project_window(&[(10, 7)]);
        // floor(7 * 0.8) = 5
        assert_eq!(slots[1].exit, 5);

        let slots = project_window(&[(10, 5)]);
        assert_eq!(slots[1].exit, 4);
    }

    #[test]
    fn hours_outside_the_window_are_dropped() {
        let slots = project_window(&[(3, 100), (22, 50)]);
        assert_eq!(slots.len(), 10);
        assert!(slots.iter().all(|s| s.entry == 0));
    }
}
