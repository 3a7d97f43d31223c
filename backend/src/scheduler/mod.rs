//! The schedule compiler.
//!
//! Given the complaint log, the manual hearings, the calendar policy and
//! the slot grid, [`compile`] produces the full date-indexed slot map:
//! manual hearings first, then pending complaints packed oldest-first into
//! the remaining capacity across the forward horizon.
//!
//! Compilation is total: every call rebuilds the entire map from scratch,
//! which keeps the map consistent with the current complaint list and
//! manual-hearing set at O(complaints + horizon x slots) cost per call.
//! "Now" is an explicit parameter so callers and tests control the clock.

use crate::api::{Complaint, HearingSlot, ScheduleMap};
use crate::calendar::CalendarPolicy;
use crate::config::ScheduleConfig;
use chrono::NaiveDate;
use std::collections::{HashSet, VecDeque};


/// Hard cap on the forward search window, in calendar days.
///
/// Complaints that do not fit inside the horizon are not an error; they
/// simply stay pending and reappear on every later compilation.
pub const HORIZON_DAYS: usize = 365;

/// Compile the full schedule map.
///
/// # Arguments
/// * `complaints` - complaint log, most-recent-first as stored
/// * `manual_hearings` - administrator-pinned hearings
/// * `policy` - business-day rule
/// * `config` - slot grid (time labels + shared capacity)
/// * `today` - the current date; placement starts at `today + 1`
///
/// # Placement rules
/// - Manual hearings are seeded unconditionally under their date, in input
///   order, never capacity-checked: an over-booked slot is accepted
///   admin-override policy. Entries without a date occupy no day but
///   their `complaint_id` still marks the complaint as handled.
/// - The pending queue is the complaint log reversed (oldest submitted
///   first) minus complaints already covered by a manual hearing; it is
///   consumed strictly FIFO.
/// - Non-business days are skipped entirely. On a business day each time
///   label in grid order receives `capacity - occupied` automatic
///   placements, saturating at zero when manuals over-book the label.
pub fn compile(
    complaints: &[Complaint],
    manual_hearings: &[HearingSlot],
    policy: &CalendarPolicy,
    config: &ScheduleConfig,
    today: NaiveDate,
) -> ScheduleMap {
    let mut map = ScheduleMap::new();

    // 1. Manual hearings win their seat unconditionally.
    for hearing in manual_hearings {
        let Some(date) = hearing.date else { continue };
        map.entry(date).or_default().push(hearing.clone());
    }

    // 2. Complaints already covered by a manual hearing are handled,
    //    whether or not that hearing has a date.
    let covered: HashSet<&str> = manual_hearings
        .iter()
        .filter_map(|h| h.complaint_id.as_deref())
        .collect();

    // 3. Oldest submitted first.
    let mut pending: VecDeque<&Complaint> = complaints
        .iter()
        .rev()
        .filter(|c| !covered.contains(c.id.as_str()))
        .collect();

    // 4. Walk forward from tomorrow, filling grid gaps.
    let Some(mut day) = today.succ_opt() else {
        return map;
    };
    for _ in 0..HORIZON_DAYS {
        if pending.is_empty() {
            break;
        }
        if policy.is_business_day(day) {
            for time in &config.time_slots {
                let occupied = map
                    .get(&day)
                    .map_or(0, |slots| slots.iter().filter(|s| s.time == *time).count());
                let available = config.capacity_per_slot.saturating_sub(occupied);
                for _ in 0..available {
                    let Some(complaint) = pending.pop_front() else {
                        break;
                    };
                    map.entry(day)
                        .or_default()
                        .push(HearingSlot::automatic(complaint, day, time));
                }
            }
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    map
}
