//! Day agenda views and print rendering.
//!
//! Both surfaces read the already-compiled map; neither recomputes. The
//! screen view shows nothing on non-business days, while the print
//! listing pads whatever the map holds for the requested date, so a
//! hearing pinned on a holiday still reaches paper.

use crate::api::{HearingSlot, ScheduleMap};
use crate::calendar::{CalendarPolicy, DayClass};
use crate::config::ScheduleConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One render row of the day agenda: a (time label, seat) grid cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaRow {
    pub time: String,
    /// Seat index within the time label, `0..capacity`.
    pub position: usize,
    /// `None` renders as a free seat.
    pub slot: Option<HearingSlot>,
}

/// Screen view of a single day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayView {
    pub date: NaiveDate,
    pub day_class: DayClass,
    /// One row per time label x capacity unit; empty on non-business days
    /// ("no hearings are scheduled" state).
    pub rows: Vec<AgendaRow>,
}

/// One line of the print listing. The label appears only on the first row
/// of its block, matching the printed form layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintRow {
    pub time: String,
    pub slot: Option<HearingSlot>,
}

/// Build the screen view for one day out of the compiled map.
pub fn day_view(
    map: &ScheduleMap,
    policy: &CalendarPolicy,
    config: &ScheduleConfig,
    date: NaiveDate,
) -> DayView {
    let day_class = policy.classify(date);
    let rows = if day_class.is_business() {
        padded_rows(map, config, date)
            .map(|(time, position, slot)| AgendaRow {
                time: time.to_string(),
                position,
                slot,
            })
            .collect()
    } else {
        Vec::new()
    };
    DayView {
        date,
        day_class,
        rows,
    }
}

/// Build the print rows for one day: exactly `capacity` rows per label,
/// blank when unfilled, regardless of day class.
pub fn print_rows(map: &ScheduleMap, config: &ScheduleConfig, date: NaiveDate) -> Vec<PrintRow> {
    padded_rows(map, config, date)
        .map(|(time, position, slot)| PrintRow {
            time: if position == 0 {
                time.to_string()
            } else {
                String::new()
            },
            slot,
        })
        .collect()
}

/// Shared padding walk: each label in grid order, `capacity` seats each.
/// The compiler's output is never reshaped, only padded to row count.
fn padded_rows<'a>(
    map: &'a ScheduleMap,
    config: &'a ScheduleConfig,
    date: NaiveDate,
) -> impl Iterator<Item = (&'a str, usize, Option<HearingSlot>)> + 'a {
    let day_slots: &[HearingSlot] = map.get(&date).map_or(&[], Vec::as_slice);
    config.time_slots.iter().flat_map(move |time| {
        let for_time: Vec<&HearingSlot> =
            day_slots.iter().filter(|s| s.time == *time).collect();
        (0..config.capacity_per_slot).map(move |position| {
            (
                time.as_str(),
                position,
                for_time.get(position).map(|s| (*s).clone()),
            )
        })
    })
}

/// Render the print rows as the plain-text hearing listing.
pub fn render_print_text(date: NaiveDate, rows: &[PrintRow]) -> String {
    let mut out = String::new();
    out.push_str("DEFENSA DEL CONSUMIDOR\n");
    out.push_str("LISTADO DE AUDIENCIAS\n");
    out.push_str(&format!("FECHA: {}\n\n", date.format("%Y-%m-%d")));
    out.push_str("HORARIO | EXPEDIENTE / PARTES\n");
    out.push_str("--------+----------------------------------------\n");
    for row in rows {
        let parties = match &row.slot {
            Some(slot) => format!(
                "{} C/ {}",
                slot.claimant.to_uppercase(),
                slot.defendant.to_uppercase()
            ),
            None => String::new(),
        };
        out.push_str(&format!("{:<7} | {}\n", row.time, parties));
    }
    out
}
