//! Service layer for business logic and orchestration.
//!
//! This module sits between the storage layer and the HTTP handlers.
//! Services orchestrate store calls, run the schedule compiler, and
//! implement the editor's validation and delete policies.

pub mod agenda;

pub mod hearings;

pub mod schedule;

pub mod stats;


pub use agenda::{day_view, print_rows, render_print_text, AgendaRow, DayView, PrintRow};
pub use hearings::{
    delete_hearing_by_id, delete_hearing_slot, save_hearing, HearingActionError,
};
pub use schedule::{load_schedule_inputs, refresh_schedule, ScheduleCache};
pub use stats::{dashboard_stats, recent_complaints, DashboardStats};
