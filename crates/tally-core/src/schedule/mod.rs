//! Time classification, slot assignment and calendar views.
//!
//! Deadlines are local wall-clock values ([`jiff::civil::DateTime`]). All
//! "now" and "today" decisions go through a [`Clock`] so that callers and
//! tests can pin the current instant.

pub mod clock;
pub mod labels;
pub mod slots;
pub mod time;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use slots::{slot_for_task, time_slots_of_day, Slot, TimeSlot, TimeSlots};
pub use time::{default_deadline, is_holding, is_past, is_today, HOLDING_TIME};
pub use view::{CalendarBoard, CalendarView, DayBoard, SlotRow};
