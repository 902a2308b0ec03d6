//! Appointment booking: slot grouping, requests and the approval flow.

pub mod commands;
pub mod grouping;

pub use grouping::{coach_ids_for_booking, group_slots, SlotGroup, SlotGroupCoach};
