//! Grouping of availability slots into bookable time windows.
//!
//! Slots from different coaches that share the exact same (start, end) pair
//! collapse into one group, so the UI can offer "9:00 to 9:30, available from
//! Coach A and Coach B" as a single option. No fuzzy or overlap merging:
//! windows differing by any amount stay separate.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::AvailabilitySlot;

/// One coach's offer inside a group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotGroupCoach {
    pub coach_id: Uuid,
    pub coach_name: String,
    pub availability_id: Uuid,
}

/// Derived, never persisted. Rebuilt from the flat slot list on every fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotGroup {
    pub available_start: DateTime<Utc>,
    pub available_end: DateTime<Utc>,
    pub coaches: Vec<SlotGroupCoach>,
}

/// Group unbooked slots by their exact time window, ascending by start.
pub fn group_slots(slots: &[AvailabilitySlot]) -> Vec<SlotGroup> {
    let mut groups: BTreeMap<(DateTime<Utc>, DateTime<Utc>), Vec<SlotGroupCoach>> =
        BTreeMap::new();

    for slot in slots {
        if slot.is_booked {
            continue;
        }
        groups
            .entry((slot.available_start, slot.available_end))
            .or_default()
            .push(SlotGroupCoach {
                coach_id: slot.coach_id,
                coach_name: slot
                    .coach
                    .as_ref()
                    .map(|c| c.display_name())
                    .unwrap_or_else(|| "コーチ".to_string()),
                availability_id: slot.availability_id,
            });
    }

    groups
        .into_iter()
        .map(|((available_start, available_end), coaches)| SlotGroup {
            available_start,
            available_end,
            coaches,
        })
        .collect()
}

/// Coaches a group booking targets: the explicit selection, or the whole
/// group when nothing was selected.
pub fn coach_ids_for_booking(group: &SlotGroup, selected: Vec<Uuid>) -> Vec<Uuid> {
    if selected.is_empty() {
        group.coaches.iter().map(|c| c.coach_id).collect()
    } else {
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::CoachInfo;
    use chrono::TimeZone;

    fn slot(
        coach_id: Uuid,
        name: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        is_booked: bool,
    ) -> AvailabilitySlot {
        AvailabilitySlot {
            availability_id: Uuid::new_v4(),
            coach_id,
            available_start: start,
            available_end: end,
            is_booked,
            created_at: start,
            coach: Some(CoachInfo {
                coach_id,
                name: Some(name.to_string()),
                last_name: None,
                first_name: None,
                email: format!("{name}@example.com"),
            }),
        }
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, h, m, 0).unwrap()
    }

    #[test]
    fn identical_windows_share_one_group() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let groups = group_slots(&[
            slot(a, "coach-a", at(9, 0), at(9, 30), false),
            slot(b, "coach-b", at(9, 0), at(9, 30), false),
        ]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].coaches.len(), 2);
        let ids: Vec<Uuid> = groups[0].coaches.iter().map(|c| c.coach_id).collect();
        assert!(ids.contains(&a));
        assert!(ids.contains(&b));
    }

    #[test]
    fn different_start_splits_groups() {
        let groups = group_slots(&[
            slot(Uuid::new_v4(), "a", at(9, 0), at(9, 30), false),
            slot(Uuid::new_v4(), "b", at(9, 1), at(9, 30), false),
        ]);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn different_end_splits_groups() {
        let groups = group_slots(&[
            slot(Uuid::new_v4(), "a", at(9, 0), at(9, 30), false),
            slot(Uuid::new_v4(), "b", at(9, 0), at(10, 0), false),
        ]);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn groups_are_sorted_by_start_for_any_input_order() {
        let groups = group_slots(&[
            slot(Uuid::new_v4(), "a", at(15, 0), at(15, 30), false),
            slot(Uuid::new_v4(), "b", at(9, 0), at(9, 30), false),
            slot(Uuid::new_v4(), "c", at(12, 0), at(12, 30), false),
        ]);

        let starts: Vec<DateTime<Utc>> = groups.iter().map(|g| g.available_start).collect();
        assert_eq!(starts, vec![at(9, 0), at(12, 0), at(15, 0)]);
    }

    #[test]
    fn booked_slots_are_excluded() {
        let groups = group_slots(&[
            slot(Uuid::new_v4(), "a", at(9, 0), at(9, 30), true),
            slot(Uuid::new_v4(), "b", at(9, 0), at(9, 30), false),
        ]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].coaches.len(), 1);
        assert_eq!(groups[0].coaches[0].coach_name, "b");
    }

    #[test]
    fn missing_coach_record_falls_back_to_placeholder_name() {
        let mut orphan = slot(Uuid::new_v4(), "x", at(9, 0), at(9, 30), false);
        orphan.coach = None;
        let groups = group_slots(&[orphan]);
        assert_eq!(groups[0].coaches[0].coach_name, "コーチ");
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_slots(&[]).is_empty());
    }

    #[test]
    fn no_selection_books_the_full_coach_set() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let groups = group_slots(&[
            slot(a, "a", at(9, 0), at(9, 30), false),
            slot(b, "b", at(9, 0), at(9, 30), false),
        ]);

        let ids = coach_ids_for_booking(&groups[0], Vec::new());
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&a));
        assert!(ids.contains(&b));
    }

    #[test]
    fn explicit_selection_wins_over_the_group() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let groups = group_slots(&[
            slot(a, "a", at(9, 0), at(9, 30), false),
            slot(b, "b", at(9, 0), at(9, 30), false),
        ]);

        let ids = coach_ids_for_booking(&groups[0], vec![b]);
        assert_eq!(ids, vec![b]);
    }
}
