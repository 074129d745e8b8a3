use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

use crate::models::Activity;
use crate::store::seed;

/// Why a roster mutation was rejected. The display strings double as the
/// client-facing `detail` texts, so changing them changes the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

/// Cheap-to-clone handle onto the shared activity directory.
///
/// Mutations hold the entry's write guard across the membership check and the
/// list edit, so two concurrent signups of the same email cannot both pass
/// the duplicate check.
#[derive(Clone)]
pub struct ActivityDirectory {
    activities: Arc<DashMap<String, Activity>>,
}

impl ActivityDirectory {
    pub fn with_seed_data() -> Self {
        Self::from_activities(seed::seed_activities())
    }

    pub fn from_activities(activities: impl IntoIterator<Item = (String, Activity)>) -> Self {
        let map = DashMap::new();
        for (name, activity) in activities {
            map.insert(name, activity);
        }
        Self {
            activities: Arc::new(map),
        }
    }

    /// Point-in-time copy of every activity, keyed and sorted by name.
    pub fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RosterError::AlreadySignedUp);
        }

        // New entries go at the end; roster order is signup order.
        activity.participants.push(email.to_string());
        Ok(())
    }

    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        let Some(position) = activity.participants.iter().position(|p| p == email) else {
            return Err(RosterError::NotSignedUp);
        };

        activity.participants.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ActivityDirectory, RosterError};
    use crate::models::Activity;

    fn directory_with(name: &str, participants: &[&str]) -> ActivityDirectory {
        ActivityDirectory::from_activities([(
            name.to_string(),
            Activity {
                description: "test activity".to_string(),
                schedule: "Mondays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 2,
                participants: participants.iter().map(|p| p.to_string()).collect(),
            },
        )])
    }

    #[test]
    fn seeded_directory_lists_nine_activities() {
        let snapshot = ActivityDirectory::with_seed_data().snapshot();
        assert_eq!(snapshot.len(), 9);
        assert!(snapshot.contains_key("Chess Club"));
        assert!(snapshot.contains_key("Programming Class"));
    }

    #[test]
    fn signup_appends_at_the_end() {
        let directory = directory_with("Chess Club", &["a@mergington.edu"]);
        directory.signup("Chess Club", "b@mergington.edu").unwrap();

        let snapshot = directory.snapshot();
        assert_eq!(
            snapshot["Chess Club"].participants,
            vec!["a@mergington.edu", "b@mergington.edu"]
        );
    }

    #[test]
    fn duplicate_signup_leaves_roster_unchanged() {
        let directory = directory_with("Chess Club", &["a@mergington.edu"]);
        let err = directory
            .signup("Chess Club", "a@mergington.edu")
            .unwrap_err();

        assert_eq!(err, RosterError::AlreadySignedUp);
        assert_eq!(
            directory.snapshot()["Chess Club"].participants,
            vec!["a@mergington.edu"]
        );
    }

    #[test]
    fn signup_to_unknown_activity_is_not_found() {
        let directory = directory_with("Chess Club", &[]);
        assert_eq!(
            directory
                .signup("Knitting Circle", "a@mergington.edu")
                .unwrap_err(),
            RosterError::ActivityNotFound
        );
    }

    #[test]
    fn signup_ignores_max_participants() {
        // Capacity is informational only; a full roster still accepts signups.
        let directory = directory_with("Chess Club", &["a@mergington.edu", "b@mergington.edu"]);
        directory.signup("Chess Club", "c@mergington.edu").unwrap();
        assert_eq!(directory.snapshot()["Chess Club"].participants.len(), 3);
    }

    #[test]
    fn unregister_removes_only_the_target() {
        let directory = directory_with(
            "Chess Club",
            &["a@mergington.edu", "b@mergington.edu", "c@mergington.edu"],
        );
        directory
            .unregister("Chess Club", "b@mergington.edu")
            .unwrap();

        assert_eq!(
            directory.snapshot()["Chess Club"].participants,
            vec!["a@mergington.edu", "c@mergington.edu"]
        );
    }

    #[test]
    fn unregister_of_absent_email_is_rejected() {
        let directory = directory_with("Chess Club", &["a@mergington.edu"]);
        assert_eq!(
            directory
                .unregister("Chess Club", "b@mergington.edu")
                .unwrap_err(),
            RosterError::NotSignedUp
        );
    }

    #[test]
    fn unregister_from_unknown_activity_is_not_found() {
        let directory = directory_with("Chess Club", &["a@mergington.edu"]);
        assert_eq!(
            directory
                .unregister("Knitting Circle", "a@mergington.edu")
                .unwrap_err(),
            RosterError::ActivityNotFound
        );
    }

    #[test]
    fn concurrent_duplicate_signups_admit_exactly_one() {
        let directory = directory_with("Chess Club", &[]);

        let admitted: usize = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|_| {
                    let directory = directory.clone();
                    scope.spawn(move || directory.signup("Chess Club", "race@mergington.edu"))
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join())
                .filter(|result| matches!(result, Ok(Ok(()))))
                .count()
        });

        assert_eq!(admitted, 1);
        assert_eq!(
            directory.snapshot()["Chess Club"].participants,
            vec!["race@mergington.edu"]
        );
    }

    #[test]
    fn concurrent_distinct_signups_are_all_kept() {
        let directory = directory_with("Chess Club", &["a@mergington.edu"]);
        let emails: Vec<String> = (0..8).map(|i| format!("student{i}@mergington.edu")).collect();

        std::thread::scope(|scope| {
            for email in &emails {
                let directory = directory.clone();
                scope.spawn(move || directory.signup("Chess Club", email).unwrap());
            }
        });

        let roster = &directory.snapshot()["Chess Club"].participants;
        assert_eq!(roster.len(), 9);
        for email in &emails {
            assert!(roster.contains(email));
        }
    }
}
