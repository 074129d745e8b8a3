use std::collections::BTreeMap;

use crate::models::Activity;
use crate::store::{ActivityDirectory, RosterError};

pub fn list_activities(directory: &ActivityDirectory) -> BTreeMap<String, Activity> {
    directory.snapshot()
}

pub fn signup_for_activity(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, RosterError> {
    directory.signup(activity_name, email)?;
    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub fn unregister_from_activity(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, RosterError> {
    directory.unregister(activity_name, email)?;
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
