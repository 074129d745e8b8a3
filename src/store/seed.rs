use crate::models::Activity;

// The fixed school offering. A process restart resets every roster to this
// state; nothing here is ever persisted.
pub(crate) fn seed_activities() -> Vec<(String, Activity)> {
    vec![
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        activity(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        activity(
            "Basketball Team",
            "Competitive basketball team for intramural and varsity play",
            "Mondays and Thursdays, 4:00 PM - 5:30 PM",
            15,
            &["james@mergington.edu"],
        ),
        activity(
            "Tennis Club",
            "Learn tennis skills and compete in matches",
            "Wednesdays and Saturdays, 3:00 PM - 4:30 PM",
            16,
            &["alex@mergington.edu", "maya@mergington.edu"],
        ),
        activity(
            "Art Studio",
            "Explore painting, drawing, and other visual arts",
            "Tuesdays and Fridays, 3:30 PM - 5:00 PM",
            18,
            &["lucas@mergington.edu"],
        ),
        activity(
            "Music Ensemble",
            "Play instruments and perform in concerts",
            "Mondays and Wednesdays, 4:00 PM - 5:00 PM",
            25,
            &["sarah@mergington.edu", "noah@mergington.edu"],
        ),
        activity(
            "Debate Club",
            "Develop argumentation and public speaking skills",
            "Thursdays, 3:30 PM - 5:00 PM",
            20,
            &["grace@mergington.edu"],
        ),
        activity(
            "Science Olympiad",
            "Compete in science competitions and experiments",
            "Tuesdays and Thursdays, 4:30 PM - 5:30 PM",
            15,
            &["ethan@mergington.edu", "avery@mergington.edu"],
        ),
    ]
}

fn activity(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> (String, Activity) {
    (
        name.to_string(),
        Activity {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        },
    )
}
