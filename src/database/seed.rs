use crate::models::{Activity, ActivityMap};

/// Activities offered at Mergington High School when the service starts,
/// in the order they are listed to students.
pub fn seed_activities() -> ActivityMap {
    let rows = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice drills and compete in interschool basketball games",
                "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
                15,
                &["james@mergington.edu"],
            ),
        ),
        (
            "Soccer Club",
            Activity::new(
                "Train together and play friendly soccer matches",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                22,
                &["lucas@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore painting, drawing and sculpture",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
                &["ava@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct and stage the school plays",
                "Thursdays, 3:30 PM - 5:30 PM",
                25,
                &["isabella@mergington.edu", "ethan@mergington.edu"],
            ),
        ),
        (
            "Math Club",
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                16,
                &["liam@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            Activity::new(
                "Build public speaking skills and compete in debate tournaments",
                "Fridays, 4:00 PM - 5:30 PM",
                14,
                &["charlotte@mergington.edu", "noah@mergington.edu"],
            ),
        ),
    ];

    rows.into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}
