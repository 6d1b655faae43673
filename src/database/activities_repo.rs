use tokio::sync::RwLock;

use crate::database::seed;
use crate::error::SignupError;
use crate::models::{Activity, ActivityMap};

/// In-memory directory of activities keyed by name.
///
/// The set of activities is fixed at construction; only rosters change.
/// Every mutation holds the write lock across its membership check, so two
/// concurrent signups for the same email cannot both succeed.
pub struct ActivityDirectory {
    activities: RwLock<ActivityMap>,
    baseline: ActivityMap,
}

impl ActivityDirectory {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            baseline: activities.clone(),
            activities: RwLock::new(activities),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub async fn list(&self) -> ActivityMap {
        self.activities.read().await.clone()
    }

    pub async fn get(&self, activity_name: &str) -> Option<Activity> {
        self.activities.read().await.get(activity_name).cloned()
    }

    pub async fn enroll(&self, activity_name: &str, email: &str) -> Result<(), SignupError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(SignupError::ActivityNotFound)?;

        if activity.has_participant(email) {
            return Err(SignupError::DuplicateParticipant);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    pub async fn withdraw(&self, activity_name: &str, email: &str) -> Result<(), SignupError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(SignupError::ActivityNotFound)?;

        let Some(index) = activity.participants.iter().position(|p| p == email) else {
            return Err(SignupError::ParticipantNotFound);
        };

        activity.participants.remove(index);
        Ok(())
    }

    /// Restore every roster to the state captured at construction.
    pub async fn reset(&self) {
        *self.activities.write().await = self.baseline.clone();
    }
}

impl Default for ActivityDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}
