use tracing::{debug, info, warn};

use crate::database::ActivityDirectory;
use crate::error::SignupError;
use crate::models::{ActivityMap, MessageResponse};

pub async fn list_activities(directory: &ActivityDirectory) -> ActivityMap {
    directory.list().await
}

pub async fn signup(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, SignupError> {
    if let Err(e) = directory.enroll(activity_name, email).await {
        debug!(activity = %activity_name, email = %email, "signup rejected");
        warn!(activity = %activity_name, "signup rejected: {}", e);
        return Err(e);
    }

    debug!(activity = %activity_name, email = %email, "signup accepted");
    info!(activity = %activity_name, "participant signed up");
    Ok(MessageResponse {
        message: format!("Signed up {} for {}", email, activity_name),
    })
}

pub async fn unregister(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, SignupError> {
    if let Err(e) = directory.withdraw(activity_name, email).await {
        debug!(activity = %activity_name, email = %email, "unregister rejected");
        warn!(activity = %activity_name, "unregister rejected: {}", e);
        return Err(e);
    }

    debug!(activity = %activity_name, email = %email, "unregister accepted");
    info!(activity = %activity_name, "participant unregistered");
    Ok(MessageResponse {
        message: format!("Unregistered {} from {}", email, activity_name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn signup_confirms_with_message() {
        let directory = ActivityDirectory::seeded();
        let response = signup(&directory, "Basketball Team", "newstudent@mergington.edu")
            .await
            .unwrap();
        assert_eq!(
            response.message,
            "Signed up newstudent@mergington.edu for Basketball Team"
        );

        let activities = list_activities(&directory).await;
        assert_eq!(
            activities["Basketball Team"].participants.last().map(String::as_str),
            Some("newstudent@mergington.edu")
        );
    }

    #[tokio::test]
    async fn unregister_confirms_with_message() {
        let directory = ActivityDirectory::seeded();
        let response = unregister(&directory, "Drama Club", "isabella@mergington.edu")
            .await
            .unwrap();
        assert_eq!(
            response.message,
            "Unregistered isabella@mergington.edu from Drama Club"
        );
        assert!(!directory
            .get("Drama Club")
            .await
            .unwrap()
            .has_participant("isabella@mergington.edu"));
    }

    #[tokio::test]
    async fn rejections_pass_through() {
        let directory = ActivityDirectory::seeded();
        assert_eq!(
            signup(&directory, "Soccer Club", "lucas@mergington.edu").await,
            Err(SignupError::DuplicateParticipant)
        );
        assert_eq!(
            unregister(&directory, "Math Club", "missing@mergington.edu").await,
            Err(SignupError::ParticipantNotFound)
        );
        assert_eq!(
            signup(&directory, "Unknown", "test@mergington.edu").await,
            Err(SignupError::ActivityNotFound)
        );
    }
}
