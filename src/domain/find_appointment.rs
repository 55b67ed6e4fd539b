use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{AppointmentDraft, Participant};
use crate::repository::session::Repository;

#[derive(Serialize, Debug)]
pub struct Response {
    pub draft: AppointmentDraft,
    pub participants: Vec<Participant>,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    Unknown,
}

/// Current state of the appointment being composed: the draft fields plus
/// the ordered roster with whatever local-time stamps exist so far.
pub async fn execute(repo: Arc<dyn Repository>) -> Result<Response, Error> {
    let draft = match repo.get_draft().await {
        Ok(draft) => draft,
        Err(..) => return Err(Error::Unknown),
    };
    let participants = match repo.list_participants().await {
        Ok(participants) => participants,
        Err(..) => return Err(Error::Unknown),
    };
    Ok(Response {
        draft,
        participants,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mocks;
    use crate::repository::session::InMemoryRepository;

    #[tokio::test]
    async fn it_should_return_the_draft_and_the_ordered_roster() {
        let repo = Arc::new(InMemoryRepository::new());

        let first = mocks::insert_mock_participant(repo.clone()).await;
        let second = mocks::insert_mock_participant(repo.clone()).await;
        if let Err(..) = repo.update_draft(mocks::mock_draft_update()).await {
            unreachable!("draft must be updated for this test")
        }

        let result = execute(repo).await;

        match result {
            Ok(Response {
                draft,
                participants,
            }) => {
                assert_eq!(draft.title, "Sync");
                assert_eq!(
                    participants
                        .iter()
                        .map(|participant| participant.id)
                        .collect::<Vec<u32>>(),
                    vec![first.id, second.id]
                );
            }
            _ => unreachable!(),
        }
    }
}
