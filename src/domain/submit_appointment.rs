use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::Participant;
use crate::domain::restamp_participants;
use crate::repository::session::Repository;

#[derive(Serialize, Debug)]
pub struct Response {
    pub title: String,
    pub notified: u32,
    pub participants: Vec<Participant>,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    EmptyRoster,
    IncompleteDraft,
    Unknown,
}

/// Consumes the draft: every participant gets a final local-time stamp, the
/// notified count is reported, and both the draft and the roster are reset.
/// A rejection leaves everything exactly as it was so the form can be
/// corrected and resubmitted.
pub async fn execute(repo: Arc<dyn Repository>) -> Result<Response, Error> {
    let participants = match repo.list_participants().await {
        Ok(participants) => participants,
        Err(..) => return Err(Error::Unknown),
    };
    if participants.is_empty() {
        return Err(Error::EmptyRoster);
    }

    let draft = match repo.get_draft().await {
        Ok(draft) => draft,
        Err(..) => return Err(Error::Unknown),
    };
    if draft.instant().is_none() {
        return Err(Error::IncompleteDraft);
    }

    if let Err(..) = restamp_participants::execute(repo.clone()).await {
        return Err(Error::Unknown);
    }
    let participants = match repo.list_participants().await {
        Ok(participants) => participants,
        Err(..) => return Err(Error::Unknown),
    };

    if let Err(..) = repo.reset().await {
        return Err(Error::Unknown);
    }

    Ok(Response {
        title: draft.title,
        notified: participants.len() as u32,
        participants,
    })
}
