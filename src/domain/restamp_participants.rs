use std::sync::Arc;

use crate::repository::session::Repository;

#[derive(Debug, PartialEq)]
pub struct Response {
    pub stamped: u32,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    Unknown,
}

/// Recomputes every participant's local meeting time against the current
/// draft instant, so displayed times never go stale. While the draft is
/// incomplete there is nothing to stamp and the roster is left as it is;
/// already stamped values are never cleared.
pub async fn execute(repo: Arc<dyn Repository>) -> Result<Response, Error> {
    let draft = match repo.get_draft().await {
        Ok(draft) => draft,
        Err(..) => return Err(Error::Unknown),
    };
    let instant = match draft.instant() {
        Some(instant) => instant,
        None => return Ok(Response { stamped: 0 }),
    };

    let participants = match repo.list_participants().await {
        Ok(participants) => participants,
        Err(..) => return Err(Error::Unknown),
    };

    let stamps: Vec<(u32, String)> = participants
        .iter()
        .map(|participant| {
            (
                participant.id,
                instant.format_at(participant.country.offset),
            )
        })
        .collect();
    let stamped = stamps.len() as u32;

    match repo.stamp_participants(stamps).await {
        Ok(..) => Ok(Response { stamped }),
        Err(..) => Err(Error::Unknown),
    }
}
