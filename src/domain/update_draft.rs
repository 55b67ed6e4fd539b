use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_trim::option_string_trim;

use crate::domain::entities::{AppointmentDraft, DraftUpdate};
use crate::domain::restamp_participants;
use crate::repository::session::Repository;

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Request {
    #[serde(default, deserialize_with = "option_string_trim")]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "option_string_trim")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "option_string_trim")]
    pub time: Option<String>,
    #[serde(default)]
    pub creator_offset: Option<i32>,
}

#[derive(Serialize, Debug)]
pub struct Response {
    pub draft: AppointmentDraft,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    Unknown,
}

/// Merges form edits into the draft. Whenever the fields that make up the
/// appointment instant change, the whole roster is restamped.
pub async fn execute(repo: Arc<dyn Repository>, req: Request) -> Result<Response, Error> {
    let instant_changed =
        req.date.is_some() || req.time.is_some() || req.creator_offset.is_some();

    let draft = match repo
        .update_draft(DraftUpdate {
            title: req.title,
            description: req.description,
            date: req.date,
            time: req.time,
            creator_offset: req.creator_offset,
        })
        .await
    {
        Ok(draft) => draft,
        Err(..) => return Err(Error::Unknown),
    };

    if instant_changed {
        if let Err(..) = restamp_participants::execute(repo).await {
            return Err(Error::Unknown);
        }
    }

    Ok(Response { draft })
}
