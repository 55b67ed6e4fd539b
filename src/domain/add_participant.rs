use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_trim::string_trim;

use crate::domain::entities::{Participant, ParticipantCreation};
use crate::domain::find_country;
use crate::repository::country::Source;
use crate::repository::session::Repository;

#[derive(Deserialize, Clone, Debug)]
pub struct Request {
    #[serde(deserialize_with = "string_trim")]
    pub name: String,
    #[serde(deserialize_with = "string_trim")]
    pub email: String,
    #[serde(deserialize_with = "string_trim")]
    pub country_code: String,
}

#[derive(Serialize, Debug)]
pub struct Response {
    pub participant: Participant,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    BadRequest,
    Unknown,
}

/// Appends a participant to the roster. Name, email and a resolvable
/// country code are all mandatory; a rejected request leaves the roster
/// untouched. When the draft instant is already known the new entry is
/// stamped with its local meeting time right away.
pub async fn execute(
    repo: Arc<dyn Repository>,
    source: Arc<dyn Source>,
    req: Request,
) -> Result<Response, Error> {
    if req.name.is_empty() || req.email.is_empty() || req.country_code.is_empty() {
        return Err(Error::BadRequest);
    }

    let country = match find_country::execute(
        source,
        find_country::Request {
            code: req.country_code,
        },
    )
    .await
    {
        Ok(response) => response.country,
        Err(find_country::Error::NotFound) => return Err(Error::BadRequest),
    };

    let draft = match repo.get_draft().await {
        Ok(draft) => draft,
        Err(..) => return Err(Error::Unknown),
    };
    let local_time = draft
        .instant()
        .map(|instant| instant.format_at(country.offset));

    match repo
        .insert_participant(ParticipantCreation {
            name: req.name,
            email: req.email,
            country,
            local_time,
        })
        .await
    {
        Ok(participant) => Ok(Response { participant }),
        Err(..) => Err(Error::Unknown),
    }
}
