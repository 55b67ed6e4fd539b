use std::sync::Arc;

use serde::Serialize;

use crate::repository::errors::DeleteError;
use crate::repository::session::Repository;

pub struct Request {
    pub id: u32,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Response {
    pub removed: bool,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    Unknown,
}

/// Removes the matching roster entry. An unknown id is not an error, the
/// roster simply stays as it is.
pub async fn execute(repo: Arc<dyn Repository>, req: Request) -> Result<Response, Error> {
    match repo.delete_participant(req.id).await {
        Ok(..) => Ok(Response { removed: true }),
        Err(DeleteError::NotFound) => Ok(Response { removed: false }),
        Err(DeleteError::Unknown) => Err(Error::Unknown),
    }
}
