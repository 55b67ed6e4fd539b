use std::sync::Arc;

use crate::domain::entities::Country;
use crate::domain::list_countries;
use crate::repository::country::Source;

pub struct Request {
    pub code: String,
}

#[derive(Debug, PartialEq)]
pub struct Response {
    pub country: Country,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    NotFound,
}

/// Directory lookup by ISO alpha-2 code. Runs over the listed snapshot, so
/// the embedded fallback is searched too when the source is down.
pub async fn execute(source: Arc<dyn Source>, req: Request) -> Result<Response, Error> {
    let countries = list_countries::execute(source).await;
    match countries
        .data
        .into_iter()
        .find(|country| country.code == req.code)
    {
        Some(country) => Ok(Response { country }),
        None => Err(Error::NotFound),
    }
}
