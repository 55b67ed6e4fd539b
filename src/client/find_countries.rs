use crate::client;
use crate::client::get_countries::ClientCountry;

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    pub query: String,
}

pub fn new(base_url: String, query: String) -> Client {
    Client { base_url, query }
}

impl Client {
    pub async fn execute(self) -> Result<Vec<ClientCountry>, client::Error> {
        let body = client::Client::new()
            .get(
                &format!("{}/name/{}", self.base_url, self.query),
                None::<&()>,
            )
            .await?
            .text()
            .await?;
        return Ok(serde_json::from_str(&body)?);
    }
}
