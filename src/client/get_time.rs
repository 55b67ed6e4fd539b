use serde::Deserialize;

use crate::client;

#[derive(Deserialize, Debug)]
pub struct ClientTime {
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub utc_offset_hours: Option<i32>,
    #[serde(default)]
    pub datetime: String,
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    pub timezone: String,
}

pub fn new(base_url: String, timezone: String) -> Client {
    Client { base_url, timezone }
}

impl Client {
    pub async fn execute(self) -> Result<ClientTime, client::Error> {
        let body = client::Client::new()
            .get(
                &format!("{}/timezone/{}", self.base_url, self.timezone),
                None::<&()>,
            )
            .await?
            .text()
            .await?;
        return Ok(serde_json::from_str(&body)?);
    }
}
