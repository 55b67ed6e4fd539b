use serde::{Deserialize, Serialize};

use crate::client;

#[derive(Serialize, Debug)]
pub struct ClientQuery {
    pub fields: String,
}

#[derive(Deserialize, Debug)]
pub struct ClientCountry {
    pub name: ClientName,
    pub cca2: String,
    #[serde(default = "Vec::new")]
    pub timezones: Vec<String>,
    #[serde(default = "Vec::new")]
    pub capital: Vec<String>,
}

#[derive(Deserialize, Debug)]
pub struct ClientName {
    pub common: String,
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
}

pub fn new(base_url: String) -> Client {
    Client { base_url }
}

impl Client {
    pub async fn execute(self) -> Result<Vec<ClientCountry>, client::Error> {
        let body = client::Client::new()
            .get(
                &format!("{}/all", self.base_url),
                Some(&ClientQuery {
                    fields: "name,cca2,timezones,capital".to_string(),
                }),
            )
            .await?
            .text()
            .await?;
        return Ok(serde_json::from_str(&body)?);
    }
}
