use crate::client;

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
}

pub fn new(base_url: String) -> Client {
    Client { base_url }
}

impl Client {
    pub async fn execute(self) -> Result<Vec<String>, client::Error> {
        let body = client::Client::new()
            .get(&format!("{}/timezone", self.base_url), None::<&()>)
            .await?
            .text()
            .await?;
        return Ok(serde_json::from_str(&body)?);
    }
}
