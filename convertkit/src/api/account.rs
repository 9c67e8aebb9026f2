use crate::{transport::Transport, Client, Error};
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AccountResponse {
    pub name: String,
    #[serde(rename = "primary_email_address")]
    pub primary_email: String,
}

impl<T: Transport> Client<T> {
    /// Shows the account that owns the API secret.
    pub async fn account(&self) -> Result<AccountResponse, Error> {
        self.execute(Method::GET, "account", &()).await
    }
}
