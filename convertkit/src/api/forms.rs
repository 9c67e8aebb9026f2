use crate::{models::Form, transport::Transport, Client, Error};
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct FormsResponse {
    pub forms: Vec<Form>,
}

impl<T: Transport> Client<T> {
    /// Lists the forms of the account.
    pub async fn forms(&self) -> Result<FormsResponse, Error> {
        self.execute(Method::GET, "forms", &()).await
    }
}
