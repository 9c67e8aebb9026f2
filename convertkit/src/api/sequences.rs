use crate::{models::Sequence, transport::Transport, Client, Error};
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SequencesResponse {
    // Sequences used to be called courses and the payload still says so.
    #[serde(rename = "courses")]
    pub sequences: Vec<Sequence>,
}

impl<T: Transport> Client<T> {
    /// Lists the sequences of the account.
    pub async fn sequences(&self) -> Result<SequencesResponse, Error> {
        self.execute(Method::GET, "sequences", &()).await
    }
}
