use crate::{
    models::{SortOrder, SubscriberState, Subscription, Tag},
    transport::Transport,
    Client, Error,
};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Subscribes an email address to a form, a sequence or a tag.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct SubscribeRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
    /// Extra tags to apply to the subscriber.
    #[serde(rename = "tags", skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<u64>,
}

impl SubscribeRequest {
    pub fn new<S: Into<String>>(email: S) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SubscriptionResponse {
    pub subscription: Subscription,
}

/// Filters for the `*_subscriptions` listings.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct SubscriptionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_state: Option<SubscriberState>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SubscriptionsResponse {
    pub total_subscriptions: u64,
    pub page: u32,
    pub total_pages: u32,
    pub subscriptions: Vec<Subscription>,
}

impl<T: Transport> Client<T> {
    pub async fn subscribe_to_form(
        &self,
        form_id: u64,
        req: &SubscribeRequest,
    ) -> Result<SubscriptionResponse, Error> {
        self.execute(Method::POST, &format!("forms/{form_id}/subscribe"), req)
            .await
    }

    pub async fn form_subscriptions(
        &self,
        form_id: u64,
        req: &SubscriptionsRequest,
    ) -> Result<SubscriptionsResponse, Error> {
        self.execute(Method::GET, &format!("forms/{form_id}/subscriptions"), req)
            .await
    }

    pub async fn subscribe_to_sequence(
        &self,
        sequence_id: u64,
        req: &SubscribeRequest,
    ) -> Result<SubscriptionResponse, Error> {
        self.execute(
            Method::POST,
            &format!("sequences/{sequence_id}/subscribe"),
            req,
        )
        .await
    }

    pub async fn sequence_subscriptions(
        &self,
        sequence_id: u64,
        req: &SubscriptionsRequest,
    ) -> Result<SubscriptionsResponse, Error> {
        self.execute(
            Method::GET,
            &format!("sequences/{sequence_id}/subscriptions"),
            req,
        )
        .await
    }

    /// Tags an email address, creating the subscriber if needed.
    pub async fn tag_subscriber(
        &self,
        tag_id: u64,
        req: &SubscribeRequest,
    ) -> Result<SubscriptionResponse, Error> {
        self.execute(Method::POST, &format!("tags/{tag_id}/subscribe"), req)
            .await
    }

    pub async fn tag_subscriptions(
        &self,
        tag_id: u64,
        req: &SubscriptionsRequest,
    ) -> Result<SubscriptionsResponse, Error> {
        self.execute(Method::GET, &format!("tags/{tag_id}/subscriptions"), req)
            .await
    }

    /// Removes a tag from a subscriber and returns the removed tag.
    pub async fn untag_subscriber(&self, subscriber_id: u64, tag_id: u64) -> Result<Tag, Error> {
        self.execute(
            Method::DELETE,
            &format!("subscribers/{subscriber_id}/tags/{tag_id}"),
            &(),
        )
        .await
    }
}
