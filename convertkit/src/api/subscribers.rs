use crate::{
    models::{Date, SortOrder, Subscriber},
    transport::Transport,
    Client, Error,
};
use async_gen::gen;
use futures_core::Stream;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Filters for [`Client::subscribers`]. Every field is optional.
///
/// Dates are sent as `yyyy-mm-dd`, so anything finer than a day is lost.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct SubscribersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_from: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_to: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,
    #[serde(rename = "email_address", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SubscribersResponse {
    pub total_subscribers: u64,
    pub page: u32,
    pub total_pages: u32,
    pub subscribers: Vec<Subscriber>,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct UpdateSubscriberRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "email_address", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SubscriberResponse {
    pub subscriber: Subscriber,
}

#[derive(Serialize)]
struct Unsubscribe<'a> {
    email: &'a str,
}

impl<T: Transport> Client<T> {
    /// Lists one page of subscribers.
    pub async fn subscribers(&self, req: &SubscribersRequest) -> Result<SubscribersResponse, Error> {
        self.execute(Method::GET, "subscribers", req).await
    }

    /// Streams every subscriber matching `req`, page by page, starting from
    /// `req.page` (or the first page).
    ///
    /// The stream ends after the last page or right after yielding the first
    /// error.
    ///
    /// ## Example
    ///
    /// ```no_run
    /// use futures_util::StreamExt;
    /// use convertkit::{Client, SubscribersRequest};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), convertkit::Error> {
    ///     let client = Client::new("my-api-secret")?;
    ///     let stream = client.all_subscribers(SubscribersRequest::default());
    ///
    ///     stream
    ///         .for_each(|subscriber| async move {
    ///             match subscriber {
    ///                 Ok(subscriber) => println!("{}", subscriber.email),
    ///                 Err(err) => eprintln!("{err}"),
    ///             }
    ///         })
    ///         .await;
    ///
    ///     Ok(())
    /// }
    /// ```
    pub fn all_subscribers(
        &self,
        req: SubscribersRequest,
    ) -> impl Stream<Item = Result<Subscriber, Error>> + '_ {
        let mut req = req;
        let mut page = req.page.unwrap_or(1);

        let g = gen! {
            loop {
                req.page = Some(page);
                let resp = match self.subscribers(&req).await {
                    Ok(r) => r,
                    Err(e) => {
                        yield Err(e);
                        break;
                    }
                };

                if resp.subscribers.is_empty() {
                    break;
                }

                let total_pages = resp.total_pages;
                for subscriber in resp.subscribers.into_iter() {
                    yield Ok(subscriber);
                }

                if page >= total_pages {
                    break;
                }
                page += 1;
            }

            ()
        };

        g.into_async_iter()
    }

    /// Updates the given subscriber. Only the fields that are set are sent.
    pub async fn update_subscriber(
        &self,
        subscriber_id: u64,
        req: &UpdateSubscriberRequest,
    ) -> Result<SubscriberResponse, Error> {
        self.execute(Method::PUT, &format!("subscribers/{subscriber_id}"), req)
            .await
    }

    /// Unsubscribes an email address from everything.
    pub async fn unsubscribe_subscriber(&self, email: &str) -> Result<SubscriberResponse, Error> {
        self.execute(Method::PUT, "unsubscribe", &Unsubscribe { email })
            .await
    }
}
