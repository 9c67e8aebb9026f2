//! A typed client for the ConvertKit v3 API.
//!
//! Requests are plain structs, responses are decoded into typed results and
//! every error, whether it comes from the network or from ConvertKit, ends up
//! in a single [`Error`] enum.
//!
//! ## Example
//!
//! ```no_run
//! use convertkit::{Client, SubscribeRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("api-secret-abcd1234")?;
//!
//!     let forms = client.forms().await?;
//!     if let Some(form) = forms.forms.first() {
//!         let resp = client
//!             .subscribe_to_form(form.id, &SubscribeRequest::new("jonsnow@example.com"))
//!             .await?;
//!         println!("Subscription {} is {}", resp.subscription.id, resp.subscription.state);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod models;
pub mod params;
pub mod transport;

pub use api::{
    account::AccountResponse,
    forms::FormsResponse,
    sequences::SequencesResponse,
    subscribers::{
        SubscriberResponse, SubscribersRequest, SubscribersResponse, UpdateSubscriberRequest,
    },
    subscriptions::{
        SubscribeRequest, SubscriptionResponse, SubscriptionsRequest, SubscriptionsResponse,
    },
    tags::{CreateTagsResponse, TagsResponse},
};
pub use client::{Client, DEFAULT_BASE_URL};
pub use error::{BuildError, Error, TransportError};
pub use models::{
    Date, ErrorResponse, Form, Sequence, SortOrder, Subscriber, SubscriberState, Subscription, Tag,
};
pub use transport::{HttpRequest, HttpResponse, Transport};
