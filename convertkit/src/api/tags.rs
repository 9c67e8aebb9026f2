use crate::{models::Tag, transport::Transport, Client, Error};
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TagsResponse {
    pub tags: Vec<Tag>,
}

/// Tags created by [`Client::create_tags`].
///
/// ConvertKit answers with a bare object when one tag was created and with an
/// array otherwise. Both shapes end up in `tags`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(from = "CreatedTags")]
pub struct CreateTagsResponse {
    pub tags: Vec<Tag>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CreatedTags {
    Many(Vec<Tag>),
    One(Tag),
}

impl From<CreatedTags> for CreateTagsResponse {
    fn from(created: CreatedTags) -> Self {
        let tags = match created {
            CreatedTags::Many(tags) => tags,
            CreatedTags::One(tag) => vec![tag],
        };
        Self { tags }
    }
}

#[derive(Serialize)]
struct NewTags {
    tag: Vec<NewTag>,
}

#[derive(Serialize)]
struct NewTag {
    name: String,
}

impl<T: Transport> Client<T> {
    /// Lists the tags of the account.
    pub async fn tags(&self) -> Result<TagsResponse, Error> {
        self.execute(Method::GET, "tags", &()).await
    }

    /// Creates one tag per name, returned in the order ConvertKit reports them.
    ///
    /// ## Example
    ///
    /// ```no_run
    /// use convertkit::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), convertkit::Error> {
    ///     let client = Client::new("my-api-secret")?;
    ///     let created = client.create_tags(["beginner", "paid-course"]).await?;
    ///     for tag in created.tags {
    ///         println!("{} {}", tag.id, tag.name);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_tags<I, S>(&self, names: I) -> Result<CreateTagsResponse, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let data = NewTags {
            tag: names
                .into_iter()
                .map(|name| NewTag { name: name.into() })
                .collect(),
        };
        self.execute(Method::POST, "tags", &data).await
    }
}
