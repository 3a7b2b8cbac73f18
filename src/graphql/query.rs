use crate::graphql::error::GatewayError;
use crate::hn::{checked_page, FeedItem, FeedKind, HnClient, Item, User};
use async_graphql::{Context, ErrorExtensions, Object, Result};

/// Root `Query` type. Every field maps to exactly one upstream GET.
///
/// All fields are nullable so that a failing upstream call nulls only
/// its own field and leaves siblings intact.
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// A story, comment, job or poll by id, with its comment tree.
    async fn item(&self, ctx: &Context<'_>, id: i64) -> Result<Option<Item>> {
        let client = ctx.data::<HnClient>()?;
        client
            .item(id)
            .await
            .map_err(|e| GatewayError::from(e).extend())
    }

    /// A user profile by username.
    async fn user(&self, ctx: &Context<'_>, id: String) -> Result<Option<User>> {
        let client = ctx.data::<HnClient>()?;
        client
            .user(&id)
            .await
            .map_err(|e| GatewayError::from(e).extend())
    }

    /// One page of a feed listing: news (1-10), newest (1-12), ask (1-2), show (1-2) or jobs (1).
    async fn feeds(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "type")] kind: String,
        index: i64,
    ) -> Result<Option<Vec<FeedItem>>> {
        feed_page(ctx, &kind, index).await
    }

    #[graphql(deprecation = "Use `feeds(type: \"news\", index: ...)` instead.")]
    async fn news(&self, ctx: &Context<'_>, index: i64) -> Result<Option<Vec<FeedItem>>> {
        feed_page(ctx, FeedKind::News.as_str(), index).await
    }

    #[graphql(deprecation = "Use `feeds(type: \"newest\", index: ...)` instead.")]
    async fn newest(&self, ctx: &Context<'_>, index: i64) -> Result<Option<Vec<FeedItem>>> {
        feed_page(ctx, FeedKind::Newest.as_str(), index).await
    }

    #[graphql(deprecation = "Use `feeds(type: \"ask\", index: ...)` instead.")]
    async fn ask(&self, ctx: &Context<'_>, index: i64) -> Result<Option<Vec<FeedItem>>> {
        feed_page(ctx, FeedKind::Ask.as_str(), index).await
    }

    #[graphql(deprecation = "Use `feeds(type: \"show\", index: ...)` instead.")]
    async fn show(&self, ctx: &Context<'_>, index: i64) -> Result<Option<Vec<FeedItem>>> {
        feed_page(ctx, FeedKind::Show.as_str(), index).await
    }

    #[graphql(deprecation = "Use `feeds(type: \"jobs\", index: ...)` instead.")]
    async fn jobs(&self, ctx: &Context<'_>, index: i64) -> Result<Option<Vec<FeedItem>>> {
        feed_page(ctx, FeedKind::Jobs.as_str(), index).await
    }
}

async fn feed_page(ctx: &Context<'_>, kind: &str, index: i64) -> Result<Option<Vec<FeedItem>>> {
    let Some(feed) = checked_page(kind, index) else {
        tracing::info!(kind = %kind, index, "Rejected feed page outside the page table");
        return Err(GatewayError::Validation {
            kind: kind.to_string(),
            index,
        }
        .extend());
    };

    let client = ctx.data::<HnClient>()?;
    client
        .feed(feed, index)
        .await
        .map(Some)
        .map_err(|e| GatewayError::from(e).extend())
}
