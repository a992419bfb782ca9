use async_graphql::{Context, SimpleObject, Subscription};
use futures_util::StreamExt;
use futures_util::stream::{self, BoxStream};
use tokio::sync::mpsc;

use crate::modules::material_tracking::adapters::inbound::graphql::GqlMaterial;
use crate::modules::material_tracking::use_cases::watch_order_materials::feed::MaterialFeed;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "MaterialFeed")]
pub struct GqlMaterialFeed {
    /// False when the order does not exist or the feed failed.
    pub found: bool,
    pub materials: Vec<GqlMaterial>,
    pub error: Option<String>,
}

impl From<MaterialFeed> for GqlMaterialFeed {
    fn from(v: MaterialFeed) -> Self {
        match v {
            MaterialFeed::Materials(materials) => Self {
                found: true,
                materials: materials.into_iter().map(Into::into).collect(),
                error: None,
            },
            MaterialFeed::NotFound => Self {
                found: false,
                materials: vec![],
                error: None,
            },
            MaterialFeed::Error(message) => Self {
                found: false,
                materials: vec![],
                error: Some(message),
            },
        }
    }
}

#[derive(Default)]
pub struct MaterialSubscription;

#[Subscription]
impl MaterialSubscription {
    /// The store watch is released when the client goes away and the stream
    /// is dropped.
    async fn order_materials(
        &self,
        context: &Context<'_>,
        order_id: String,
    ) -> BoxStream<'static, GqlMaterialFeed> {
        let state = context.data_unchecked::<AppState>();
        let (tx, rx) = mpsc::unbounded_channel();
        let subscription = state
            .sync
            .subscribe(&order_id, move |feed| {
                let _ = tx.send(feed);
            })
            .await;

        stream::unfold((rx, subscription), |(mut rx, subscription)| async move {
            let feed = rx.recv().await?;
            Some((GqlMaterialFeed::from(feed), (rx, subscription)))
        })
        .boxed()
    }
}
