//! Custom object queries.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;

use crate::client::{ClientInner, NO_BODY};
use crate::error::require;
use crate::models::{Attributes, CustomObjectType};
use crate::Result;

/// Service for custom object types and instances.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: customerio::ApiClient) -> customerio::Result<()> {
/// use customerio::models::{AttributeCondition, Filter};
///
/// let types = client.objects().list_types().await?;
/// if let Some(ty) = types.first() {
///     let filter = Filter::any([AttributeCondition::equals("industry", "retail")]);
///     for id in client.objects().find(&ty.id, &filter).await? {
///         let attrs = client.objects().attributes(&ty.id, &id).await?;
///         println!("{id}: {attrs:?}");
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct ObjectsService {
    inner: Arc<ClientInner>,
}

impl ObjectsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the custom object types defined in the workspace.
    pub async fn list_types(&self) -> Result<Vec<CustomObjectType>> {
        #[derive(serde::Deserialize)]
        struct Response {
            types: Vec<CustomObjectType>,
        }

        let url = self.inner.endpoint("/v1/object_types")?;
        let response: Response = self
            .inner
            .request(Method::GET, url, NO_BODY)
            .await?
            .decode()?;
        Ok(response.types)
    }

    /// Find the ids of objects of one type matching a filter.
    ///
    /// `filter` is any JSON-serializable filter document, typically a
    /// [`Filter`](crate::models::Filter).
    pub async fn find<F: Serialize>(
        &self,
        object_type_id: &str,
        filter: &F,
    ) -> Result<Vec<String>> {
        require("object_type_id", object_type_id)?;

        #[derive(Serialize)]
        struct Request<'a, F> {
            object_type_id: &'a str,
            filter: &'a F,
        }

        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            ids: Vec<String>,
        }

        let url = self.inner.endpoint("/v1/objects")?;
        let body = Request {
            object_type_id,
            filter,
        };
        let response: Response = self
            .inner
            .request(Method::POST, url, Some(&body))
            .await?
            .decode()?;
        Ok(response.ids)
    }

    /// Fetch the attributes of a single object.
    pub async fn attributes(&self, object_type_id: &str, object_id: &str) -> Result<Attributes> {
        require("object_type_id", object_type_id)?;
        require("object_id", object_id)?;

        #[derive(serde::Deserialize)]
        struct Response {
            object: Object,
        }

        #[derive(serde::Deserialize)]
        struct Object {
            #[serde(default)]
            attributes: Attributes,
        }

        let url = self.inner.endpoint(&format!(
            "/v1/objects/{}/{}/attributes",
            urlencoding::encode(object_type_id),
            urlencoding::encode(object_id)
        ))?;
        let response: Response = self
            .inner
            .request(Method::GET, url, NO_BODY)
            .await?
            .decode()?;
        Ok(response.object.attributes)
    }
}
