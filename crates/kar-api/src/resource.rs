//! Generic CRUD over one REST resource.
//!
//! A resource is a marker type naming an endpoint path, the area that guards
//! it, and its record type. [`ApiClient`] methods are generic over it:
//!
//! | Operation    | Request                         |
//! |--------------|---------------------------------|
//! | `list`       | `GET  {path}?page=&limit=&...`  |
//! | `get`        | `GET  {path}/{id}`              |
//! | `create`     | `POST {path}`                   |
//! | `update`     | `PUT  {path}/{id}`              |
//! | `delete`     | `DELETE {path}/{id}`            |
//! | `set_status` | `PUT  {path}/{id}` `{"status"}` |

use kar_core::pagination::{ListParams, Page};
use kar_core::roles::Area;
use kar_core::status::Status;
use kar_core::workflow::{DocumentKind, check_transition};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::{ApiClient, encode_query, with_query};

/// A REST resource.
pub trait Resource {
    /// Endpoint path, with leading slash.
    const PATH: &'static str;
    /// Singular name used in messages and logs.
    const NAME: &'static str;
    /// Area whose roles may use the resource.
    const AREA: Area;

    type Record: DeserializeOwned + Serialize + Send;
}

/// A resource whose records move through a status workflow.
pub trait WorkflowResource: Resource {
    const KIND: DocumentKind;
}

/// A single record, bare or wrapped in `{ "data": ... }`.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum One<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> One<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

#[derive(Serialize)]
struct StatusBody {
    status: Status,
}

fn item_path<R: Resource>(id: &str) -> String {
    format!("{}/{}", R::PATH, urlencoding::encode(id))
}

impl ApiClient {
    /// One page of `R`, served from the list cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the API returns a
    /// non-success status, or the body is not a recognizable list.
    pub async fn list<R: Resource>(
        &self,
        params: &ListParams,
    ) -> Result<Page<R::Record>, ApiError> {
        let query = encode_query(&params.to_query());
        let body = if let Some(cached) = self.cache().get(R::PATH, &query) {
            tracing::debug!(resource = R::NAME, %query, "list served from cache");
            cached
        } else {
            let body: serde_json::Value = self.get_json(&with_query(R::PATH, &query)).await?;
            self.cache().put(R::PATH, &query, body.clone());
            body
        };
        serde_json::from_value(body).map_err(|e| ApiError::Parse(format!("{} list: {e}", R::NAME)))
    }

    /// Fetch one `R` by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn get<R: Resource>(&self, id: &str) -> Result<R::Record, ApiError> {
        let one: One<R::Record> = self.get_json(&item_path::<R>(id)).await?;
        Ok(one.into_inner())
    }

    /// Create an `R` from `body`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn create<R, B>(&self, body: &B) -> Result<R::Record, ApiError>
    where
        R: Resource,
        B: Serialize + ?Sized,
    {
        let one: One<R::Record> = self.send_json(Method::POST, R::PATH, body).await?;
        self.cache().invalidate(R::PATH);
        tracing::info!(resource = R::NAME, "created");
        Ok(one.into_inner())
    }

    /// Replace fields of an `R`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn update<R, B>(&self, id: &str, body: &B) -> Result<R::Record, ApiError>
    where
        R: Resource,
        B: Serialize + ?Sized,
    {
        let one: One<R::Record> = self.send_json(Method::PUT, &item_path::<R>(id), body).await?;
        self.cache().invalidate(R::PATH);
        tracing::info!(resource = R::NAME, id, "updated");
        Ok(one.into_inner())
    }

    /// Delete an `R`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or status failure.
    pub async fn delete<R: Resource>(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &item_path::<R>(id)).await?;
        self.cache().invalidate(R::PATH);
        tracing::info!(resource = R::NAME, id, "deleted");
        Ok(())
    }

    /// Move an `R` to status `to`.
    ///
    /// The backend decides whether the change is allowed. The current
    /// record is read first only to warn about a move its workflow does not
    /// list; a current status outside the known vocabulary skips that check.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure, including
    /// the backend refusing the change.
    pub async fn set_status<R: WorkflowResource>(
        &self,
        id: &str,
        to: Status,
    ) -> Result<R::Record, ApiError> {
        let current: One<serde_json::Value> = self.get_json(&item_path::<R>(id)).await?;
        if let Some(from) = current_status(&current.into_inner()) {
            if let Err(unlisted) = check_transition(R::KIND, id, from, to) {
                tracing::warn!(%unlisted, "sending anyway; the backend decides");
            }
        } else {
            tracing::debug!(resource = R::NAME, id, "current status not recognized");
        }

        let one: One<R::Record> = self
            .send_json(Method::PUT, &item_path::<R>(id), &StatusBody { status: to })
            .await?;
        self.cache().invalidate(R::PATH);
        tracing::info!(resource = R::NAME, id, %to, "status changed");
        Ok(one.into_inner())
    }
}

/// The record's status, when it is a spelling the vocabulary knows.
fn current_status(record: &serde_json::Value) -> Option<Status> {
    record.get("status")?.as_str().and_then(Status::recognize)
}
