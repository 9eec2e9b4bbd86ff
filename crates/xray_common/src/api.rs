//! REST seam for the anatomy API.
//!
//! The browser client implements [`PartsApi`] over `fetch`; tests use an
//! in-memory table. [`resolve_part`] holds the lookup logic both share.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::model::{Bone, Part, PartData};

/// Read access to the two endpoints the companion needs.
#[async_trait(?Send)]
pub trait PartsApi {
    /// `GET /partes`
    async fn parts(&self) -> Result<Vec<Part>, ApiError>;

    /// `GET /partes/{part_id}/huesos`
    async fn bones(&self, part_id: u64) -> Result<Vec<Bone>, ApiError>;
}

/// URL of the part collection under `base`.
pub fn parts_url(base: &str) -> String {
    format!("{}/partes", base.trim_end_matches('/'))
}

/// URL of the bones owned by `part_id` under `base`.
pub fn bones_url(base: &str, part_id: u64) -> String {
    format!("{}/partes/{}/huesos", base.trim_end_matches('/'), part_id)
}

/// Look up the part called `name` and fetch its bones.
///
/// Returns `None` when no part has that name or when either request fails;
/// failures are logged and never surfaced further.
pub async fn resolve_part<A>(api: &A, name: &str) -> Option<PartData>
where
    A: PartsApi + ?Sized,
{
    match try_resolve_part(api, name).await {
        Ok(Some(data)) => Some(data),
        Ok(None) => {
            log::warn!("No part named `{}` in the API collection", name);
            None
        }
        Err(e) => {
            log::error!("Failed to fetch data for `{}` from the API: {}", name, e);
            None
        }
    }
}

async fn try_resolve_part<A>(api: &A, name: &str) -> Result<Option<PartData>, ApiError>
where
    A: PartsApi + ?Sized,
{
    let parts = api.parts().await?;
    let Some(part) = parts.into_iter().find(|p| p.name == name) else {
        return Ok(None);
    };
    let bones = api.bones(part.id).await?;
    Ok(Some(PartData::new(part, bones)))
}
