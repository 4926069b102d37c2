//! Query types for the paginated asset-list methods.

use crate::error::ReadApiError;
use serde::{Deserialize, Serialize};

/// Page number used when the caller sets none.
pub const DEFAULT_PAGE: u32 = 1;

// ─── Pagination ─────────────────────────────────────────────────────────────

/// Pagination for `getAssetsByOwner` / `getAssetsByGroup`.
///
/// Either page-based or cursor-based: a page number cannot be combined with a
/// `before` or `after` cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub page: Option<u32>,
    pub before: Option<String>,
    pub after: Option<String>,
}

impl Pagination {
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Default::default()
        }
    }

    pub fn before(cursor: impl Into<String>) -> Self {
        Self {
            before: Some(cursor.into()),
            ..Default::default()
        }
    }

    pub fn after(cursor: impl Into<String>) -> Self {
        Self {
            after: Some(cursor.into()),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ReadApiError> {
        if self.page.is_some() && (self.before.is_some() || self.after.is_some()) {
            return Err(ReadApiError::InvalidPagination(
                "page cannot be combined with a before/after cursor".to_string(),
            ));
        }
        Ok(())
    }
}

// ─── Sorting ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetSortField {
    Created,
    Updated,
    RecentAction,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetSortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSortBy {
    pub sort_by: AssetSortField,
    pub sort_direction: AssetSortDirection,
}

// ─── Wire params ────────────────────────────────────────────────────────────

/// `getAssetsByOwner` params. Unset optionals serialize as explicit `null`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetAssetsByOwnerParams {
    pub owner_address: String,
    pub page: u32,
    pub before: Option<String>,
    pub after: Option<String>,
    pub limit: Option<u32>,
    pub sort_by: Option<AssetSortBy>,
}

impl GetAssetsByOwnerParams {
    /// Validate pagination and fill defaults.
    pub fn new(
        owner_address: String,
        pagination: Pagination,
        sort_by: Option<AssetSortBy>,
        limit: Option<u32>,
    ) -> Result<Self, ReadApiError> {
        pagination.validate()?;
        Ok(Self {
            owner_address,
            page: pagination.page.unwrap_or(DEFAULT_PAGE),
            before: pagination.before,
            after: pagination.after,
            limit,
            sort_by,
        })
    }
}

/// `getAssetsByGroup` params. Unset optionals serialize as explicit `null`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetAssetsByGroupParams {
    pub group_key: String,
    pub group_value: String,
    pub page: u32,
    pub before: Option<String>,
    pub after: Option<String>,
    pub limit: Option<u32>,
    pub sort_by: Option<AssetSortBy>,
}

impl GetAssetsByGroupParams {
    /// Validate pagination and fill defaults.
    pub fn new(
        group_key: String,
        group_value: String,
        pagination: Pagination,
        sort_by: Option<AssetSortBy>,
        limit: Option<u32>,
    ) -> Result<Self, ReadApiError> {
        pagination.validate()?;
        Ok(Self {
            group_key,
            group_value,
            page: pagination.page.unwrap_or(DEFAULT_PAGE),
            before: pagination.before,
            after: pagination.after,
            limit,
            sort_by,
        })
    }
}

/// `getAsset` / `getAssetProof` params.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AssetIdParams {
    pub id: String,
}
