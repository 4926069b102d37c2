//! # cnft-read-api
//!
//! A Rust SDK for the Solana compressed-asset read API (DAS) and the asset
//! views built from its responses.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Wire types, views, transformers, PDA derivation (always available)
//! 2. **RPC** — JSON-RPC envelope, `RpcTransport` seam, `ReadApi` capability trait
//! 3. **HTTP** — `HttpTransport` over reqwest, opt-in `RetryingTransport`
//! 4. **Client** — `ReadApiClient`, the `ReadApi` implementation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cnft_read_api::prelude::*;
//!
//! let client = ReadApiClient::builder("https://devnet.helius-rpc.com/?api-key=...")
//!     .build()?;
//!
//! let asset = client.get_asset(&asset_id).await?;
//! let metadata = to_metadata_view(&asset)?;
//! println!("{} in {:?}", metadata.name, metadata.collection);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): wire types, views, conversions.
pub mod domain;

/// Bubblegum program constants and PDA derivation.
pub mod program;

/// Pure asset → view transformers.
pub mod transform;

/// Unified SDK error types.
pub mod error;

// ── Layer 2: RPC ─────────────────────────────────────────────────────────────

/// JSON-RPC plumbing and the `ReadApi` trait.
pub mod rpc;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// HTTP transport with an opt-in retry layer.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: Client ──────────────────────────────────────────────────────────

/// `ReadApiClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::PubkeyStr;

    // Domain types — asset
    pub use crate::domain::asset::{
        Asset, AssetAuthority, AssetCompression, AssetContent, AssetContentMetadata,
        AssetCreator, AssetGrouping, AssetList, AssetOwnership, AssetProof, AssetRoyalty,
        AssetSortBy, AssetSortDirection, AssetSortField, AssetSupply, AssetWithProof,
        AuthorityScope, Pagination, COLLECTION_GROUP_KEY,
    };

    // Domain types — views
    pub use crate::domain::edition::Edition;
    pub use crate::domain::metadata::{Collection, Metadata, TokenStandard};
    pub use crate::domain::mint::{Currency, Mint};

    // Transformers
    pub use crate::transform::{
        to_edition_view, to_metadata_view, to_mint_view, to_views, AssetViews,
    };

    // Program
    pub use crate::program::{get_asset_pda, BUBBLEGUM_PROGRAM_ID};

    // Errors
    pub use crate::error::{ReadApiError, ReadApiResult, SdkError, TransformError, TransformResult};

    // RPC
    pub use crate::rpc::{ReadApi, RpcTransport, DEFAULT_REQUEST_ID};

    // Client
    pub use crate::client::ReadApiClient;
    #[cfg(feature = "http")]
    pub use crate::client::ReadApiClientBuilder;
    #[cfg(feature = "http")]
    pub use crate::http::{HttpTransport, RetryConfig, RetryPolicy, RetryingTransport};
}
