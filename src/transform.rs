//! Asset transformers — pure mappings from a read API [`Asset`] into the
//! edition, mint and metadata views a token layer consumes.
//!
//! No I/O and no hidden state: the same asset always yields the same views.

use crate::domain::asset::Asset;
use crate::domain::edition::Edition;
use crate::domain::metadata::Metadata;
use crate::domain::mint::Mint;
use crate::error::TransformResult;
use serde::{Deserialize, Serialize};

/// Edition view: always an original, print supply copied verbatim.
pub fn to_edition_view(asset: &Asset) -> TransformResult<Edition> {
    Edition::try_from(asset)
}

/// Mint view: 0 decimals, supply 1, the asset address as both authorities.
pub fn to_mint_view(asset: &Asset) -> TransformResult<Mint> {
    Mint::try_from(asset)
}

/// Metadata view.
///
/// Fails with [`TransformError::MissingFullAuthority`](crate::error::TransformError::MissingFullAuthority)
/// when no authority holds the `full` scope. A missing `collection` grouping
/// yields `collection: None`.
pub fn to_metadata_view(asset: &Asset) -> TransformResult<Metadata> {
    Metadata::try_from(asset)
}

/// All three views of one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetViews {
    pub metadata: Metadata,
    pub mint: Mint,
    pub edition: Edition,
}

pub fn to_views(asset: &Asset) -> TransformResult<AssetViews> {
    Ok(AssetViews {
        metadata: to_metadata_view(asset)?,
        mint: to_mint_view(asset)?,
        edition: to_edition_view(asset)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset::fixtures;
    use crate::domain::metadata::TokenStandard;
    use crate::error::TransformError;
    use crate::program::{get_asset_pda, BUBBLEGUM_PROGRAM_ID};
    use solana_pubkey::Pubkey;

    fn pk(b: u8) -> Pubkey {
        Pubkey::new_from_array([b; 32])
    }

    fn sample() -> Asset {
        fixtures::asset(
            &pk(1).to_string(),
            &pk(2).to_string(),
            &pk(3).to_string(),
            &pk(4).to_string(),
        )
    }

    #[test]
    fn test_edition_view_is_original_with_supply_copied() {
        let mut asset = sample();
        asset.supply.print_current_supply = 4;
        asset.supply.print_max_supply = Some(10);

        let edition = to_edition_view(&asset).unwrap();
        assert_eq!(edition.address, pk(1));
        assert!(edition.is_original);
        assert_eq!(edition.supply, 4);
        assert_eq!(edition.max_supply, Some(10));
    }

    #[test]
    fn test_mint_view_uses_asset_as_authorities() {
        let mint = to_mint_view(&sample()).unwrap();
        assert_eq!(mint.address, pk(1));
        assert_eq!(mint.mint_authority_address, pk(1));
        assert_eq!(mint.freeze_authority_address, pk(1));
        assert_eq!(mint.decimals, 0);
        assert_eq!(mint.supply, 1);
        assert!(!mint.is_wrapped_sol);
        assert_eq!(mint.currency.namespace, "spl-token");
    }

    #[test]
    fn test_mint_view_is_idempotent() {
        let asset = sample();
        let first = to_mint_view(&asset).unwrap();
        let second = to_mint_view(&asset).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[test]
    fn test_metadata_view_maps_fields() {
        let asset = sample();
        let metadata = to_metadata_view(&asset).unwrap();

        let (expected_address, _) = get_asset_pda(&pk(4), 2, &BUBBLEGUM_PROGRAM_ID);
        assert_eq!(metadata.address, expected_address);
        assert_eq!(metadata.mint_address, pk(1));
        assert_eq!(metadata.update_authority_address, pk(2));
        assert_eq!(metadata.name, "Compressed #1");
        assert_eq!(metadata.symbol, "CNFT");
        assert_eq!(metadata.uri, "https://example.com/nft.json");
        assert_eq!(metadata.json, asset.content.metadata);
        assert!(metadata.json_loaded);
        assert!(metadata.is_mutable);
        assert!(!metadata.primary_sale_happened);
        assert_eq!(metadata.seller_fee_basis_points, 500);
        assert_eq!(metadata.edition_nonce, Some(254));
        assert_eq!(metadata.creators, asset.creators);
        assert_eq!(metadata.token_standard, TokenStandard::NonFungible);
        assert_eq!(metadata.compression, asset.compression);
    }

    #[test]
    fn test_metadata_view_collection_is_never_verified() {
        let collection = to_metadata_view(&sample()).unwrap().collection.unwrap();
        assert_eq!(collection.address, pk(3));
        assert!(!collection.verified);
    }

    #[test]
    fn test_metadata_view_without_collection_grouping() {
        let mut asset = sample();
        asset.grouping.clear();
        let metadata = to_metadata_view(&asset).unwrap();
        assert!(metadata.collection.is_none());
    }

    #[test]
    fn test_metadata_view_requires_full_authority() {
        let mut asset = sample();
        asset.authorities[0].scopes = vec![crate::domain::asset::AuthorityScope::Metadata];
        let err = to_metadata_view(&asset).unwrap_err();
        assert_eq!(
            err,
            TransformError::MissingFullAuthority {
                asset: pk(1).to_string()
            }
        );

        asset.authorities.clear();
        assert!(matches!(
            to_metadata_view(&asset),
            Err(TransformError::MissingFullAuthority { .. })
        ));
    }

    #[test]
    fn test_metadata_view_rejects_bad_tree_address() {
        let mut asset = sample();
        asset.compression.tree = "bad tree".into();
        assert!(matches!(
            to_metadata_view(&asset),
            Err(TransformError::InvalidAddress { field: "compression.tree", .. })
        ));
    }

    #[test]
    fn test_to_views_bundles_all_three() {
        let asset = sample();
        let views = to_views(&asset).unwrap();
        assert_eq!(views.metadata, to_metadata_view(&asset).unwrap());
        assert_eq!(views.mint, to_mint_view(&asset).unwrap());
        assert_eq!(views.edition, to_edition_view(&asset).unwrap());
    }
}
