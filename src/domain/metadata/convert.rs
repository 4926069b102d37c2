//! Conversion: Asset → Metadata.

use super::{Collection, Metadata, TokenStandard};
use crate::domain::asset::Asset;
use crate::error::TransformError;
use crate::program::{get_asset_pda, BUBBLEGUM_PROGRAM_ID};
use crate::shared::PubkeyStr;

impl TryFrom<&Asset> for Metadata {
    type Error = TransformError;

    fn try_from(asset: &Asset) -> Result<Self, Self::Error> {
        let update_authority = asset
            .full_authority()
            .ok_or_else(|| TransformError::MissingFullAuthority {
                asset: asset.id.to_string(),
            })?;

        let tree = asset.compression.tree.to_pubkey("compression.tree")?;
        let (address, _bump) =
            get_asset_pda(&tree, asset.compression.leaf_id, &BUBBLEGUM_PROGRAM_ID);

        let collection = match asset.collection_group() {
            Some(group) => Some(Collection {
                address: PubkeyStr::new(&group.group_value)
                    .to_pubkey("grouping.group_value")?,
                verified: false,
            }),
            None => None,
        };

        Ok(Metadata {
            address,
            mint_address: asset.id.to_pubkey("id")?,
            update_authority_address: update_authority.address.to_pubkey("authorities.address")?,
            name: asset.content.metadata.name.clone(),
            symbol: asset.content.metadata.symbol.clone(),
            uri: asset.content.json_uri.clone(),
            json: asset.content.metadata.clone(),
            json_loaded: true,
            is_mutable: asset.mutable,
            primary_sale_happened: asset.royalty.primary_sale_happened,
            seller_fee_basis_points: asset.royalty.basis_points,
            edition_nonce: asset.supply.edition_nonce,
            creators: asset.creators.clone(),
            token_standard: TokenStandard::NonFungible,
            collection,
            compression: asset.compression.clone(),
        })
    }
}
