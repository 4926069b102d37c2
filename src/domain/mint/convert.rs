//! Conversion: Asset → Mint.

use super::{Currency, Mint, MINT_DECIMALS, MINT_SUPPLY};
use crate::domain::asset::Asset;
use crate::error::TransformError;

impl TryFrom<&Asset> for Mint {
    type Error = TransformError;

    fn try_from(asset: &Asset) -> Result<Self, Self::Error> {
        let address = asset.id.to_pubkey("id")?;
        Ok(Mint {
            address,
            mint_authority_address: address,
            freeze_authority_address: address,
            decimals: MINT_DECIMALS,
            supply: MINT_SUPPLY,
            is_wrapped_sol: false,
            currency: Currency::spl_token(MINT_DECIMALS),
        })
    }
}
