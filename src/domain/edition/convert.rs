//! Conversion: Asset → Edition.

use super::Edition;
use crate::domain::asset::Asset;
use crate::error::TransformError;

impl TryFrom<&Asset> for Edition {
    type Error = TransformError;

    fn try_from(asset: &Asset) -> Result<Self, Self::Error> {
        Ok(Edition {
            address: asset.id.to_pubkey("id")?,
            is_original: true,
            supply: asset.supply.print_current_supply,
            max_supply: asset.supply.print_max_supply,
        })
    }
}
