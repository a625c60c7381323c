//! Conversions from wire types to domain types for offers.

use super::wire::{OfferAssetResponse, OfferResponse};
use super::{Offer, OfferAsset, OfferStatus};

impl From<OfferAssetResponse> for OfferAsset {
    fn from(a: OfferAssetResponse) -> Self {
        Self {
            id: a.id,
            code: a.code,
            name: a.name,
            amount: a.amount,
        }
    }
}

impl From<OfferResponse> for Offer {
    fn from(o: OfferResponse) -> Self {
        Self {
            status: OfferStatus::from_json(&o.status),
            id: o.id,
            offer: o.offer,
            offered_coins: o.offered_coins,
            date_found: o.date_found,
            date_completed: o.date_completed,
            date_pending: o.date_pending,
            spent_block_index: o.spent_block_index,
            price: o.price,
            offered: o.offered.into_iter().map(OfferAsset::from).collect(),
            requested: o.requested.into_iter().map(OfferAsset::from).collect(),
            fees: o.fees,
            mempool: o.mempool,
            related_offers: o.related_offers,
            coins: o.coins,
            previous_price: o.previous_price,
        }
    }
}
