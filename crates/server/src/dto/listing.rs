use serde::{Deserialize, Serialize};
use yatra::prelude::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDto {
    pub id: u32,
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub service: ServiceType,
    pub duration: String,
    pub fare: u32,
    pub transfers: u32,
    pub frequency: String,
    pub operator: String,
    pub is_favorite: bool,
}

impl ListingDto {
    pub fn from(listing: &ServiceListing) -> Self {
        Self {
            id: listing.id,
            from: listing.from.to_string(),
            to: listing.to.to_string(),
            service: listing.service,
            duration: listing.duration.to_hm_string(),
            fare: listing.fare,
            transfers: listing.transfers,
            frequency: listing.frequency.to_string(),
            operator: listing.operator.to_string(),
            is_favorite: listing.favorite,
        }
    }
}
