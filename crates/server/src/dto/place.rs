use serde::{Deserialize, Serialize};
use yatra::prelude::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceDto {
    pub id: String,
    pub name: String,
}

impl PlaceDto {
    pub fn from(place: &Place) -> Self {
        Self {
            id: place.key.to_string(),
            name: place.name.to_string(),
        }
    }
}
