use serde::{Deserialize, Serialize};
use yatra::prelude::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepDto {
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    pub from: String,
    pub to: String,
    pub eta_min: u32,
}

impl StepDto {
    pub fn from(step: &Step) -> Self {
        Self {
            mode: step.mode.to_string(),
            route: step.mode.route().map(str::to_string),
            from: step.from.to_string(),
            to: step.to.to_string(),
            eta_min: step.duration.as_minutes(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyDto {
    pub from: String,
    pub to: String,
    pub itinerary: Vec<StepDto>,
    pub total_time_min: u32,
    pub transfers: u32,
}

impl JourneyDto {
    pub fn from(itinerary: &Itinerary) -> Self {
        Self {
            from: itinerary.from.to_string(),
            to: itinerary.to.to_string(),
            itinerary: itinerary.steps.iter().map(StepDto::from).collect(),
            total_time_min: itinerary.total_duration().as_minutes(),
            transfers: itinerary.transfers(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOptionDto {
    pub id: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub label: String,
    pub journey: JourneyDto,
    pub highlights: Vec<String>,
    pub estimated_fare: u32,
    pub first_bus: String,
    pub last_bus: String,
}

impl RouteOptionDto {
    pub fn from(alternative: &RouteAlternative) -> Self {
        Self {
            id: alternative.id.to_string(),
            category: alternative.category,
            label: alternative.label.to_string(),
            journey: JourneyDto::from(&alternative.journey),
            highlights: alternative
                .highlights
                .iter()
                .map(|value| value.to_string())
                .collect(),
            estimated_fare: alternative.estimated_fare,
            first_bus: alternative.first_bus.to_string(),
            last_bus: alternative.last_bus.to_string(),
        }
    }
}
