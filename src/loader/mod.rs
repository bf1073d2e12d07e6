use std::{
    collections::HashSet,
    fs::File,
    io::{self, Read},
    path::PathBuf,
    sync::Arc,
};
use thiserror::Error;
use tracing::info;

mod config;
pub mod models;
pub use config::*;
use models::*;

use crate::table::{Category, Itinerary, Mode, RouteAlternative, Step};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Alternative {id} has unknown category {value}")]
    UnknownCategory { id: String, value: String },
    #[error("Alternative {id} has unknown mode {value}")]
    UnknownMode { id: String, value: String },
    #[error("Alternative {0} has a bus step without a route")]
    MissingRoute(String),
    #[error("Alternative {0} has a walk step with a route")]
    RouteOnWalk(String),
    #[error("Alternative {id} jumps from {from} to {to} between steps")]
    DisconnectedSteps { id: String, from: String, to: String },
    #[error("Rows for alternative {0} are not contiguous")]
    DuplicateAlternative(String),
}

#[derive(Default)]
pub enum StorageType {
    #[default]
    None,
    File(PathBuf),
    Text(String),
}

/// A CSV route table, one row per step.
#[derive(Default)]
pub struct RouteSource {
    config: Config,
    storage: StorageType,
}

impl RouteSource {
    pub fn new(config: self::Config) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    pub fn from_file(mut self, path: PathBuf) -> Self {
        self.storage = StorageType::File(path);
        self
    }

    pub fn from_text(mut self, text: impl Into<String>) -> Self {
        self.storage = StorageType::Text(text.into());
        self
    }

    pub fn load(&self) -> Result<Vec<RouteAlternative>, self::Error> {
        let alternatives = match &self.storage {
            StorageType::None => Vec::new(),
            StorageType::File(path) => {
                let file = File::open(path)?;
                let alternatives = self.read(file)?;
                info!("Loaded {} alternatives from {:?}", alternatives.len(), path);
                alternatives
            }
            StorageType::Text(text) => self.read(text.as_bytes())?,
        };
        Ok(alternatives)
    }

    fn read<R: Read>(&self, reader: R) -> Result<Vec<RouteAlternative>, self::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut groups: Vec<Vec<CsvStep>> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for row in reader.deserialize() {
            let row: CsvStep = row?;
            match groups.last_mut() {
                Some(group) if group[0].alternative_id == row.alternative_id => group.push(row),
                _ => {
                    if !seen.insert(row.alternative_id.clone()) {
                        return Err(Error::DuplicateAlternative(row.alternative_id));
                    }
                    groups.push(vec![row]);
                }
            }
        }

        groups
            .into_iter()
            .map(|rows| self.build(rows))
            .collect()
    }

    fn build(&self, rows: Vec<CsvStep>) -> Result<RouteAlternative, self::Error> {
        let head = &rows[0];
        let id = head.alternative_id.clone();
        let category: Category =
            head.category
                .parse()
                .map_err(|value| Error::UnknownCategory {
                    id: id.clone(),
                    value,
                })?;
        let highlights: Vec<Arc<str>> = head
            .highlights
            .as_deref()
            .map(|value| {
                value
                    .split(self.config.highlight_separator)
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .map(Arc::from)
                    .collect()
            })
            .unwrap_or_default();

        let mut steps: Vec<Step> = Vec::with_capacity(rows.len());
        for row in rows.iter() {
            let mode = match (row.mode.to_lowercase().as_str(), row.route.as_deref()) {
                ("walk", None) => Mode::Walk,
                ("walk", Some(_)) => return Err(Error::RouteOnWalk(id)),
                ("bus", Some(route)) => Mode::Bus(route.into()),
                ("bus", None) => return Err(Error::MissingRoute(id)),
                (value, _) => {
                    return Err(Error::UnknownMode {
                        id,
                        value: value.to_string(),
                    });
                }
            };
            if let Some(prev) = steps.last()
                && *prev.to != *row.from
            {
                return Err(Error::DisconnectedSteps {
                    id,
                    from: prev.to.to_string(),
                    to: row.from.clone(),
                });
            }
            steps.push(Step {
                mode,
                from: row.from.as_str().into(),
                to: row.to.as_str().into(),
                duration: row.duration_min.into(),
            });
        }

        let from = head.from.clone();
        let to = rows[rows.len() - 1].to.clone();
        let label = head
            .label
            .clone()
            .unwrap_or_else(|| format!("{from} → {to}"));
        Ok(RouteAlternative {
            id: id.into(),
            category,
            label: label.into(),
            highlights,
            estimated_fare: head.estimated_fare,
            first_bus: head.first_bus.as_str().into(),
            last_bus: head.last_bus.as_str().into(),
            journey: Itinerary::new(&from, &to, steps),
        })
    }
}
