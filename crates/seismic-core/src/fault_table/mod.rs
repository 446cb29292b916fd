//! Immutable fault table: fault name -> distance-sorted spectral samples.
//!
//! The table is validated once while loading and never mutated afterwards,
//! so a single instance can be shared by reference across threads.

mod parser;

use crate::domain::{DistanceSpan, SeismicError, SeismicResult, SpectralValues};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parser::parse_fault_source;

pub const MIN_SAMPLES_PER_FAULT: usize = 2;

#[derive(Debug, thiserror::Error)]
pub enum FaultTableError {
    #[error("failed to read fault table '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse fault table: {source}")]
    Parse { source: serde_json::Error },
    #[error("fault table does not define any faults")]
    Empty,
    #[error("fault '{fault}' is defined more than once")]
    DuplicateFault { fault: String },
    #[error("fault '{fault}' has distance key '{key}' that is not a finite number")]
    InvalidDistanceKey { fault: String, key: String },
    #[error("fault '{fault}' has negative distance {distance_km} km")]
    NegativeDistance { fault: String, distance_km: f64 },
    #[error("fault '{fault}' lists distance {distance_km} km more than once")]
    DuplicateDistance { fault: String, distance_km: f64 },
    #[error(
        "fault '{fault}' has {field} = {value} at {distance_km} km; spectral values must be finite and > 0"
    )]
    InvalidSpectralValue {
        fault: String,
        distance_km: f64,
        field: &'static str,
        value: f64,
    },
    #[error("fault '{fault}' has {count} distance sample(s); at least 2 are required")]
    TooFewSamples { fault: String, count: usize },
}

impl From<FaultTableError> for SeismicError {
    fn from(error: FaultTableError) -> Self {
        let message = error.to_string();
        match error {
            FaultTableError::Read { .. } => SeismicError::io(message),
            _ => SeismicError::table_load(message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSample {
    pub distance_km: f64,
    pub values: SpectralValues,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaultRecord {
    name: String,
    samples: Vec<DistanceSample>,
}

impl FaultRecord {
    /// Builds a record, sorting samples by distance and rejecting anything
    /// interpolation cannot work with.
    pub fn new(
        name: impl Into<String>,
        samples: impl IntoIterator<Item = (f64, SpectralValues)>,
    ) -> Result<Self, FaultTableError> {
        let name = name.into();
        let mut samples = samples
            .into_iter()
            .map(|(distance_km, values)| DistanceSample {
                distance_km,
                values,
            })
            .collect::<Vec<_>>();

        for sample in &samples {
            validate_sample(&name, sample)?;
        }

        samples.sort_by(|lhs, rhs| lhs.distance_km.total_cmp(&rhs.distance_km));
        if let Some(pair) = samples
            .windows(2)
            .find(|pair| pair[0].distance_km == pair[1].distance_km)
        {
            return Err(FaultTableError::DuplicateDistance {
                fault: name,
                distance_km: pair[0].distance_km,
            });
        }

        if samples.len() < MIN_SAMPLES_PER_FAULT {
            return Err(FaultTableError::TooFewSamples {
                fault: name,
                count: samples.len(),
            });
        }

        Ok(Self { name, samples })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn samples(&self) -> &[DistanceSample] {
        &self.samples
    }

    pub fn span(&self) -> DistanceSpan {
        // at least two samples, sorted ascending
        DistanceSpan::new(
            self.samples[0].distance_km,
            self.samples[self.samples.len() - 1].distance_km,
        )
    }
}

fn validate_sample(fault: &str, sample: &DistanceSample) -> Result<(), FaultTableError> {
    if sample.distance_km < 0.0 {
        return Err(FaultTableError::NegativeDistance {
            fault: fault.to_string(),
            distance_km: sample.distance_km,
        });
    }
    for (field, value) in SpectralValues::FIELD_NAMES
        .into_iter()
        .zip(sample.values.fields())
    {
        if !value.is_finite() || value <= 0.0 {
            return Err(FaultTableError::InvalidSpectralValue {
                fault: fault.to_string(),
                distance_km: sample.distance_km,
                field,
                value,
            });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaultSummary {
    pub fault_name: String,
    pub min_distance_km: f64,
    pub max_distance_km: f64,
    pub sample_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaultTable {
    faults: BTreeMap<String, FaultRecord>,
}

impl FaultTable {
    pub fn from_records(
        records: impl IntoIterator<Item = FaultRecord>,
    ) -> Result<Self, FaultTableError> {
        let mut faults = BTreeMap::new();
        for record in records {
            if faults.contains_key(record.name()) {
                return Err(FaultTableError::DuplicateFault {
                    fault: record.name,
                });
            }
            faults.insert(record.name.clone(), record);
        }
        if faults.is_empty() {
            return Err(FaultTableError::Empty);
        }
        Ok(Self { faults })
    }

    pub fn from_json_str(source: &str) -> Result<Self, FaultTableError> {
        let parsed = parse_fault_source(source)?;
        let records = parsed
            .into_iter()
            .map(|fault| FaultRecord::new(fault.name, fault.samples))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_records(records)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FaultTableError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| FaultTableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&source)?;
        tracing::info!(
            path = %path.display(),
            faults = table.len(),
            "loaded fault table"
        );
        Ok(table)
    }

    /// Case-sensitive exact lookup.
    pub fn lookup(&self, fault_name: &str) -> SeismicResult<&FaultRecord> {
        self.faults
            .get(fault_name)
            .ok_or_else(|| SeismicError::fault_not_found(fault_name))
    }

    pub fn fault_names(&self) -> impl Iterator<Item = &str> {
        self.faults.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.faults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faults.is_empty()
    }

    pub fn summaries(&self) -> Vec<FaultSummary> {
        self.faults
            .values()
            .map(|record| {
                let span = record.span();
                FaultSummary {
                    fault_name: record.name.clone(),
                    min_distance_km: span.min_km,
                    max_distance_km: span.max_km,
                    sample_count: record.samples.len(),
                }
            })
            .collect()
    }
}
