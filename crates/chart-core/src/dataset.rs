// File: crates/chart-core/src/dataset.rs
// Summary: Consumption dataset model (the static JSON the chart is built from).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::align::{DeviceSeries, Reading};
use crate::error::DatasetError;

/// Dataset compiled into the crate; the chart's default input.
const BUNDLED: &str = include_str!("../data/consumos.json");

/// Top-level document: `{ "Consumos": [...] }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionDocument {
    #[serde(rename = "Consumos")]
    pub consumptions: Vec<DeviceConsumption>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceConsumption {
    #[serde(rename = "CodigoDispositivo")]
    pub device_code: String,
    #[serde(rename = "Medicoes")]
    pub measurements: Vec<Measurement>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(rename = "DataConsumo")]
    pub date: String,
    #[serde(rename = "QtdConsumo")]
    pub quantity: f64,
}

impl ConsumptionDocument {
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The dataset shipped with the crate.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json_str(BUNDLED)
    }

    /// Device series in document order.
    pub fn device_series(&self) -> Vec<DeviceSeries> {
        self.consumptions.iter().cloned().map(DeviceSeries::from).collect()
    }

    pub fn into_device_series(self) -> Vec<DeviceSeries> {
        self.consumptions.into_iter().map(DeviceSeries::from).collect()
    }
}

impl From<DeviceConsumption> for DeviceSeries {
    fn from(c: DeviceConsumption) -> Self {
        let readings = c
            .measurements
            .into_iter()
            .map(|m| Reading { date: m.date, value: m.quantity })
            .collect();
        DeviceSeries { id: c.device_code, readings }
    }
}
