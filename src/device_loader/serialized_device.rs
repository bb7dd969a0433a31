use crate::device_loader::control_id_deserializer::deserialize_control_id;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DeviceRecord {
    pub name: String,
    pub address: String,
    pub controls: Vec<ControlRecord>,
}

/// One control as supplied by the server. `id` and `type` are required, every other key is kept
/// as-is in `attributes`.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ControlRecord {
    #[serde(deserialize_with = "deserialize_control_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub control_type: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}
