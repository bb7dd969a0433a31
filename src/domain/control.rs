use crate::device_loader::ControlRecord;
use crate::domain::command_sink::CommandSink;
use crate::domain::commands::ControlCommand;
use crate::domain::observable::Observable;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub const ID_FIELD: &str = "id";
pub const TYPE_FIELD: &str = "type";

/// A device control with every attribute of its record exposed as an observable field.
///
/// The set of fields is fixed at construction: values change, keys never do. Attributes keep the
/// order of the record.
#[derive(Debug)]
pub struct Control {
    id: Observable<String>,
    control_type: Observable<String>,
    attributes: Vec<(String, Observable<Value>)>,
    sink: Arc<dyn CommandSink>,
}

impl Control {
    pub fn new(record: ControlRecord, sink: Arc<dyn CommandSink>) -> Self {
        Control {
            id: Observable::new(record.id),
            control_type: Observable::new(record.control_type),
            attributes: record.attributes.into_iter().map(|(key, value)| (key, Observable::new(value))).collect(),
            sink,
        }
    }

    pub fn id(&self) -> &Observable<String> {
        &self.id
    }

    pub fn control_type(&self) -> &Observable<String> {
        &self.control_type
    }

    pub fn attribute(&self, name: &str) -> Option<&Observable<Value>> {
        self.attributes.iter().find(|(key, _)| key == name).map(|(_, attribute)| attribute)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        [ID_FIELD, TYPE_FIELD].into_iter().chain(self.attributes.iter().map(|(key, _)| key.as_str()))
    }

    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            ID_FIELD => Some(Value::String(self.id.get())),
            TYPE_FIELD => Some(Value::String(self.control_type.get())),
            _ => self.attribute(name).map(Observable::get),
        }
    }

    pub fn set_field(&self, name: &str, value: Value) -> Result<(), ControlError> {
        match name {
            ID_FIELD => {
                let id = match value {
                    Value::String(id) => id,
                    Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
                    other => return Err(ControlError::InvalidValue { field: name.to_string(), value: other }),
                };
                self.id.set(id);
            }
            TYPE_FIELD => match value {
                Value::String(control_type) => {
                    self.control_type.set(control_type);
                }
                other => return Err(ControlError::InvalidValue { field: name.to_string(), value: other }),
            },
            _ => {
                let attribute = self.attribute(name).ok_or_else(|| ControlError::UnknownField { field: name.to_string() })?;
                attribute.set(value);
            }
        }
        Ok(())
    }

    /// Posts the current id to the server without waiting for the exchange to complete.
    ///
    /// The returned handle can be awaited but does not carry the outcome, failures are logged by
    /// the sink. Returns `None` when called outside a tokio runtime, nothing is sent then.
    pub fn send_updated_value_to_server(&self) -> Option<JoinHandle<()>> {
        let command = ControlCommand::new(self.id.get());

        let Ok(runtime) = Handle::try_current() else {
            warn!(control_id = command.id, "⚠️ No runtime available, control update not sent");
            return None;
        };

        debug!(control_id = command.id, "🔵 Sending control update");
        let sink = self.sink.clone();
        Some(runtime.spawn(async move {
            sink.send(command).await;
        }))
    }
}

#[derive(Error, PartialEq, Debug)]
pub enum ControlError {
    #[error("unknown field '{field}'")]
    UnknownField { field: String },
    #[error("invalid value {value} for field '{field}'")]
    InvalidValue { field: String, value: Value },
}
