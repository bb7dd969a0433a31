use serde::Serialize;

/// Payload posted to the server when a control asks for an update.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ControlCommand {
    pub id: String,
}

impl ControlCommand {
    pub fn new(id: impl Into<String>) -> Self {
        ControlCommand { id: id.into() }
    }
}
