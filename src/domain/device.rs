use crate::device_loader::DeviceRecord;
use crate::domain::command_sink::CommandSink;
use crate::domain::control::Control;
use crate::domain::observable::Observable;
use std::sync::Arc;

#[derive(Debug)]
pub struct Device {
    name: Observable<String>,
    address: Observable<String>,
    controls: Vec<Control>,
}

impl Device {
    pub fn new(record: DeviceRecord, sink: &Arc<dyn CommandSink>) -> Self {
        Device {
            name: Observable::new(record.name),
            address: Observable::new(record.address),
            controls: record.controls.into_iter().map(|control| Control::new(control, sink.clone())).collect(),
        }
    }

    pub fn name(&self) -> &Observable<String> {
        &self.name
    }

    pub fn address(&self) -> &Observable<String> {
        &self.address
    }

    /// Controls in the order the server supplied them.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn find_control(&self, id: &str) -> Option<&Control> {
        self.controls.iter().find(|control| control.id().get() == id)
    }
}
