use crate::device_loader::DeviceRecord;
use crate::domain::command_sink::CommandSink;
use crate::domain::control::Control;
use crate::domain::device::Device;
use crate::templates::TemplateRegistry;
use std::sync::Arc;
use tracing::debug;

/// Rendered in place of a control whose type has no template.
pub const NOT_FOUND_TEMPLATE: &str = "not_found";

/// Root of the panel: every device and the template selection policy.
#[derive(Debug)]
pub struct AppViewModel {
    devices: Vec<Device>,
    templates: Arc<dyn TemplateRegistry>,
}

impl AppViewModel {
    pub fn new(records: impl IntoIterator<Item = DeviceRecord>, templates: Arc<dyn TemplateRegistry>, sink: Arc<dyn CommandSink>) -> Self {
        AppViewModel {
            devices: records.into_iter().map(|record| Device::new(record, &sink)).collect(),
            templates,
        }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn find_control(&self, id: &str) -> Option<&Control> {
        self.devices.iter().find_map(|device| device.find_control(id))
    }

    pub fn template_picker(&self, control: &Control) -> String {
        let template_name = control.control_type().get();

        if self.templates.contains(&template_name) {
            template_name
        } else {
            debug!(control_id = control.id().get(), "No template for control type '{}'", template_name);
            NOT_FOUND_TEMPLATE.to_string()
        }
    }
}
