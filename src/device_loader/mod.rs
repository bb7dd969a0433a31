mod control_id_deserializer;
mod loader;
mod serialized_device;

pub use loader::{LoaderError, load_devices_from};
pub use serialized_device::{ControlRecord, DeviceRecord};
