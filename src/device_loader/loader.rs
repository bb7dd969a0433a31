use crate::device_loader::serialized_device::DeviceRecord;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tracing::{info, instrument};

#[instrument]
pub async fn load_devices_from(file: &str) -> Result<Vec<DeviceRecord>, LoaderError> {
    info!("📁 Loading devices...");
    let path = PathBuf::from(file);

    let content = fs::read_to_string(&path).await.map_err(|source| LoaderError::Io {
        source,
        path: path.clone(),
    })?;

    let devices = task::spawn_blocking(move || serde_json::from_str::<Vec<DeviceRecord>>(&content).map_err(|source| LoaderError::Parse { source, path }))
        .await??;

    let num_controls: usize = devices.iter().map(|device| device.controls.len()).sum();
    info!("📁 Loading devices... OK, {} device(s) with {} control(s)", devices.len(), num_controls);
    Ok(devices)
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("unable to read '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error("unable to parse '{}': {}", path.display(), source)]
    Parse { source: serde_json::Error, path: PathBuf },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env::temp_dir;
    use test_log::test;

    #[test(tokio::test)]
    async fn loads_all_devices_in_order() -> Result<(), LoaderError> {
        let file = temp_dir().join("control_panel_loader_devices.json");
        fs::write(
            &file,
            r#"[
                { "name": "Lamp", "address": "10.0.0.5", "controls": [{ "id": "c1", "type": "dimmer", "value": 50 }] },
                { "name": "Poofer", "address": "10.0.0.9", "controls": [] }
            ]"#,
        )
        .await
        .unwrap();

        let devices = load_devices_from(file.to_string_lossy().as_ref()).await?;

        assert_eq!(devices.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(), vec!["Lamp", "Poofer"]);
        assert_eq!(devices[0].controls[0].id, "c1");
        assert!(devices[1].controls.is_empty());

        Ok(())
    }

    #[test(tokio::test)]
    async fn returns_an_io_error_for_a_missing_file() {
        let file = temp_dir().join("control_panel_loader_missing.json");

        let result = load_devices_from(file.to_string_lossy().as_ref()).await;

        assert!(matches!(result, Err(LoaderError::Io { path, .. }) if path == file));
    }

    #[test(tokio::test)]
    async fn returns_a_parse_error_for_invalid_json() {
        let file = temp_dir().join("control_panel_loader_invalid.json");
        fs::write(&file, r#"[{ "name": "Lamp" }]"#).await.unwrap();

        let result = load_devices_from(file.to_string_lossy().as_ref()).await;

        assert!(matches!(result, Err(LoaderError::Parse { path, .. }) if path == file));
    }
}
