use crate::domain::control::ControlError;
use crate::view_model::AppViewModel;
use serde_json::Value;
use std::io;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, instrument, warn};

/// A single line typed at the console.
#[derive(Clone, PartialEq, Debug)]
pub enum Interaction {
    List,
    Send { control_id: String },
    Set { control_id: String, field: String, value: Value },
}

impl Interaction {
    pub fn parse(line: &str) -> Result<Self, ConsoleError> {
        let line = line.trim();
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim_start();

        match command {
            "list" => Ok(Interaction::List),
            "send" => match rest.split_whitespace().collect::<Vec<_>>().as_slice() {
                [control_id] => Ok(Interaction::Send {
                    control_id: control_id.to_string(),
                }),
                _ => Err(ConsoleError::Usage("send <control-id>")),
            },
            "set" => {
                let mut parts = rest.splitn(3, char::is_whitespace);
                match (parts.next(), parts.next(), parts.next().map(str::trim)) {
                    (Some(control_id), Some(field), Some(value)) if !control_id.is_empty() && !field.is_empty() && !value.is_empty() => Ok(Interaction::Set {
                        control_id: control_id.to_string(),
                        field: field.to_string(),
                        value: serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string())),
                    }),
                    _ => Err(ConsoleError::Usage("set <control-id> <field> <value>")),
                }
            }
            other => Err(ConsoleError::UnknownCommand(other.to_string())),
        }
    }
}

#[instrument(skip_all)]
pub async fn run<R>(view_model: &AppViewModel, input: R) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        if let Err(e) = Interaction::parse(&line).and_then(|interaction| apply(view_model, interaction)) {
            warn!("⚠️ {}", e);
        }
    }

    info!("Console input closed");
    Ok(())
}

pub fn apply(view_model: &AppViewModel, interaction: Interaction) -> Result<(), ConsoleError> {
    match interaction {
        Interaction::List => {
            render(view_model);
            Ok(())
        }
        Interaction::Send { control_id } => {
            let control = view_model.find_control(&control_id).ok_or(ConsoleError::UnknownControl(control_id))?;
            control.send_updated_value_to_server();
            Ok(())
        }
        Interaction::Set { control_id, field, value } => {
            let control = view_model.find_control(&control_id).ok_or(ConsoleError::UnknownControl(control_id))?;
            control.set_field(&field, value)?;
            control.send_updated_value_to_server();
            Ok(())
        }
    }
}

pub fn render(view_model: &AppViewModel) {
    for device in view_model.devices() {
        info!("🔹 {} ({})", device.name().get(), device.address().get());
        for control in device.controls() {
            let fields = control
                .field_names()
                .filter_map(|name| control.field(name).map(|value| format!("{}={}", name, value)))
                .collect::<Vec<_>>()
                .join(", ");
            info!("   [{}] {}", view_model.template_picker(control), fields);
        }
    }
}

#[derive(Error, PartialEq, Debug)]
pub enum ConsoleError {
    #[error("unknown command '{0}', expected list, send or set")]
    UnknownCommand(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown control '{0}'")]
    UnknownControl(String),
    #[error(transparent)]
    Control(#[from] ControlError),
}
