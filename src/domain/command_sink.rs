use crate::domain::commands::ControlCommand;
use async_trait::async_trait;
use std::fmt::Debug;

#[async_trait]
pub trait CommandSink: Debug + Send + Sync {
    /// Delivers the command. Failures are the sink's concern, callers never see them.
    async fn send(&self, command: ControlCommand);
}
