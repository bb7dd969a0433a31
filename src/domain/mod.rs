pub mod command_sink;
pub mod commands;
pub mod control;
pub mod device;
pub mod observable;
