pub mod app_config;
pub mod console;
pub mod device_loader;
pub mod domain;
pub mod server;
pub mod templates;
pub mod view_model;
pub mod widget;
