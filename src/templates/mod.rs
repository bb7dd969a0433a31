mod registry;

pub use registry::{DirectoryTemplates, TemplateRegistry};
