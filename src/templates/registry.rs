use std::collections::HashSet;
use std::fmt::Debug;
use std::path::PathBuf;
use tracing::trace;

/// The set of markup templates available to the renderer. Membership may change while the
/// panel is running.
pub trait TemplateRegistry: Debug + Send + Sync {
    fn contains(&self, name: &str) -> bool;
}

/// Templates stored as `<directory>/<name>.<extension>` files.
#[derive(Debug)]
pub struct DirectoryTemplates {
    directory: PathBuf,
    extension: String,
}

impl DirectoryTemplates {
    pub fn new(directory: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        DirectoryTemplates {
            directory: directory.into(),
            extension: extension.into(),
        }
    }
}

impl TemplateRegistry for DirectoryTemplates {
    fn contains(&self, name: &str) -> bool {
        if !is_valid_name(name) {
            trace!("Rejected template name {:?}", name);
            return false;
        }

        self.directory.join(format!("{}.{}", name, self.extension)).is_file()
    }
}

impl TemplateRegistry for HashSet<String> {
    fn contains(&self, name: &str) -> bool {
        HashSet::contains(self, name)
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name != "." && !name.contains("..") && !name.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::env::temp_dir;
    use std::fs;

    fn template_dir(name: &str) -> PathBuf {
        let directory = temp_dir().join(name);
        fs::create_dir_all(&directory).unwrap();
        directory
    }

    #[test]
    fn contains_templates_present_in_the_directory() {
        let directory = template_dir("control_panel_templates_present");
        fs::write(directory.join("dimmer.html"), "<div></div>").unwrap();

        let templates = DirectoryTemplates::new(&directory, "html");

        assert!(templates.contains("dimmer"));
        assert!(!templates.contains("color"));
    }

    #[test]
    fn ignores_files_with_another_extension() {
        let directory = template_dir("control_panel_templates_extension");
        fs::write(directory.join("toggle.txt"), "").unwrap();

        let templates = DirectoryTemplates::new(&directory, "html");

        assert!(!templates.contains("toggle"));
    }

    #[test]
    fn follows_changes_to_the_directory() {
        let directory = template_dir("control_panel_templates_changes");
        let file = directory.join("slider.html");
        let _ = fs::remove_file(&file);
        let templates = DirectoryTemplates::new(&directory, "html");

        assert!(!templates.contains("slider"));
        fs::write(&file, "").unwrap();
        assert!(templates.contains("slider"));
        fs::remove_file(&file).unwrap();
        assert!(!templates.contains("slider"));
    }

    #[rstest]
    #[case::empty("")]
    #[case::dot(".")]
    #[case::parent("..")]
    #[case::nested("nested/dimmer")]
    #[case::escape("../dimmer")]
    #[case::backslash("nested\\dimmer")]
    fn rejects_names_outside_the_directory(#[case] name: &str) {
        assert!(!is_valid_name(name));
    }

    #[test]
    fn hash_set_contains_its_members() {
        let templates: HashSet<String> = ["dimmer".to_string()].into();

        assert!(TemplateRegistry::contains(&templates, "dimmer"));
        assert!(!TemplateRegistry::contains(&templates, "Dimmer"));
    }
}
