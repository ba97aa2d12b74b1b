//! Project descriptor model
//!
//! A discovered project file is classified by the `TEMPLATE` value inside it.
//! The template set is open: qmake recognizes `app`, `lib`, `subdirs` and
//! `aux`, but any other identifier is carried through as-is rather than
//! rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Classification of a project file, taken from its `TEMPLATE` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Template {
    /// Runnable application
    App,
    /// Library
    Lib,
    /// Container project whose children are subdirectory projects
    Subdirs,
    /// Auxiliary project (no build output)
    Aux,
    /// Any other identifier found in the file
    Other(String),
}

impl Template {
    pub fn parse(value: &str) -> Self {
        match value {
            "app" => Template::App,
            "lib" => Template::Lib,
            "subdirs" => Template::Subdirs,
            "aux" => Template::Aux,
            other => Template::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Template::App => "app",
            Template::Lib => "lib",
            Template::Subdirs => "subdirs",
            Template::Aux => "aux",
            Template::Other(s) => s,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Template {
    fn from(value: String) -> Self {
        Template::parse(&value)
    }
}

impl From<Template> for String {
    fn from(value: Template) -> Self {
        value.as_str().to_string()
    }
}

/// One discovered project file
///
/// Descriptors are immutable snapshots: they are rebuilt from the file system
/// on every fetch and never cached across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    /// Project-file base name with the suffix stripped
    pub name: String,
    /// Path of the discovered project file
    pub path: PathBuf,
    /// Classification extracted from the file
    pub template: Template,
    /// True iff `template == Template::App`
    pub is_runnable: bool,
}

impl ProjectDescriptor {
    pub fn new(name: String, path: PathBuf, template: Template) -> Self {
        let is_runnable = template == Template::App;
        Self {
            name,
            path,
            template,
            is_runnable,
        }
    }

    /// Whether the host may ask for this node's children
    pub fn is_expandable(&self) -> bool {
        self.template == Template::Subdirs
    }

    /// Host-facing description string shown next to the label
    pub fn description(&self) -> &str {
        if self.is_runnable {
            "Runnable"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        app = { "app", Template::App },
        lib = { "lib", Template::Lib },
        subdirs = { "subdirs", Template::Subdirs },
        auxiliary = { "aux", Template::Aux },
        vcapp = { "vcapp", Template::Other("vcapp".to_string()) },
    )]
    fn test_template_parse(input: &str, expected: Template) {
        assert_eq!(Template::parse(input), expected);
    }

    #[parameterized(
        app = { Template::App, "app" },
        other = { Template::Other("vclib".to_string()), "vclib" },
    )]
    fn test_template_display(template: Template, expected: &str) {
        assert_eq!(template.to_string(), expected);
    }

    #[test]
    fn test_descriptor_runnable() {
        let d = ProjectDescriptor::new(
            "App1".to_string(),
            PathBuf::from("/ws/App1/App1.pro"),
            Template::App,
        );
        assert!(d.is_runnable);
        assert!(!d.is_expandable());
        assert_eq!(d.description(), "Runnable");
    }

    #[test]
    fn test_descriptor_subdirs_expandable() {
        let d = ProjectDescriptor::new(
            "Libs".to_string(),
            PathBuf::from("/ws/Libs/Libs.pro"),
            Template::Subdirs,
        );
        assert!(!d.is_runnable);
        assert!(d.is_expandable());
        assert_eq!(d.description(), "");
    }

    #[test]
    fn test_descriptor_serialization() {
        let d = ProjectDescriptor::new(
            "Core".to_string(),
            PathBuf::from("/ws/Libs/Core/Core.pro"),
            Template::Lib,
        );

        let json = serde_json::to_string(&d).unwrap();
        assert!(json.contains("\"template\":\"lib\""));
        assert!(json.contains("\"is_runnable\":false"));

        let back: ProjectDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_unknown_template_round_trips() {
        let d = ProjectDescriptor::new(
            "Odd".to_string(),
            PathBuf::from("/ws/Odd/Odd.pro"),
            Template::Other("vcsubdirs".to_string()),
        );

        let json = serde_json::to_string(&d).unwrap();
        let back: ProjectDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back.template, Template::Other("vcsubdirs".to_string()));
    }
}
