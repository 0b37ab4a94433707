use crate::describe::TypeCheck;
use crate::error::{CollectionError, Result};
use crate::queue::Queue;
use crate::stack::Stack;
use crate::streamable::Streamable;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;

// ============================================================================
// Container description
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    Queue,
    Stack,
}

/// Which runtime check guards the container's elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    #[default]
    Number,
    String,
    Boolean,
    Any,
}

impl ElementType {
    pub fn type_check(self) -> TypeCheck<Value> {
        match self {
            ElementType::Number => TypeCheck::numeric(),
            ElementType::String => TypeCheck::string(),
            ElementType::Boolean => TypeCheck::boolean(),
            ElementType::Any => TypeCheck::any(),
        }
    }
}

/// A queue or stack described in TOML or JSON:
///
/// ```toml
/// kind = "stack"
/// element_type = "number"
/// items = [1, 2, 3]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerConfig {
    pub kind: ContainerKind,
    #[serde(default)]
    pub element_type: ElementType,
    #[serde(default)]
    pub items: Vec<Value>,
}

impl ContainerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Picks the format from the extension; without one, sniffs for JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| CollectionError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => {
                let trimmed = content.trim_start();
                if trimmed.starts_with('{') {
                    Self::from_json_str(&content)
                } else {
                    Self::from_toml_str(&content)
                }
            }
        }
    }

    /// Builds the described container. Items are checked against
    /// `element_type` exactly as a constructor would check them.
    pub fn build(&self) -> Result<Container> {
        let check = self.element_type.type_check();
        let items = self.items.iter().cloned();
        Ok(match self.kind {
            ContainerKind::Queue => Container::Queue(Queue::with_items(items, check)?),
            ContainerKind::Stack => Container::Stack(Stack::with_items(items, check)?),
        })
    }
}

// ============================================================================
// Built container
// ============================================================================

#[derive(Debug)]
pub enum Container {
    Queue(Queue<Value>),
    Stack(Stack<Value>),
}

impl Container {
    pub fn kind(&self) -> ContainerKind {
        match self {
            Container::Queue(_) => ContainerKind::Queue,
            Container::Stack(_) => ContainerKind::Stack,
        }
    }

    pub fn size(&self) -> usize {
        match self {
            Container::Queue(queue) => queue.size(),
            Container::Stack(stack) => stack.size(),
        }
    }

    /// Streams every element out in removal order, leaving the container empty.
    pub fn drain_to_strings(&mut self) -> Vec<String> {
        match self {
            Container::Queue(queue) => Streamable::new(queue).create_stream().collect(),
            Container::Stack(stack) => Streamable::new(stack).create_stream().collect(),
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Queue(queue) => write!(f, "queue [{queue}]"),
            Container::Stack(stack) => write!(f, "stack [{stack}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Stage;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_toml_defaults() {
        let config = ContainerConfig::from_toml_str(r#"kind = "queue""#).unwrap();
        assert_eq!(config.kind, ContainerKind::Queue);
        assert_eq!(config.element_type, ElementType::Number);
        assert!(config.items.is_empty());
    }

    #[test]
    fn test_from_toml_with_items() {
        let config = ContainerConfig::from_toml_str(
            r#"
            kind = "stack"
            element_type = "string"
            items = ["a", "b"]
            "#,
        )
        .unwrap();
        assert_eq!(config.element_type, ElementType::String);
        assert_eq!(config.items, vec![json!("a"), json!("b")]);
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let err = ContainerConfig::from_toml_str(r#"kind = "deque""#).unwrap_err();
        assert!(matches!(err, CollectionError::Parse(_)));
    }

    #[test]
    fn test_build_queue_drains_fifo() {
        let config = ContainerConfig::from_json_str(r#"{"kind": "queue", "items": [1, 2, 3]}"#).unwrap();
        let mut container = config.build().unwrap();
        assert_eq!(container.kind(), ContainerKind::Queue);
        assert_eq!(container.to_string(), "queue [1, 2, 3]");
        assert_eq!(container.drain_to_strings(), vec!["1", "2", "3"]);
        assert_eq!(container.size(), 0);
    }

    #[test]
    fn test_build_stack_drains_lifo() {
        let config = ContainerConfig {
            kind: ContainerKind::Stack,
            element_type: ElementType::Boolean,
            items: vec![json!(true), json!(false)],
        };
        let mut container = config.build().unwrap();
        assert_eq!(container.drain_to_strings(), vec!["false", "true"]);
    }

    #[test]
    fn test_build_rejects_mismatched_items() {
        let config = ContainerConfig {
            kind: ContainerKind::Queue,
            element_type: ElementType::Number,
            items: vec![json!(1), json!("two")],
        };
        assert_eq!(
            config.build().unwrap_err(),
            CollectionError::invalid_type(Stage::Initialization, "number", "string")
        );
    }

    #[test]
    fn test_any_accepts_mixed_items() {
        let config = ContainerConfig {
            kind: ContainerKind::Queue,
            element_type: ElementType::Any,
            items: vec![json!(1), json!("two"), json!(null)],
        };
        assert_eq!(config.build().unwrap().size(), 3);
    }

    #[test]
    fn test_load_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "kind = \"stack\"\nitems = [4, 5]").unwrap();
        let config = ContainerConfig::load(file.path()).unwrap();
        assert_eq!(config.kind, ContainerKind::Stack);
        assert_eq!(config.items, vec![json!(4), json!(5)]);
    }

    #[test]
    fn test_load_sniffs_json_without_extension() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"kind": "queue", "items": [7]}}"#).unwrap();
        let config = ContainerConfig::load(file.path()).unwrap();
        assert_eq!(config.kind, ContainerKind::Queue);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ContainerConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, CollectionError::Io { .. }));
    }
}
