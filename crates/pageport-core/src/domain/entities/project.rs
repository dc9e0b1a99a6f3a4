use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::ProjectId};

/// A design project as held by the data store.
///
/// The export service only reads [`Project::name`]; the document body is an
/// opaque JSON tree handed through to the export engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    #[serde(default)]
    document: serde_json::Value,
}

impl Project {
    pub fn new(id: ProjectId, name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyProjectName);
        }
        Ok(Self {
            id,
            name,
            document: serde_json::Value::Null,
        })
    }

    pub fn with_document(mut self, document: serde_json::Value) -> Self {
        self.document = document;
        self
    }

    /// Parse a project record from its JSON form.
    pub fn from_json(source: &str) -> Result<Self, DomainError> {
        let project: Self = serde_json::from_str(source)
            .map_err(|e| DomainError::InvalidProject(e.to_string()))?;
        project.validate()?;
        Ok(project)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.as_str().trim().is_empty() {
            return Err(DomainError::EmptyIdentifier { kind: "project" });
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyProjectName);
        }
        Ok(())
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn document(&self) -> &serde_json::Value {
        &self.document
    }

    /// `<name>.html`, the name used for the default save slot.
    pub fn default_file_name(&self) -> String {
        format!("{}.html", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_record_with_document() {
        let project = Project::from_json(
            r#"{"id":"p-1","name":"Landing","document":{"pages":[{"name":"Home"}]}}"#,
        )
        .unwrap();

        assert_eq!(project.name(), "Landing");
        assert_eq!(project.id().as_str(), "p-1");
        assert_eq!(project.document()["pages"][0]["name"], "Home");
    }

    #[test]
    fn document_is_optional() {
        let project = Project::from_json(r#"{"id":"p-1","name":"Landing"}"#).unwrap();
        assert!(project.document().is_null());
    }

    #[test]
    fn rejects_blank_name() {
        let err = Project::from_json(r#"{"id":"p-1","name":"  "}"#).unwrap_err();
        assert_eq!(err, DomainError::EmptyProjectName);
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            Project::from_json("{"),
            Err(DomainError::InvalidProject(_))
        ));
    }

    #[test]
    fn default_file_name_appends_extension() {
        let project = Project::new(ProjectId::new("p").unwrap(), "Landing").unwrap();
        assert_eq!(project.default_file_name(), "Landing.html");
    }
}
