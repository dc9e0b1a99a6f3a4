//! Single-template HTML export engine.

use std::io;
use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, instrument};

use pageport_core::{
    application::ports::{EngineError, ExportEngine, VirtualFilesystem},
    domain::{ExportLocation, Project},
};

use crate::{engine::RenderContext, vfs::MemoryFilesystem};

/// Template shipped with the binary; `pageport init` writes it to the
/// configured export location.
pub const DEFAULT_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="generator" content="{{GENERATOR}}">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{PROJECT_NAME}}</title>
  </head>
  <body data-project-id="{{PROJECT_ID}}">
    <main id="{{PROJECT_NAME_KEBAB}}"></main>
    <script type="application/json" id="project-data">{{PROJECT_DOCUMENT}}</script>
  </body>
</html>
"#;

/// Renders `<location>/<template>` with the project's variables into a
/// single `/index.html` file.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    template_name: String,
}

impl TemplateEngine {
    pub const DEFAULT_TEMPLATE_NAME: &'static str = "index.html";

    /// Create an engine reading `index.html` from the export location.
    pub fn new() -> Self {
        Self {
            template_name: Self::DEFAULT_TEMPLATE_NAME.to_string(),
        }
    }

    pub fn with_template(mut self, name: impl Into<String>) -> Self {
        self.template_name = name.into();
        self
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExportEngine for TemplateEngine {
    #[instrument(skip_all, fields(project = %project.name(), template = %self.template_name))]
    async fn export_html_project(
        &self,
        project: &Project,
        location: &ExportLocation,
    ) -> Result<Box<dyn VirtualFilesystem>, EngineError> {
        let template_path = location.join(&self.template_name);

        let source = tokio::fs::read_to_string(&template_path)
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => EngineError::with_source(
                    format!("template missing: {}", template_path.display()),
                    e,
                ),
                _ => EngineError::with_source(
                    format!("failed to read template {}", template_path.display()),
                    e,
                ),
            })?;

        let context = RenderContext::for_project(project)
            .map_err(|e| EngineError::with_source("failed to encode project document", e))?;
        let html = context.render(&source);
        debug!(bytes = html.len(), "Template rendered");

        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("/index.html"), html)
            .map_err(|e| EngineError::with_source("failed to store rendered page", e))?;

        Ok(Box::new(fs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageport_core::domain::ProjectId;

    fn project() -> Project {
        Project::new(ProjectId::new("p-1").unwrap(), "Landing").unwrap()
    }

    #[tokio::test]
    async fn renders_single_index_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>{{PROJECT_NAME}}</h1>").unwrap();

        let fs = TemplateEngine::new()
            .export_html_project(&project(), &ExportLocation::new(dir.path()))
            .await
            .unwrap();

        assert_eq!(fs.read_dir(Path::new("/")).unwrap(), vec!["index.html"]);
        assert_eq!(
            fs.read_file(Path::new("/index.html")).unwrap(),
            b"<h1>Landing</h1>"
        );
    }

    #[tokio::test]
    async fn missing_template_is_reported() {
        let dir = tempfile::tempdir().unwrap();

        let err = TemplateEngine::new()
            .export_html_project(&project(), &ExportLocation::new(dir.path()))
            .await
            .unwrap_err();

        assert!(err.message().starts_with("template missing: "));
        assert!(err.message().ends_with("index.html"));
    }

    #[tokio::test]
    async fn custom_template_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("print.html"), "{{PROJECT_ID}}").unwrap();

        let fs = TemplateEngine::new()
            .with_template("print.html")
            .export_html_project(&project(), &ExportLocation::new(dir.path()))
            .await
            .unwrap();

        assert_eq!(fs.read_file(Path::new("/index.html")).unwrap(), b"p-1");
    }

    #[test]
    fn default_template_uses_every_builtin_variable() {
        for variable in [
            "PROJECT_NAME",
            "PROJECT_NAME_KEBAB",
            "PROJECT_ID",
            "PROJECT_DOCUMENT",
            "GENERATOR",
        ] {
            assert!(DEFAULT_TEMPLATE.contains(&format!("{{{{{variable}}}}}")));
        }
    }
}
