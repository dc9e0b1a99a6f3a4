//! Variable substitution for export templates.

use std::collections::HashMap;

use pageport_core::domain::Project;

/// Context for rendering an export template.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | "Landing &amp; Docs" | Project name, HTML-escaped |
/// | `PROJECT_NAME_KEBAB` | "landing-docs" | Computed |
/// | `PROJECT_ID` | "p-1" | Project id |
/// | `PROJECT_DOCUMENT` | `{"pages":[]}` | Project document as compact JSON, safe inside `<script>` |
/// | `GENERATOR` | "pageport 0.1.0" | Crate version |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Build the standard variables for `project`.
    pub fn for_project(project: &Project) -> Result<Self, serde_json::Error> {
        let document = serde_json::to_string(project.document())?;

        let mut variables = HashMap::new();
        variables.insert("PROJECT_NAME".to_string(), escape_html(project.name()));
        variables.insert("PROJECT_NAME_KEBAB".to_string(), to_kebab_case(project.name()));
        variables.insert("PROJECT_ID".to_string(), escape_html(project.id().as_str()));
        variables.insert("PROJECT_DOCUMENT".to_string(), escape_script(&document));
        variables.insert(
            "GENERATOR".to_string(),
            format!("pageport {}", env!("CARGO_PKG_VERSION")),
        );

        Ok(Self { variables })
    }

    /// Add a custom variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace every `{{VARIABLE}}` placeholder.
    ///
    /// Unknown placeholders are left as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON embedded in a `<script>` element must not close it early.
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn to_kebab_case(input: &str) -> String {
    input
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageport_core::domain::ProjectId;
    use serde_json::json;

    fn project(name: &str) -> Project {
        Project::new(ProjectId::new("p-1").unwrap(), name).unwrap()
    }

    #[test]
    fn renders_builtin_variables() {
        let ctx = RenderContext::for_project(&project("Landing Page")).unwrap();
        assert_eq!(
            ctx.render("<title>{{PROJECT_NAME}}</title><!-- {{PROJECT_NAME_KEBAB}} -->"),
            "<title>Landing Page</title><!-- landing-page -->"
        );
    }

    #[test]
    fn escapes_project_name() {
        let ctx = RenderContext::for_project(&project("A & <B>")).unwrap();
        assert_eq!(ctx.get("PROJECT_NAME"), Some("A &amp; &lt;B&gt;"));
    }

    #[test]
    fn document_cannot_close_script_tag() {
        let p = project("Landing").with_document(json!({"html": "</script>"}));
        let ctx = RenderContext::for_project(&p).unwrap();
        assert_eq!(ctx.get("PROJECT_DOCUMENT"), Some(r#"{"html":"<\/script>"}"#));
    }

    #[test]
    fn unknown_placeholders_are_kept() {
        let ctx = RenderContext::for_project(&project("Landing")).unwrap();
        assert_eq!(ctx.render("{{UNKNOWN}}"), "{{UNKNOWN}}");
    }

    #[test]
    fn custom_variables_override() {
        let ctx = RenderContext::for_project(&project("Landing"))
            .unwrap()
            .with_variable("GENERATOR", "test");
        assert_eq!(ctx.render("{{GENERATOR}}"), "test");
    }
}
