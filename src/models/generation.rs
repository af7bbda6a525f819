use serde::{ Deserialize, Serialize };

/// The four code artifacts returned by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Component definition source
    pub component: String,
    pub css: String,
    pub html: String,
    /// Storybook stories file
    pub story: String,
}

/// One labeled block for the host's multi-result code panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeArtifact {
    pub title: String,
    pub language: String,
    pub code: String,
}

impl GenerationResult {
    /// Artifacts in the order the code panel shows them
    pub fn artifacts(&self) -> Vec<CodeArtifact> {
        let block = |title: &str, language: &str, code: &str| CodeArtifact {
            title: title.to_string(),
            language: language.to_string(),
            code: code.to_string(),
        };

        vec![
            block("Component code", "TYPESCRIPT", &self.component),
            block("CSS code", "CSS", &self.css),
            block("HTML code", "HTML", &self.html),
            block("Story", "TYPESCRIPT", &self.story)
        ]
    }

    /// File names and contents used when the artifacts are written to disk
    pub fn files(&self, component_name: &str) -> Vec<(String, &str)> {
        let stem = file_stem(component_name);
        vec![
            (format!("{}.component.ts", stem), self.component.as_str()),
            (format!("{}.component.css", stem), self.css.as_str()),
            (format!("{}.component.html", stem), self.html.as_str()),
            (format!("{}.stories.ts", stem), self.story.as_str())
        ]
    }
}

/// kebab-case file stem for a display name such as "Primary Button/Large"
fn file_stem(name: &str) -> String {
    let mut stem = String::new();
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !stem.is_empty() {
                stem.push('-');
            }
            pending_dash = false;
            stem.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if stem.is_empty() {
        "component".to_string()
    } else {
        stem
    }
}
