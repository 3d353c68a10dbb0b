//! Project bootstrap template.
//!
//! A template is a flat list of files (relative path + text). Instantiating
//! it for a project applies the bootstrap rules:
//!
//! | Rule | Effect |
//! |------|--------|
//! | dotfile rename | `_gitignore` → `.gitignore` (at any depth) |
//! | manifest rewrite | root `package.json`: name, version, description |
//!
//! Dotfiles are shipped under an underscore name because package registries
//! strip `.gitignore` from published tarballs.

use std::collections::HashSet;

use crate::domain::{entities::common::RelativePath, error::DomainError, manifest};

/// File names renamed when a project is created.
const DOTFILE_RENAMES: [(&str, &str); 1] = [("_gitignore", ".gitignore")];

/// Root manifest rewritten with the project identity.
pub const PACKAGE_MANIFEST: &str = "package.json";

#[derive(Debug, Clone)]
pub struct ProjectTemplate {
    name: String,
    files: Vec<TemplateFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: RelativePath,
    pub content: String,
}

impl ProjectTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: RelativePath, content: impl Into<String>) {
        self.files.push(TemplateFile {
            path,
            content: content.into(),
        });
    }

    /// Builder-style [`Self::add_file`]; panics on an escaping path, so only
    /// use it with literal paths.
    pub fn with_file(mut self, path: &str, content: impl Into<String>) -> Self {
        match RelativePath::try_new(path) {
            Ok(p) => self.add_file(p, content),
            Err(e) => panic!("invalid template path literal: {e}"),
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &[TemplateFile] {
        &self.files
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::InvalidTemplate(format!(
                "template '{}' has no files",
                self.name
            )));
        }
        let mut seen = HashSet::new();
        for f in &self.files {
            if !seen.insert(&f.path) {
                return Err(DomainError::DuplicatePath {
                    path: f.path.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Produce the files for a concrete project.
    pub fn instantiate(&self, project_name: &str) -> Result<Vec<TemplateFile>, DomainError> {
        self.validate()?;
        validate_project_name(project_name)?;

        self.files
            .iter()
            .map(|file| {
                let path = match file.path.file_name() {
                    Some(name) => DOTFILE_RENAMES
                        .iter()
                        .find(|(from, _)| *from == name)
                        .map_or_else(|| file.path.clone(), |(_, to)| file.path.with_file_name(to)),
                    None => file.path.clone(),
                };

                let content = if path.as_path() == std::path::Path::new(PACKAGE_MANIFEST) {
                    manifest::rewrite_package_manifest(&file.content, project_name)?
                } else {
                    file.content.clone()
                };

                Ok(TemplateFile { path, content })
            })
            .collect()
    }
}

/// A project name becomes a directory name and the `package.json` name.
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(invalid("name cannot contain whitespace"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> ProjectTemplate {
        ProjectTemplate::new("test")
            .with_file("_gitignore", "node_modules\n")
            .with_file("package.json", r#"{"name":"template","version":"0.0.0","private":true}"#)
            .with_file("src/server.ts", "console.log('up');\n")
    }

    #[test]
    fn renames_gitignore() {
        let files = template().instantiate("my-api").unwrap();
        let paths: Vec<String> = files.iter().map(|f| f.path.to_string()).collect();
        assert!(paths.contains(&".gitignore".to_string()));
        assert!(!paths.contains(&"_gitignore".to_string()));
    }

    #[test]
    fn rewrites_root_manifest() {
        let files = template().instantiate("my-api").unwrap();
        let manifest = files
            .iter()
            .find(|f| f.path.to_string() == "package.json")
            .unwrap();
        assert!(manifest.content.contains(r#""name": "my-api""#));
        assert!(manifest.content.contains(r#""version": "1.0.0""#));
    }

    #[test]
    fn other_files_copied_verbatim() {
        let files = template().instantiate("my-api").unwrap();
        let server = files
            .iter()
            .find(|f| f.path.to_string() == "src/server.ts")
            .unwrap();
        assert_eq!(server.content, "console.log('up');\n");
    }

    #[test]
    fn empty_template_is_invalid() {
        assert!(matches!(
            ProjectTemplate::new("empty").instantiate("x"),
            Err(DomainError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn project_name_rules() {
        assert!(validate_project_name("my-api").is_ok());
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name(".hidden").is_err());
        assert!(validate_project_name("a/b").is_err());
        assert!(validate_project_name("my api").is_err());
    }
}
