//! Endpoint template catalog
//!
//! The sidebar lists named request presets. The catalog is fixed at startup:
//! either the built-in set below or an external TOML file referenced from the
//! config. Lookups by unknown name return None and callers treat that as a
//! no-op (a config mistake, not a user-facing failure).

use crate::types::{EndpointTemplate, HttpMethod};
use color_eyre::Result;
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Catalog {
    templates: Vec<EndpointTemplate>,
}

/// TOML shape for an external catalog file:
///
/// ```toml
/// [[templates]]
/// name = "health"
/// method = "GET"
/// url = "http://localhost:8080/health"
/// ```
#[derive(Debug, Deserialize)]
struct CatalogFile {
    templates: Vec<EndpointTemplate>,
}

impl Catalog {
    /// Look up a template by name
    pub fn get(&self, name: &str) -> Option<&EndpointTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Template at the given sidebar position
    pub fn get_index(&self, index: usize) -> Option<&EndpointTemplate> {
        self.templates.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EndpointTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)?;
        Ok(Self {
            templates: file.templates,
        })
    }

    /// Load a catalog from a TOML file on disk
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// The built-in presets for the collaborator API
    pub fn builtin() -> Self {
        let json_headers = || {
            let mut headers = BTreeMap::new();
            headers.insert("Content-Type".to_string(), "application/json".to_string());
            headers
        };

        let templates = vec![
            EndpointTemplate {
                name: "health".to_string(),
                method: HttpMethod::Get,
                url: "http://localhost:8080/health".to_string(),
                headers: BTreeMap::new(),
                body: None,
                note: None,
            },
            EndpointTemplate {
                name: "register".to_string(),
                method: HttpMethod::Post,
                url: "http://localhost:8080/api/register".to_string(),
                headers: json_headers(),
                body: Some(json!({
                    "name": "John Doe",
                    "email": "john@example.com",
                    "phone": "+1234567890",
                    "password": "Password123"
                })),
                note: None,
            },
            EndpointTemplate {
                name: "login".to_string(),
                method: HttpMethod::Post,
                url: "http://localhost:8080/api/login".to_string(),
                headers: json_headers(),
                body: Some(json!({
                    "email": "john@example.com",
                    "password": "Password123"
                })),
                note: None,
            },
            EndpointTemplate {
                name: "logout".to_string(),
                method: HttpMethod::Post,
                url: "http://localhost:8080/api/logout".to_string(),
                headers: json_headers(),
                body: None,
                note: Some("Token will be sent automatically via cookie".to_string()),
            },
            EndpointTemplate {
                name: "customers-list".to_string(),
                method: HttpMethod::Get,
                url: "http://localhost:8080/api/customers".to_string(),
                headers: json_headers(),
                body: None,
                note: Some("Token will be sent automatically via cookie".to_string()),
            },
            EndpointTemplate {
                name: "customers-create".to_string(),
                method: HttpMethod::Post,
                url: "http://localhost:8080/api/customers".to_string(),
                headers: json_headers(),
                body: Some(json!({
                    "name": "Jane Doe",
                    "email": "john@example.com",
                    "phone": "+1234567890",
                    "password": "Password123"
                })),
                note: None,
            },
        ];

        Self { templates }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_names() {
        let catalog = Catalog::builtin();
        let names: Vec<&str> = catalog.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "health",
                "register",
                "login",
                "logout",
                "customers-list",
                "customers-create"
            ]
        );
    }

    #[test]
    fn test_builtin_health_template() {
        let catalog = Catalog::builtin();
        let health = catalog.get("health").unwrap();
        assert_eq!(health.method, HttpMethod::Get);
        assert_eq!(health.url, "http://localhost:8080/health");
        assert!(health.headers.is_empty());
        assert!(health.body.is_none());
        assert!(health.note.is_none());
    }

    #[test]
    fn test_builtin_logout_has_note_and_no_body() {
        let catalog = Catalog::builtin();
        let logout = catalog.get("logout").unwrap();
        assert_eq!(logout.method, HttpMethod::Post);
        assert!(logout.body.is_none());
        assert_eq!(
            logout.note.as_deref(),
            Some("Token will be sent automatically via cookie")
        );
    }

    #[test]
    fn test_unknown_name_returns_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.get("does-not-exist").is_none());
    }

    #[test]
    fn test_get_index_matches_iteration_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get_index(0).unwrap().name, "health");
        assert_eq!(catalog.get_index(2).unwrap().name, "login");
        assert!(catalog.get_index(catalog.len()).is_none());
    }

    #[test]
    fn test_catalog_from_toml() {
        let toml = r#"
            [[templates]]
            name = "ping"
            method = "GET"
            url = "http://localhost:9000/ping"

            [[templates]]
            name = "create-widget"
            method = "POST"
            url = "http://localhost:9000/widgets"
            note = "Requires a prior login"

            [templates.headers]
            "Content-Type" = "application/json"

            [templates.body]
            name = "sprocket"
            size = 3
        "#;

        let catalog = Catalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.len(), 2);

        let ping = catalog.get("ping").unwrap();
        assert_eq!(ping.method, HttpMethod::Get);
        assert!(ping.body.is_none());

        let create = catalog.get("create-widget").unwrap();
        assert_eq!(create.method, HttpMethod::Post);
        assert_eq!(
            create.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(
            create.body,
            Some(serde_json::json!({"name": "sprocket", "size": 3}))
        );
        assert_eq!(create.note.as_deref(), Some("Requires a prior login"));
    }

    #[test]
    fn test_catalog_from_invalid_toml_errors() {
        assert!(Catalog::from_toml_str("templates = 5").is_err());
    }
}
