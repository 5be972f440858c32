use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tabled::Tabled;

/// A project on Prott, matched locally by its name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Tabled)]
pub struct Project {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "ID")]
    pub id: String,
}

/// Account entry returned by /api/sketch_app/projects.json
#[derive(Debug, Deserialize)]
pub struct Account {
    #[serde(rename = "Projects", alias = "projects", default)]
    pub projects: Vec<Project>,
}

/// Projects listing: account key -> account
pub type ProjectsResponse = HashMap<String, Account>;

/// Body of POST /users/sign_in.json
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub user: Credentials<'a>,
}

#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> LoginRequest<'a> {
    pub fn new(email: &'a str, password: &'a str) -> Self {
        Self {
            user: Credentials { email, password },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_shape() {
        let body = serde_json::to_value(LoginRequest::new("me@example.com", "secret")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"user": {"email": "me@example.com", "password": "secret"}})
        );
    }

    #[test]
    fn test_projects_response_decodes_accounts() {
        let json = r#"{
            "12": {"Name": "Personal", "Projects": [{"id": "1", "name": "Proj"}]},
            "34": {"Name": "Team", "Projects": []}
        }"#;
        let accounts: ProjectsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(
            accounts["12"].projects,
            vec![Project {
                name: "Proj".to_string(),
                id: "1".to_string()
            }]
        );
        assert!(accounts["34"].projects.is_empty());
    }

    #[test]
    fn test_account_keys_accept_lowercase() {
        let json = r#"{"1": {"name": "Team", "projects": [{"id": "5", "name": "Web"}]}}"#;
        let accounts: ProjectsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(accounts["1"].projects[0].id, "5");
    }
}
