use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaborator {
    pub login: String,
    #[serde(default)]
    pub permissions: Option<CollaboratorPermissions>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollaboratorPermissions {
    #[serde(default)]
    pub admin: Option<bool>,
    #[serde(default)]
    pub maintain: Option<bool>,
    #[serde(default)]
    pub push: Option<bool>,
    #[serde(default)]
    pub pull: Option<bool>,
}

impl Collaborator {
    /// Only an explicit `maintain: true` counts; admins without it do not.
    pub fn is_maintainer(&self) -> bool {
        self.permissions
            .as_ref()
            .and_then(|p| p.maintain)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_maintainer() {
        let maintainer: Collaborator = serde_json::from_value(serde_json::json!({
            "login": "alice",
            "permissions": {"admin": false, "maintain": true, "push": true, "pull": true}
        }))
        .unwrap();
        assert!(maintainer.is_maintainer());

        let writer: Collaborator = serde_json::from_value(serde_json::json!({
            "login": "bob",
            "permissions": {"admin": true, "maintain": false, "push": true, "pull": true}
        }))
        .unwrap();
        assert!(!writer.is_maintainer());

        let partial: Collaborator = serde_json::from_value(serde_json::json!({
            "login": "carol",
            "permissions": {"pull": true}
        }))
        .unwrap();
        assert!(!partial.is_maintainer());

        let bare: Collaborator =
            serde_json::from_value(serde_json::json!({"login": "dave"})).unwrap();
        assert!(bare.permissions.is_none());
        assert!(!bare.is_maintainer());
    }
}
