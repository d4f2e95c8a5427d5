use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated subject of a request, resolved from the bearer token.
/// Passed into handlers explicitly instead of living on a shared client.
#[derive(Clone, Debug)]
pub struct CallerIdentity {
    pub id: Uuid,
    pub role: Role,
    pub name: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Caregiver,
}

impl Role {
    /// Accepts the legacy Spanish role names still present in old rows.
    pub fn parse(role: &str) -> Option<Role> {
        match role.trim().to_lowercase().as_str() {
            "patient" | "usuario" | "paciente" => Some(Role::Patient),
            "caregiver" | "cuidador" | "familiar" => Some(Role::Caregiver),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Caregiver => "caregiver",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_roles() {
        assert_eq!(Role::parse("patient"), Some(Role::Patient));
        assert_eq!(Role::parse("caregiver"), Some(Role::Caregiver));
    }

    #[test]
    fn parses_legacy_aliases() {
        assert_eq!(Role::parse("Paciente"), Some(Role::Patient));
        assert_eq!(Role::parse(" cuidador "), Some(Role::Caregiver));
        assert_eq!(Role::parse("familiar"), Some(Role::Caregiver));
    }

    #[test]
    fn rejects_unknown_roles() {
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
    }
}
