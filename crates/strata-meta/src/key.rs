//! Field keys: a role prefix and a name.

use std::fmt;
use std::str::FromStr;

use crate::error::MetadataError;
use crate::ColumnKind;

/// What a field is for. Determines its storage kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    /// Material properties (numeric, validated against the property catalogue).
    Property,
    /// Free-form numeric fields.
    Field,
    /// Categorical labels (text).
    Group,
    /// Boundary-condition values (numeric).
    BoundaryCondition,
}

impl Role {
    /// Key prefix.
    pub fn prefix(&self) -> &'static str {
        match self {
            Role::Property => "property",
            Role::Field => "field",
            Role::Group => "group",
            Role::BoundaryCondition => "bc",
        }
    }

    /// Storage kind of fields with this role.
    pub fn kind(&self) -> ColumnKind {
        match self {
            Role::Group => ColumnKind::Text,
            _ => ColumnKind::Numeric,
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "property" => Some(Role::Property),
            "field" => Some(Role::Field),
            "group" | "slot" => Some(Role::Group),
            "bc" | "boundary-condition" => Some(Role::BoundaryCondition),
            _ => None,
        }
    }
}

/// A `role:name` field key. The name may itself contain `:`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldKey {
    role: Role,
    name: String,
}

impl FieldKey {
    /// Create a key.
    pub fn new(role: Role, name: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
        }
    }

    /// `property:<name>`
    pub fn property(name: impl Into<String>) -> Self {
        Self::new(Role::Property, name)
    }

    /// `field:<name>`
    pub fn field(name: impl Into<String>) -> Self {
        Self::new(Role::Field, name)
    }

    /// `group:<name>`
    pub fn group(name: impl Into<String>) -> Self {
        Self::new(Role::Group, name)
    }

    /// `bc:<name>`
    pub fn boundary_condition(name: impl Into<String>) -> Self {
        Self::new(Role::BoundaryCondition, name)
    }

    /// Role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Name without the prefix.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.role.prefix(), self.name)
    }
}

impl FromStr for FieldKey {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MetadataError::InvalidKey(s.to_string());
        let (prefix, name) = s.split_once(':').ok_or_else(invalid)?;
        let role = Role::from_prefix(prefix).ok_or_else(invalid)?;
        if name.is_empty() {
            return Err(invalid());
        }
        Ok(Self::new(role, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_print() {
        let key: FieldKey = "property:density".parse().unwrap();
        assert_eq!(key, FieldKey::property("density"));
        assert_eq!(key.to_string(), "property:density");

        let key: FieldKey = "bc:flux:x".parse().unwrap();
        assert_eq!(key.role(), Role::BoundaryCondition);
        assert_eq!(key.name(), "flux:x");
        assert_eq!(key.to_string(), "bc:flux:x");
    }

    #[test]
    fn test_slot_alias() {
        let key: FieldKey = "slot:material".parse().unwrap();
        assert_eq!(key, FieldKey::group("material"));
        assert_eq!(key.to_string(), "group:material");
    }

    #[test]
    fn test_invalid_keys() {
        for bad in ["density", "color:red", "field:", ":x", ""] {
            assert_eq!(
                bad.parse::<FieldKey>(),
                Err(MetadataError::InvalidKey(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_role_kinds() {
        assert_eq!(Role::Group.kind(), ColumnKind::Text);
        assert_eq!(Role::Property.kind(), ColumnKind::Numeric);
        assert_eq!(Role::BoundaryCondition.kind(), ColumnKind::Numeric);
    }
}
