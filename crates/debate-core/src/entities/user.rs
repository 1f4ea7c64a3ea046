//! User entity - local projection of the identity service's user record

/// Role string carried by administrators
pub const ADMIN_ROLE: &str = "ROLE_ADMIN";

/// User projection kept in sync by user events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub nation: String,
    pub language: String,
    pub role: String,
    pub address: String,
}

impl User {
    /// Create a user with the default role
    pub fn new(id: i64, name: String, nation: String, language: String) -> Self {
        Self {
            id,
            name,
            nation,
            language,
            role: "ROLE_USER".to_string(),
            address: String::new(),
        }
    }

    /// Check if the user may publish debates
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case(ADMIN_ROLE) || self.role.eq_ignore_ascii_case("admin")
    }
}
