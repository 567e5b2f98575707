//! Authenticated user identity.

use serde::Serialize;
use utoipa::ToSchema;

/// Identity resolved from the bearer token (or the fixed demo identity).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthenticatedUser {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
}

impl AuthenticatedUser {
    /// The fixed identity used when demo mode is enabled.
    pub fn demo_user() -> Self {
        Self {
            id: "demo-user-id".to_string(),
            email: "demo@scoresweep.com".to_string(),
            full_name: Some("Demo User".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_user_identity() {
        let user = AuthenticatedUser::demo_user();
        assert_eq!(user.id, "demo-user-id");
        assert_eq!(user.email, "demo@scoresweep.com");
        assert_eq!(user.full_name.as_deref(), Some("Demo User"));
    }
}
