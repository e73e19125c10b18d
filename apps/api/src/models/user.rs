//! User model for Fanclub
//!
//! Users are both creators and subscribers: they author posts, hold a
//! balance, and subscribe to each other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User record from the users table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Account balance
    pub balance: f64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// User creation input
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub balance: f64,
}

/// User update input; unset fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeUser {
    pub name: Option<String>,
    pub balance: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serialization() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            balance: 12.5,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["balance"], 12.5);
    }
}
