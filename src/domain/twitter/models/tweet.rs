//! Tweet model definitions

use chrono::{DateTime, Utc};

/// A tweet owned by a single user
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Tweet {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tweet {
    /// Ownership check gating update and delete
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership_check() {
        let now = Utc::now();
        let tweet = Tweet {
            id: 7,
            user_id: 1,
            content: "hello".into(),
            created_at: now,
            updated_at: now,
        };
        assert!(tweet.is_owned_by(1));
        assert!(!tweet.is_owned_by(2));
    }
}
