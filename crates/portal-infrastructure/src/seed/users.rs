use chrono::{DateTime, Utc};

use portal_core::auth::{User, UserRole};

use crate::identity::DemoAccount;

/// The two demo accounts: `admin`/`password` and `user`/`123456`.
pub fn demo_accounts(now: DateTime<Utc>) -> Vec<DemoAccount> {
    vec![
        DemoAccount {
            user: User {
                id: "1".to_string(),
                username: "admin".to_string(),
                email: "admin@example.com".to_string(),
                first_name: "管理".to_string(),
                last_name: "太郎".to_string(),
                role: UserRole::Admin,
                is_active: true,
                last_login_at: None,
                created_at: now,
            },
            password: "password".to_string(),
        },
        DemoAccount {
            user: User {
                id: "2".to_string(),
                username: "user".to_string(),
                email: "user@example.com".to_string(),
                first_name: "一般".to_string(),
                last_name: "花子".to_string(),
                role: UserRole::User,
                is_active: true,
                last_login_at: None,
                created_at: now,
            },
            password: "123456".to_string(),
        },
    ]
}
