//! Seed the demo users and print each created record.

use userdb::app::{user_create, UserCreateReq};
use userdb::error::AppError;
use userdb::infra::init_db;

const SEED_USERS: &[(&str, &str)] = &[
    ("Sadman Islam", "sadman@email.com"),
    ("Tahmid Rahman", "tahmid@email.com"),
    ("Shaheenur Rashid", "rashid@email.com"),
    ("Dhiraj Dhar", "vatija@email.com"),
];

fn main() -> Result<(), AppError> {
    env_logger::init();

    let db_path = userdb::resolve_db_path();
    let pool = init_db(&db_path)?;

    // Strictly in sequence: stop on the first failure.
    for (name, email) in SEED_USERS {
        let user = user_create(
            &pool,
            UserCreateReq {
                name: name.to_string(),
                email: email.to_string(),
                role: None,
            },
        )?;
        let json = serde_json::to_string_pretty(&user)
            .map_err(|e| AppError::Db(e.to_string()))?;
        println!("Created user: {}", json);
    }

    Ok(())
}
