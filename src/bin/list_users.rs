//! Print every user with its posts and profile, in full.

use userdb::app::user_list_with_relations;
use userdb::error::AppError;
use userdb::infra::init_db;

fn main() -> Result<(), AppError> {
    env_logger::init();

    let db_path = userdb::resolve_db_path();
    let pool = init_db(&db_path)?;

    let users = user_list_with_relations(&pool)?;
    let json = serde_json::to_string_pretty(&users)
        .map_err(|e| AppError::Db(e.to_string()))?;
    println!("{}", json);

    Ok(())
}
