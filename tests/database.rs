mod common;

use quiz_api::infrastructure::db::Database;

use common::test_config;

#[tokio::test]
async fn migrations_apply_once_then_report_nothing_pending() {
    let config = test_config();
    let db = Database::init_db(&config.database).await.unwrap();

    assert_eq!(db.run_migrations().await.unwrap(), 2);
    assert_eq!(db.run_migrations().await.unwrap(), 0);

    db.close().await.unwrap();
}
