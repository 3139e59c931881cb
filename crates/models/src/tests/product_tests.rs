use crate::db::connect;
use crate::product;
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{DatabaseConnection, EntityTrait};

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[test]
fn name_validation_bounds() {
    assert!(product::validate_name("Pen").is_ok());
    assert!(product::validate_name(&"x".repeat(product::NAME_MAX_LEN)).is_ok());
    assert!(product::validate_name(&"x".repeat(product::NAME_MAX_LEN + 1)).is_err());
    assert!(product::validate_name("").is_err());
    assert!(product::validate_name("   ").is_err());
}

#[test]
fn description_validation_bounds() {
    assert!(product::validate_description(None).is_ok());
    assert!(product::validate_description(Some("Blue ink")).is_ok());
    assert!(
        product::validate_description(Some(&"y".repeat(product::DESCRIPTION_MAX_LEN))).is_ok()
    );
    assert!(
        product::validate_description(Some(&"y".repeat(product::DESCRIPTION_MAX_LEN + 1)))
            .is_err()
    );
}

#[test]
fn price_must_be_finite() {
    assert!(product::validate_price(1.5).is_ok());
    assert!(product::validate_price(0.0).is_ok());
    assert!(product::validate_price(f64::NAN).is_err());
    assert!(product::validate_price(f64::INFINITY).is_err());
}

/// Test product row round-trip against a real database.
#[tokio::test]
async fn test_product_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = match setup_test_db().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return Ok(());
        }
    };

    // Create
    let created = product::create(&db, "Pen", 1.50, Some("Blue ink")).await?;
    assert!(created.id > 0);
    assert_eq!(created.name, "Pen");
    assert_eq!(created.price, 1.50);
    assert_eq!(created.description.as_deref(), Some("Blue ink"));

    // Read
    let found = product::Entity::find_by_id(created.id).one(&db).await?;
    let found = found.expect("created product should be readable");
    assert_eq!(found.id, created.id);
    assert_eq!(found.name, created.name);
    assert_eq!(found.created_at, created.created_at);

    // Delete and verify gone
    product::Entity::delete_by_id(created.id).exec(&db).await?;
    let after = product::Entity::find_by_id(created.id).one(&db).await?;
    assert!(after.is_none());

    Ok(())
}

/// Validation happens before the row is written.
#[tokio::test]
async fn test_create_rejects_invalid_fields() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = match setup_test_db().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return Ok(());
        }
    };

    let too_long = "x".repeat(product::NAME_MAX_LEN + 1);
    let res = product::create(&db, &too_long, 1.0, None).await;
    assert!(matches!(res, Err(crate::errors::ModelError::Validation(_))));

    Ok(())
}
