use models::product::{self, Entity as ProductEntity};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};

use crate::errors::ServiceError;

/// List every product; empty store yields an empty vec, not an error.
pub async fn list_products<C: ConnectionTrait>(db: &C) -> Result<Vec<product::Model>, ServiceError> {
    let rows = ProductEntity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Create a product after validation; id and created_at are assigned here.
pub async fn create_product<C: ConnectionTrait>(
    db: &C,
    name: &str,
    price: f64,
    description: Option<&str>,
) -> Result<product::Model, ServiceError> {
    // validations live in models::product
    let created = product::create(db, name, price, description).await?;
    Ok(created)
}

/// Get a product by id.
pub async fn get_product<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<Option<product::Model>, ServiceError> {
    let found = ProductEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// Overwrite the mutable fields of a product. The id and created_at columns
/// keep their stored values.
pub async fn update_product<C: ConnectionTrait>(
    db: &C,
    id: i32,
    name: &str,
    price: f64,
    description: Option<&str>,
) -> Result<product::Model, ServiceError> {
    product::validate_name(name)?;
    product::validate_price(price)?;
    product::validate_description(description)?;

    let current = ProductEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(existing) = current else {
        return Err(ServiceError::not_found("product"));
    };
    let mut am: product::ActiveModel = existing.into();
    am.name = Set(name.to_string());
    am.price = Set(price);
    am.description = Set(description.map(str::to_string));
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete a product; returns true if a row was removed.
pub async fn delete_product<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ServiceError> {
    let res = ProductEntity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use sea_orm::TransactionTrait;

    #[tokio::test]
    async fn list_on_empty_store_returns_empty_vec() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        // Empty the table inside a transaction so concurrent tests keep
        // their rows and this one observes a truly empty store.
        let txn = db.begin().await?;
        ProductEntity::delete_many().exec(&txn).await?;
        let all = list_products(&txn).await?;
        assert!(all.is_empty());
        txn.rollback().await?;

        Ok(())
    }

    #[tokio::test]
    async fn product_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let created = create_product(&db, "Pen", 1.50, Some("Blue ink")).await?;
        let found = get_product(&db, created.id).await?.unwrap();
        assert_eq!(found.name, "Pen");
        assert_eq!(found.price, 1.50);
        assert_eq!(found.description.as_deref(), Some("Blue ink"));

        // Full overwrite keeps identity and creation time
        let updated = update_product(&db, created.id, "X", 2.0, None).await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "X");
        assert_eq!(updated.price, 2.0);
        assert!(updated.description.is_none());

        let all = list_products(&db).await?;
        assert!(all.iter().any(|p| p.id == created.id));

        let deleted = delete_product(&db, created.id).await?;
        assert!(deleted);
        let after = get_product(&db, created.id).await?;
        assert!(after.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn missing_id_yields_not_found() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        // Reserve then delete an id so it is guaranteed absent
        let ghost = create_product(&db, "Ghost", 0.0, None).await?;
        assert!(delete_product(&db, ghost.id).await?);

        assert!(get_product(&db, ghost.id).await?.is_none());
        let res = update_product(&db, ghost.id, "X", 2.0, None).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        assert!(!delete_product(&db, ghost.id).await?);

        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_invalid_fields() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let created = create_product(&db, "Mug", 9.99, None).await?;
        let too_long = "d".repeat(models::product::DESCRIPTION_MAX_LEN + 1);
        let res = update_product(&db, created.id, "Mug", 9.99, Some(&too_long)).await;
        assert!(matches!(res, Err(e) if e.is_validation()));

        // Row untouched by the failed update
        let found = get_product(&db, created.id).await?.unwrap();
        assert!(found.description.is_none());

        delete_product(&db, created.id).await?;
        Ok(())
    }
}
