use chrono::Utc;
use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 300;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name must not be empty".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!(
            "name must be at most {NAME_MAX_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), errors::ModelError> {
    if !price.is_finite() {
        return Err(errors::ModelError::Validation("price must be a finite number".into()));
    }
    Ok(())
}

pub fn validate_description(description: Option<&str>) -> Result<(), errors::ModelError> {
    if let Some(d) = description {
        if d.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(errors::ModelError::Validation(format!(
                "description must be at most {DESCRIPTION_MAX_LEN} characters"
            )));
        }
    }
    Ok(())
}

/// Insert a new product row; the id comes from the sequence and
/// `created_at` is stamped here so the returned model is complete.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    name: &str,
    price: f64,
    description: Option<&str>,
) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    validate_price(price)?;
    validate_description(description)?;

    let am = ActiveModel {
        name: Set(name.to_string()),
        price: Set(price),
        description: Set(description.map(str::to_string)),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
