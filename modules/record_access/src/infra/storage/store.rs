//! SeaORM store implementation, generic over the entity

use crate::contract::{Record, Saved, StoreError};
use crate::domain::store::{RecordStore, Window};
use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Order};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Iterable,
    ModelTrait, PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder, QuerySelect,
};
use std::marker::PhantomData;
use std::sync::Arc;

/// Store over one SeaORM entity, sharing the module's connection pool
pub struct SeaOrmStore<E> {
    db: Arc<DatabaseConnection>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmStore<E> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

impl<E> Clone for SeaOrmStore<E> {
    fn clone(&self) -> Self {
        Self::new(self.db.clone())
    }
}

#[async_trait]
impl<E> RecordStore<E::Model> for SeaOrmStore<E>
where
    E: EntityTrait,
    E::Model: Record + IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Send,
    <E::Model as Record>::Id: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    async fn count(&self) -> Result<u64, StoreError> {
        Ok(E::find().count(&*self.db).await?)
    }

    async fn find_window(&self, window: &Window) -> Result<Vec<E::Model>, StoreError> {
        let mut query = E::find();

        if let Some(order) = window.order.as_deref() {
            for (expr, direction) in sort_terms(order) {
                query = query.order_by(Expr::cust(expr), direction);
            }
        }
        if let Some(offset) = window.offset {
            query = query.offset(offset);
        }
        if let Some(limit) = window.limit {
            query = query.limit(limit);
        }

        Ok(query.all(&*self.db).await?)
    }

    async fn find_by_id(
        &self,
        id: <E::Model as Record>::Id,
    ) -> Result<Option<E::Model>, StoreError> {
        Ok(E::find_by_id(id).one(&*self.db).await?)
    }

    async fn save(&self, record: E::Model) -> Result<Saved<E::Model>, StoreError> {
        let key_column = primary_key_column::<E>()?;
        let keyed = record.has_id();
        let mut active = overwrite_all::<E>(&record);

        let saved = if keyed {
            match active.clone().update(&*self.db).await {
                Err(DbErr::RecordNotUpdated) => active.insert(&*self.db).await?,
                other => other?,
            }
        } else {
            active.not_set(key_column);
            active.insert(&*self.db).await?
        };

        Ok(Saved::new(saved, 1))
    }

    async fn update(&self, record: E::Model) -> Result<Saved<E::Model>, StoreError> {
        match overwrite_all::<E>(&record).update(&*self.db).await {
            Ok(saved) => Ok(Saved::new(saved, 1)),
            Err(DbErr::RecordNotUpdated) => Err(StoreError::NoRow),
            Err(err) => Err(err.into()),
        }
    }

    async fn delete(&self, id: <E::Model as Record>::Id) -> Result<u64, StoreError> {
        let result = E::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected)
    }
}

/// Active model with every column marked Set, so the write is a full overwrite.
fn overwrite_all<E: EntityTrait>(record: &E::Model) -> E::ActiveModel {
    let mut active = <E::ActiveModel as ActiveModelTrait>::default();
    for column in E::Column::iter() {
        active.set(column, record.get(column));
    }
    active
}

fn primary_key_column<E: EntityTrait>() -> Result<E::Column, DbErr> {
    E::PrimaryKey::iter()
        .next()
        .map(PrimaryKeyToColumn::into_column)
        .ok_or_else(|| DbErr::Custom(format!("{} has no primary key", E::default().table_name())))
}

/// Split a raw sort expression into `(expression, direction)` terms.
///
/// Terms are comma separated; a trailing `asc`/`desc` selects the direction.
/// The expression itself is not validated, so unknown columns fail in the
/// database.
fn sort_terms(order: &str) -> Vec<(String, Order)> {
    order
        .split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(|term| match term.rsplit_once(char::is_whitespace) {
            Some((expr, dir)) if dir.eq_ignore_ascii_case("desc") => {
                (expr.trim_end().to_string(), Order::Desc)
            }
            Some((expr, dir)) if dir.eq_ignore_ascii_case("asc") => {
                (expr.trim_end().to_string(), Order::Asc)
            }
            _ => (term.to_string(), Order::Asc),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_column_sorts_ascending() {
        let terms = sort_terms("id");
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].0, "id");
        assert!(matches!(terms[0].1, Order::Asc));
    }

    #[test]
    fn direction_suffix_is_case_insensitive() {
        let terms = sort_terms("name DESC, id asc");
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].0, "name");
        assert!(matches!(terms[0].1, Order::Desc));
        assert_eq!(terms[1].0, "id");
        assert!(matches!(terms[1].1, Order::Asc));
    }

    #[test]
    fn expression_passes_through_untouched() {
        let terms = sort_terms("lower(name)  desc");
        assert_eq!(terms[0].0, "lower(name)");
        assert!(matches!(terms[0].1, Order::Desc));
    }

    #[test]
    fn empty_terms_are_skipped() {
        assert!(sort_terms(" , ").is_empty());
    }
}
