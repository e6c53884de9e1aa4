//! Existence checks and name lookups shared by the record modules.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

use crate::entity::reference_record;
use crate::error::{AppError, AppResult};
use crate::models::ReferenceKind;

/// Verify that `id` (when present) points at a reference record of `kind`.
pub(crate) async fn check_reference<C: ConnectionTrait>(
    db: &C,
    field: &str,
    id: Option<Uuid>,
    kind: ReferenceKind,
) -> AppResult<()> {
    let Some(id) = id else {
        return Ok(());
    };

    match reference_record::Entity::find_by_id(id).one(db).await? {
        Some(record) if record.kind == kind.as_str() => Ok(()),
        Some(_) => Err(AppError::InvalidInput(format!(
            "{} {} is not a {}",
            field,
            id,
            kind.label().to_lowercase()
        ))),
        None => Err(AppError::InvalidInput(format!(
            "{} {} does not exist",
            field, id
        ))),
    }
}

/// Resolve reference record names for every present id.
pub(crate) async fn reference_names<C, I>(db: &C, ids: I) -> AppResult<HashMap<Uuid, String>>
where
    C: ConnectionTrait,
    I: IntoIterator<Item = Option<Uuid>>,
{
    let mut ids: Vec<Uuid> = ids.into_iter().flatten().collect();
    ids.sort();
    ids.dedup();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let records = reference_record::Entity::find()
        .filter(reference_record::Column::Id.is_in(ids))
        .all(db)
        .await?;

    Ok(records.into_iter().map(|r| (r.id, r.name)).collect())
}

/// Ids from `requested` that are absent from `found`.
pub(crate) fn missing_ids(requested: &[Uuid], found: &[Uuid]) -> Vec<Uuid> {
    requested
        .iter()
        .filter(|id| !found.contains(id))
        .copied()
        .collect()
}

/// Fail with the list of unknown ids when any requested id was not found.
pub(crate) fn ensure_all_found(field: &str, requested: &[Uuid], found: &[Uuid]) -> AppResult<()> {
    let missing = missing_ids(requested, found);
    if missing.is_empty() {
        return Ok(());
    }

    let listed: Vec<String> = missing.iter().map(Uuid::to_string).collect();
    Err(AppError::InvalidInput(format!(
        "{} contains unknown ids: {}",
        field,
        listed.join(", ")
    )))
}

/// Reject `number` when another row of `E` already carries it.
///
/// `exclude` skips the record being updated.
pub(crate) async fn ensure_number_available<E, C>(
    db: &C,
    number_column: E::Column,
    id_column: E::Column,
    number: &str,
    exclude: Option<Uuid>,
) -> AppResult<()>
where
    E: EntityTrait,
    E::Model: Sync,
    C: ConnectionTrait,
{
    let mut query = E::find().filter(number_column.eq(number));
    if let Some(id) = exclude {
        query = query.filter(id_column.ne(id));
    }

    if query.count(db).await? > 0 {
        return Err(AppError::DuplicateNumber(number.to_string()));
    }
    Ok(())
}
