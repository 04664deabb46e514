use std::collections::HashSet;

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use crate::error::ServiceError;

/// The five many-to-many relations, identified by their table and columns.
/// One `replace` implementation serves all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationKind {
    SchoolLocation,
    SchoolCoach,
    GroupLocation,
    GroupCoach,
    GroupAdherent,
}

impl AssociationKind {
    pub fn table(self) -> &'static str {
        match self {
            Self::SchoolLocation => "school_locations",
            Self::SchoolCoach => "school_coaches",
            Self::GroupLocation => "groupe_locations",
            Self::GroupCoach => "groupe_coaches",
            Self::GroupAdherent => "groupe_adherents",
        }
    }

    pub fn owner_column(self) -> &'static str {
        match self {
            Self::SchoolLocation | Self::SchoolCoach => "school_id",
            Self::GroupLocation | Self::GroupCoach | Self::GroupAdherent => "groupe_id",
        }
    }

    pub fn related_column(self) -> &'static str {
        match self {
            Self::SchoolLocation | Self::GroupLocation => "location_id",
            Self::SchoolCoach | Self::GroupCoach => "coach_id",
            Self::GroupAdherent => "adherent_id",
        }
    }

    fn owner_table(self) -> &'static str {
        match self {
            Self::SchoolLocation | Self::SchoolCoach => "schools",
            Self::GroupLocation | Self::GroupCoach | Self::GroupAdherent => "groupes",
        }
    }

    fn owner_entity(self) -> &'static str {
        match self {
            Self::SchoolLocation | Self::SchoolCoach => "school",
            Self::GroupLocation | Self::GroupCoach | Self::GroupAdherent => "groupe",
        }
    }

    fn related_table(self) -> &'static str {
        match self {
            Self::SchoolLocation | Self::GroupLocation => "locations",
            Self::SchoolCoach | Self::GroupCoach => "coaches",
            Self::GroupAdherent => "adherents",
        }
    }

    fn related_entity(self) -> &'static str {
        match self {
            Self::SchoolLocation | Self::GroupLocation => "location",
            Self::SchoolCoach | Self::GroupCoach => "coach",
            Self::GroupAdherent => "adherent",
        }
    }
}

pub struct AssociationService;

impl AssociationService {
    /// Make the stored related-id set for `owner_id` equal exactly the
    /// submitted set. Duplicates collapse; an empty set clears the relation.
    /// Runs delete + batched insert in one transaction; any failure (including
    /// an unknown related id) rolls back to the pre-call state.
    pub async fn replace(
        pool: &SqlitePool,
        kind: AssociationKind,
        owner_id: Uuid,
        related_ids: &[Uuid],
    ) -> Result<(), ServiceError> {
        let mut seen = HashSet::new();
        let ids: Vec<Uuid> = related_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        let mut tx = pool.begin().await?;

        let owner_exists: bool = sqlx::query_scalar(&format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?1)",
            kind.owner_table()
        ))
        .bind(owner_id)
        .fetch_one(&mut *tx)
        .await?;
        if !owner_exists {
            return Err(ServiceError::NotFound {
                entity: kind.owner_entity(),
                id: owner_id,
            });
        }

        if !ids.is_empty() {
            let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
                "SELECT id FROM {} WHERE id IN (",
                kind.related_table()
            ));
            let mut sep = qb.separated(", ");
            for id in &ids {
                sep.push_bind(*id);
            }
            qb.push(")");
            let found: Vec<Uuid> = qb.build_query_scalar().fetch_all(&mut *tx).await?;
            if found.len() != ids.len() {
                let found: HashSet<Uuid> = found.into_iter().collect();
                let missing: Vec<Uuid> =
                    ids.iter().copied().filter(|id| !found.contains(id)).collect();
                return Err(ServiceError::ReferentialIntegrity {
                    entity: kind.related_entity(),
                    missing,
                });
            }
        }

        sqlx::query(&format!(
            "DELETE FROM {} WHERE {} = ?1",
            kind.table(),
            kind.owner_column()
        ))
        .bind(owner_id)
        .execute(&mut *tx)
        .await?;

        if !ids.is_empty() {
            // Single multi-row insert rather than one statement per id.
            let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
                "INSERT INTO {} ({}, {}) ",
                kind.table(),
                kind.owner_column(),
                kind.related_column()
            ));
            qb.push_values(ids.iter(), |mut row, related_id| {
                row.push_bind(owner_id).push_bind(*related_id);
            });
            qb.build().execute(&mut *tx).await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Read the current related-id set for an owner.
    pub async fn related_ids(
        pool: &SqlitePool,
        kind: AssociationKind,
        owner_id: Uuid,
    ) -> Result<Vec<Uuid>, ServiceError> {
        let ids: Vec<Uuid> = sqlx::query_scalar(&format!(
            "SELECT {} FROM {} WHERE {} = ?1",
            kind.related_column(),
            kind.table(),
            kind.owner_column()
        ))
        .bind(owner_id)
        .fetch_all(pool)
        .await?;
        Ok(ids)
    }
}
