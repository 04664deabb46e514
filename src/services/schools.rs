use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    error::ServiceError,
    models::{
        coach::Coach,
        location::Location,
        school::{CreateSchoolRequest, School, UpdateSchoolRequest},
    },
};

pub struct SchoolService;

impl SchoolService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<School>, ServiceError> {
        let schools = sqlx::query_as::<_, School>("SELECT * FROM schools ORDER BY name")
            .fetch_all(pool)
            .await?;
        Ok(schools)
    }

    pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<School, ServiceError> {
        sqlx::query_as::<_, School>("SELECT * FROM schools WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(ServiceError::NotFound { entity: "school", id })
    }

    pub async fn create(
        pool: &SqlitePool,
        req: &CreateSchoolRequest,
    ) -> Result<School, ServiceError> {
        let school = sqlx::query_as::<_, School>(
            "INSERT INTO schools (id, name, created_at) VALUES (?1, ?2, ?3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;
        Ok(school)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        req: &UpdateSchoolRequest,
    ) -> Result<School, ServiceError> {
        sqlx::query_as::<_, School>(
            "UPDATE schools SET name = COALESCE(?1, name) WHERE id = ?2 RETURNING *",
        )
        .bind(&req.name)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(ServiceError::NotFound { entity: "school", id })
    }

    /// Locations currently associated with the school.
    pub async fn locations(pool: &SqlitePool, id: Uuid) -> Result<Vec<Location>, ServiceError> {
        let locations = sqlx::query_as::<_, Location>(
            "SELECT l.* FROM locations l
             JOIN school_locations sl ON sl.location_id = l.id
             WHERE sl.school_id = ?1
             ORDER BY l.name",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;
        Ok(locations)
    }

    /// Coaches currently associated with the school.
    pub async fn coaches(pool: &SqlitePool, id: Uuid) -> Result<Vec<Coach>, ServiceError> {
        let coaches = sqlx::query_as::<_, Coach>(
            "SELECT c.* FROM coaches c
             JOIN school_coaches sc ON sc.coach_id = c.id
             WHERE sc.school_id = ?1
             ORDER BY c.last_name, c.first_name",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;
        Ok(coaches)
    }
}
