use sqlx::SqliteConnection;

use crate::models::{ClassRecord, NewClassRecord};

pub async fn fetch_records(conn: &mut SqliteConnection) -> Result<Vec<ClassRecord>, sqlx::Error> {
    sqlx::query_as::<_, ClassRecord>(
        r#"
        SELECT
            id, day, month, class_number, unit_number,
            class_character, contents, activities, observations
        FROM class_records
        ORDER BY id DESC
        "#,
    )
    .fetch_all(conn)
    .await
}

/// Inserts a record and returns its new id.
pub async fn insert_record(
    conn: &mut SqliteConnection,
    record: &NewClassRecord,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO class_records
            (day, month, class_number, unit_number,
            class_character, contents, activities, observations)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        "#,
    )
    .bind(record.day)
    .bind(record.month)
    .bind(record.class_number)
    .bind(record.unit_number)
    .bind(&record.class_character)
    .bind(&record.contents)
    .bind(&record.activities)
    .bind(&record.observations)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn delete_record(conn: &mut SqliteConnection, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM class_records WHERE id = ?1")
        .bind(id)
        .execute(conn)
        .await?
        .rows_affected();

    Ok(result)
}
