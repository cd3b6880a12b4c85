//! SQL query layer over the Sakila schema
//!
//! One async function per statement, each running against the shared pool
//! with bound parameters. The schema is external and read-only; nothing in
//! this module mutates it.

use chrono::NaiveDateTime;
use sqlx::{FromRow, MySqlPool};

use crate::Result;

/// A `film` row projection.
#[derive(Debug, Clone, FromRow)]
pub struct FilmRow {
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<u16>,
}

/// An `actor` row joined to the queried film.
#[derive(Debug, Clone, FromRow)]
pub struct ActorRow {
    pub actor_id: u16,
    pub first_name: String,
    pub last_name: String,
}

/// A film appearance of an actor other than the queried film.
#[derive(Debug, Clone, FromRow)]
pub struct OtherFilmRow {
    pub film_id: u16,
    pub title: String,
}

/// An `inventory` row for the queried film.
#[derive(Debug, Clone, FromRow)]
pub struct InventoryRow {
    pub inventory_id: u32,
    pub store_id: u8,
    pub last_update: NaiveDateTime,
}

/// Fetch a single film's details, or `None` if the id has no row.
pub async fn fetch_film(pool: &MySqlPool, film_id: u16) -> Result<Option<FilmRow>> {
    let row = sqlx::query_as::<_, FilmRow>(
        "SELECT title, description, release_year \
         FROM film \
         WHERE film_id = ?",
    )
    .bind(film_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Fetch every actor joined to a film through `film_actor`.
pub async fn fetch_film_actors(pool: &MySqlPool, film_id: u16) -> Result<Vec<ActorRow>> {
    let rows = sqlx::query_as::<_, ActorRow>(
        "SELECT a.actor_id, a.first_name, a.last_name \
         FROM actor a \
         JOIN film_actor fa ON a.actor_id = fa.actor_id \
         WHERE fa.film_id = ?",
    )
    .bind(film_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Fetch every film an actor appears in, excluding the queried film.
/// Row order is whatever the database returns.
pub async fn fetch_other_films(
    pool: &MySqlPool,
    actor_id: u16,
    film_id: u16,
) -> Result<Vec<OtherFilmRow>> {
    let rows = sqlx::query_as::<_, OtherFilmRow>(
        "SELECT f.film_id, f.title \
         FROM film f \
         JOIN film_actor fa ON f.film_id = fa.film_id \
         WHERE fa.actor_id = ? AND f.film_id != ?",
    )
    .bind(actor_id)
    .bind(film_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Fetch every inventory row holding a film.
pub async fn fetch_inventory(pool: &MySqlPool, film_id: u16) -> Result<Vec<InventoryRow>> {
    let rows = sqlx::query_as::<_, InventoryRow>(
        "SELECT inv.inventory_id, inv.store_id, inv.last_update \
         FROM inventory inv \
         JOIN film fi ON inv.film_id = fi.film_id \
         WHERE fi.film_id = ?",
    )
    .bind(film_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Fetch a film's title through its inventory join. Returns `None` when the
/// film has no inventory rows at all, even if the film itself exists; the
/// inventory route's existence check is driven by this query.
pub async fn fetch_inventory_film_title(
    pool: &MySqlPool,
    film_id: u16,
) -> Result<Option<String>> {
    let title = sqlx::query_scalar::<_, String>(
        "SELECT f.title \
         FROM film f \
         JOIN inventory fi ON f.film_id = fi.film_id \
         WHERE fi.film_id = ?",
    )
    .bind(film_id)
    .fetch_optional(pool)
    .await?;

    Ok(title)
}
