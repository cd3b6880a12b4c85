//! API handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::AppState;
use crate::catalog;
use crate::error::{Error, Result};
use crate::types::{
    ActorEntry, ActorsResponse, FilmDetails, FilmResponse, InventoryEntry, InventoryResponse,
};

/// Home page greeting; never touches the database.
pub async fn home() -> Json<&'static str> {
    Json("Welcome to Sakila Database")
}

/// Film details by film id. 404 when the id has no row.
pub async fn film(
    State(state): State<AppState>,
    Path(film_id): Path<u16>,
) -> Result<Json<FilmResponse>> {
    let row = catalog::fetch_film(&state.pool, film_id)
        .await?
        .ok_or(Error::FilmNotFound)?;

    Ok(Json(FilmResponse {
        film: FilmDetails {
            title: row.title,
            description: row.description,
            release_year: row.release_year,
        },
    }))
}

/// All actors of a film, each with the rest of their filmography.
///
/// An unknown film id yields an empty list with 200 rather than a 404; the
/// route has no existence check, and adding one would change observable
/// behavior.
pub async fn film_actors(
    State(state): State<AppState>,
    Path(film_id): Path<u16>,
) -> Result<Json<ActorsResponse>> {
    let rows = catalog::fetch_film_actors(&state.pool, film_id).await?;

    let mut actors = Vec::with_capacity(rows.len());
    for row in rows {
        let other_films = catalog::fetch_other_films(&state.pool, row.actor_id, film_id)
            .await?
            .into_iter()
            .map(|film| (film.film_id, film.title))
            .collect();

        actors.push(ActorEntry {
            actor_id: row.actor_id,
            first_name: row.first_name,
            last_name: row.last_name,
            other_films,
        });
    }

    Ok(Json(ActorsResponse { actors }))
}

/// All inventory rows of a film, denormalized with its title.
///
/// The not-found check rides on the title lookup, which joins through
/// `inventory`: a film with zero inventory rows 404s here even though
/// `/film/{id}` would find it.
pub async fn film_inventory(
    State(state): State<AppState>,
    Path(film_id): Path<u16>,
) -> Result<Json<InventoryResponse>> {
    let rows = catalog::fetch_inventory(&state.pool, film_id).await?;

    let film_title = catalog::fetch_inventory_film_title(&state.pool, film_id)
        .await?
        .ok_or(Error::FilmNotFound)?;

    let inventory = rows
        .into_iter()
        .map(|row| InventoryEntry {
            inventory_id: row.inventory_id,
            store_id: row.store_id,
            last_update: row.last_update.format("%Y-%m-%d %H:%M:%S").to_string(),
            film_title: film_title.clone(),
        })
        .collect();

    Ok(Json(InventoryResponse { inventory }))
}
