//! Response payload types
//!
//! These are transient, request-scoped projections of rows owned by the
//! external Sakila schema. Nothing here is ever written back.

use serde::Serialize;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Film details, wrapped as `{"film": {...}}`.
#[derive(Debug, Serialize)]
pub struct FilmResponse {
    pub film: FilmDetails,
}

#[derive(Debug, Serialize)]
pub struct FilmDetails {
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<u16>,
}

/// Actor list for a film, wrapped as `{"actors": [...]}`.
#[derive(Debug, Serialize)]
pub struct ActorsResponse {
    pub actors: Vec<ActorEntry>,
}

/// One actor of the queried film. `other_films` lists every other film the
/// actor appears in as `[film_id, title]` pairs, in the order the database
/// returned them.
#[derive(Debug, Serialize)]
pub struct ActorEntry {
    pub actor_id: u16,
    pub first_name: String,
    pub last_name: String,
    pub other_films: Vec<(u16, String)>,
}

/// Inventory list for a film, wrapped as `{"inventory": [...]}`.
#[derive(Debug, Serialize)]
pub struct InventoryResponse {
    pub inventory: Vec<InventoryEntry>,
}

/// One inventory row, denormalized with the title of the film it holds.
/// `last_update` carries the timestamp's textual rendering.
#[derive(Debug, Serialize)]
pub struct InventoryEntry {
    pub inventory_id: u32,
    pub store_id: u8,
    pub last_update: String,
    pub film_title: String,
}
