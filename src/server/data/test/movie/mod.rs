use std::{collections::HashSet, sync::Arc};

use crate::{
    model::movie::Genre,
    server::{
        data::movie::MovieStore,
        model::movie::{CreateMovieParams, UpdateMovieParams},
        util::id::SequentialIdGenerator,
    },
};

mod create;
mod delete_by_id;
mod get_by_id;
mod list;
mod update_by_id;

/// Empty store with deterministic `movie-N` identifiers
fn empty_store() -> MovieStore {
    MovieStore::new(Vec::new(), Arc::new(SequentialIdGenerator::default()))
}

fn params(title: &str, genre: &[Genre]) -> CreateMovieParams {
    CreateMovieParams {
        title: title.to_string(),
        year: 2010,
        director: "C. Nolan".to_string(),
        duration: 148,
        rating: 8.8,
        poster: "http://x/p.jpg".to_string(),
        genre: genre.to_vec(),
    }
}
