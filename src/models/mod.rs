//! Models Module
//!
//! Typed views of the JSON documents returned by the REST service.

mod location;

pub use location::{LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter};
