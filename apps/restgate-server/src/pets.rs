//! The pet-store sample resource.
//!
//! A complete consumer of the dispatch engine: list, get, create, update,
//! and delete over an in-memory store. Storage synchronization is the
//! consumer's job, so the store is a [`DashMap`] owned by the handler
//! closures.

use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use restgate_core::{Resource, ResourceConfig, decode_body};

/// Path parameter carrying the pet identifier.
pub const ID_PARAMETER: &str = "petId";

/// Kind of pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PetType {
    /// A cat.
    Cat,
    /// A dog.
    Dog,
}

/// A stored pet record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    /// Generated or caller-chosen identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Kind of pet.
    #[serde(rename = "type")]
    pub pet_type: PetType,
}

/// Payload accepted by create and update calls.
#[derive(Debug, Deserialize)]
struct CreateUpdatePetRequest {
    name: String,
    #[serde(rename = "type")]
    pet_type: PetType,
}

/// In-memory pet store shared by the handler closures.
#[derive(Debug, Default)]
struct PetStore {
    pets: DashMap<String, Pet>,
}

impl PetStore {
    fn list(&self) -> Vec<Pet> {
        self.pets.iter().map(|entry| entry.value().clone()).collect()
    }

    fn get(&self, id: &str) -> Option<Pet> {
        self.pets.get(id).map(|entry| entry.value().clone())
    }

    fn contains(&self, id: &str) -> bool {
        self.pets.contains_key(id)
    }

    fn insert(&self, pet: Pet) -> Pet {
        self.pets.insert(pet.id.clone(), pet.clone());
        pet
    }

    fn remove(&self, id: &str) -> Option<Pet> {
        self.pets.remove(id).map(|(_, pet)| pet)
    }
}

/// Build the pets resource with its full handler table.
#[must_use]
pub fn pets_resource() -> Resource<Pet> {
    let store = Arc::new(PetStore::default());

    let list_store = Arc::clone(&store);
    let get_store = Arc::clone(&store);
    let create_store = Arc::clone(&store);
    let update_store = Arc::clone(&store);
    let delete_store = store;

    Resource::new(ResourceConfig::new(ID_PARAMETER))
        .list(move |_| Ok(list_store.list()))
        .get(move |id, _| Ok(get_store.get(id)))
        .create(move |event| {
            let request: CreateUpdatePetRequest = decode_body(event)?;
            Ok(create_store.insert(Pet {
                id: uuid::Uuid::new_v4().to_string(),
                name: request.name,
                pet_type: request.pet_type,
            }))
        })
        .update(move |id, event| {
            if !update_store.contains(id) {
                return Ok(None);
            }
            let request: CreateUpdatePetRequest = decode_body(event)?;
            Ok(Some(update_store.insert(Pet {
                id: id.to_owned(),
                name: request.name,
                pet_type: request.pet_type,
            })))
        })
        .delete(move |id, _| Ok(delete_store.remove(id)))
}
