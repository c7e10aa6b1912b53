//! Sample consumers used by the integration tests.
//!
//! The pet store mirrors a real deployment: an owned, mutex-guarded map
//! behind handler closures. The engine imposes no synchronization of its
//! own, so the store brings its own.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
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
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Generated identifier.
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

/// Build the pets resource backed by a fresh store.
#[must_use]
pub fn pets_resource() -> Resource<Pet> {
    let store: Arc<Mutex<HashMap<String, Pet>>> = Arc::new(Mutex::new(HashMap::new()));

    let list_store = Arc::clone(&store);
    let get_store = Arc::clone(&store);
    let create_store = Arc::clone(&store);
    let update_store = Arc::clone(&store);
    let delete_store = store;

    Resource::new(ResourceConfig::new(ID_PARAMETER))
        .list(move |_| Ok(list_store.lock().values().cloned().collect()))
        .get(move |id, _| Ok(get_store.lock().get(id).cloned()))
        .create(move |event| {
            let request: CreateUpdatePetRequest = decode_body(event)?;
            let pet = Pet {
                id: uuid::Uuid::new_v4().to_string(),
                name: request.name,
                pet_type: request.pet_type,
            };
            create_store.lock().insert(pet.id.clone(), pet.clone());
            Ok(pet)
        })
        .update(move |id, event| {
            let mut pets = update_store.lock();
            if !pets.contains_key(id) {
                return Ok(None);
            }
            let request: CreateUpdatePetRequest = decode_body(event)?;
            let pet = Pet {
                id: id.to_owned(),
                name: request.name,
                pet_type: request.pet_type,
            };
            pets.insert(id.to_owned(), pet.clone());
            Ok(Some(pet))
        })
        .delete(move |id, _| Ok(delete_store.lock().remove(id)))
}

/// A person record for the minimal resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// The requested identifier, echoed back.
    pub id: String,
}

/// Build the minimal person resource: get-only, CORS on by default.
#[must_use]
pub fn minimal_resource() -> Resource<Person> {
    Resource::new(ResourceConfig::new("id")).get(|id, _| {
        Ok(Some(Person { id: id.to_owned() }))
    })
}
