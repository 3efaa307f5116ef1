#![allow(dead_code)]

use std::rc::Rc;

use chrono::NaiveDate;
use undoable_core::{Aggregate, Entity};
use undoable_mutations::{InMemoryMutationStore, MutationStore};
use undoable_repository::InMemoryAggregateRepository;

undoable_core::entity_key! {
    /// Identifier of a [`Person`].
    pub struct PersonId;
}

/// Test aggregate. Edits go through the `with_*` builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: PersonId,
    pub name: String,
    pub description: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub year_of_entry: i32,
}

impl Person {
    pub fn create_new(name: &str) -> Self {
        Self::create_existing(PersonId::new(), name)
    }

    pub fn create_existing(id: PersonId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: None,
            date_of_birth: None,
            year_of_entry: 2000,
        }
    }

    pub fn with_name(&self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }

    pub fn with_description(&self, description: Option<&str>) -> Self {
        Self {
            description: description.map(str::to_owned),
            ..self.clone()
        }
    }

    pub fn with_date_of_birth(&self, date_of_birth: NaiveDate) -> Self {
        Self {
            date_of_birth: Some(date_of_birth),
            ..self.clone()
        }
    }

    pub fn with_year_of_entry(&self, year_of_entry: i32) -> Self {
        Self {
            year_of_entry,
            ..self.clone()
        }
    }
}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Aggregate for Person {}

/// Fresh recording store plus a repository writing into it.
pub fn tracked_repository() -> (Rc<InMemoryMutationStore>, InMemoryAggregateRepository<Person>) {
    undoable_observability::init();
    let store = Rc::new(InMemoryMutationStore::new());
    let repo = InMemoryAggregateRepository::new(store.clone() as Rc<dyn MutationStore>);
    (store, repo)
}
