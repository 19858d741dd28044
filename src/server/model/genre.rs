//! Genre domain models and parameters.

use crate::{
    model::genre::{CreateGenreDto, GenreDto, UpdateGenreDto},
    server::{
        model::{check_length, into_result, merged, MAX_DESCRIPTION_LENGTH},
        validation::ValidationErrors,
    },
};

pub const MIN_NAME_LENGTH: usize = 3;
pub const MAX_NAME_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl Genre {
    pub fn from_entity(entity: entity::genre::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> GenreDto {
        GenreDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGenreParam {
    pub name: String,
    pub description: Option<String>,
}

impl CreateGenreParam {
    pub fn from_dto(dto: CreateGenreDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_genre(&mut errors, &self.name, self.description.as_deref());
        into_result(errors)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateGenreParam {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl UpdateGenreParam {
    pub fn from_dto(dto: UpdateGenreDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            description: dto.description,
        }
    }

    pub fn validate(&self, existing: &Genre) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_genre(
            &mut errors,
            self.name.as_deref().unwrap_or(&existing.name),
            merged(&self.description, &existing.description).as_deref(),
        );
        into_result(errors)
    }
}

fn check_genre(errors: &mut ValidationErrors, name: &str, description: Option<&str>) {
    check_length(errors, "name", name, MIN_NAME_LENGTH, MAX_NAME_LENGTH);
    if let Some(description) = description {
        check_length(errors, "description", description, 0, MAX_DESCRIPTION_LENGTH);
    }
}
