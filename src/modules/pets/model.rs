use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use bluebot_core::AppError;

/// A pet as posted by clients. Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pet {
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetKind {
    Cat,
    Dog,
    Hamster,
}

impl PetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetKind::Cat => "cat",
            PetKind::Dog => "dog",
            PetKind::Hamster => "hamster",
        }
    }

    pub fn created_message(&self) -> &'static str {
        match self {
            PetKind::Cat => "Created cat",
            PetKind::Dog => "Created dog",
            PetKind::Hamster => "Created hamster",
        }
    }
}

impl fmt::Display for PetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query string of `GET /cats/{format}`. Both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatSearchQuery {
    pub name: String,
    #[serde(rename = "type")]
    pub cat_type: String,
}

/// The `{format}` path segment of the cat search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFormat {
    String,
    Json,
}

pub const INVALID_FORMAT_MESSAGE: &str = "You need to insert string or json data type";

impl FromStr for SearchFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(SearchFormat::String),
            "json" => Ok(SearchFormat::Json),
            _ => Err(AppError::bad_request(INVALID_FORMAT_MESSAGE)),
        }
    }
}
