use crate::model::airport::AirportDto;

/// An airport as listed on the airports page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    /// Three-letter airport code, unique.
    pub code: String,
    /// Display name.
    pub name: String,
}

impl Airport {
    /// Converts the domain model into the DTO handed to the template.
    pub fn into_dto(self) -> AirportDto {
        AirportDto {
            code: self.code,
            name: self.name,
        }
    }
}
