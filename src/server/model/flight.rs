use crate::model::flight::FlightDto;

/// A flight departing from the airport selected on the flights page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    pub id: i32,
    /// Flight number such as `PG0403`.
    pub number: String,
}

impl Flight {
    pub fn into_dto(self) -> FlightDto {
        FlightDto {
            id: self.id,
            number: self.number,
        }
    }
}
