pub use super::aircraft::Entity as Aircraft;
pub use super::airport::Entity as Airport;
pub use super::flight::Entity as Flight;
pub use super::seat::Entity as Seat;
