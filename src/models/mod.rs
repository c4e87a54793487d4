pub mod user_state;
pub mod weather;

pub use user_state::{Mode, UserState};
pub use weather::{Coordinates, WeatherReport};
