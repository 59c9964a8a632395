pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;

#[cfg(test)]
mod length_test;

pub use length::{AU_M, Length, SOLAR_RADIUS_M};
pub use mass::{Mass, SOLAR_MASS_KG};
pub use temperature::Temperature;
pub use time::Time;
