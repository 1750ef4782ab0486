//! Domain model for patch window planning.
//!
//! Everything in here is a plain value type: hourly series, patches, crew
//! rosters and network load samples. None of these types carry mutable state;
//! the algorithms take them by reference and hand back new values.

pub mod crew;
pub mod load;
pub mod macros;
pub mod patch;
pub mod series;

pub use crew::*;
pub use load::*;
pub use patch::*;
pub use series::*;
