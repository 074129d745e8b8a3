pub mod activity_directory;
mod seed;

pub use activity_directory::{ActivityDirectory, RosterError};
