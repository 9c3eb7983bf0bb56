pub mod error_location;
