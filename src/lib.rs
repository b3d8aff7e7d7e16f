pub mod manifest;
pub mod pairing;
pub mod quiz;
pub mod tasks;
