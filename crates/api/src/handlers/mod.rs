pub mod location;
pub mod part;
pub mod search;
pub mod vehicle;
