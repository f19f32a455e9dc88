pub mod health;
pub mod musicner;
pub mod search;
