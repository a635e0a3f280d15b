pub mod inserts;
pub mod roster;
