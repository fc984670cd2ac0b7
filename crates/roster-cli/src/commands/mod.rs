pub mod lookup;
pub mod raw;
pub mod roster;
pub mod seed;
