pub mod analysis;
pub mod distractor;
pub mod fuzzy;
pub mod pool;
pub mod question;
pub mod settings;
