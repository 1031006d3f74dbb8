pub mod overview;
pub mod streaks;
