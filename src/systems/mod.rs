pub mod audio;
pub mod collision;
pub mod food;
pub mod input;
pub mod movement;
pub mod snake;
