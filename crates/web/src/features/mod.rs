pub mod events;
pub mod fighters;
pub mod rankings;
