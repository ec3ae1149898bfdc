pub mod asides;
pub mod feed;
