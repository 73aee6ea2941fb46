pub mod density;
pub mod mixing;
