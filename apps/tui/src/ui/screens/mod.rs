pub mod help;
pub mod landing;
pub mod maps;
