pub mod translate;
pub mod value;
