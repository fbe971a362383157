pub mod contrast;
pub mod generate;
