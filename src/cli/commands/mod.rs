pub mod keywords;
pub mod migrate;
