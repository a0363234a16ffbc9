pub mod plates;
