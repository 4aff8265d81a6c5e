pub mod client;
pub mod domain;
pub mod forms;
pub mod models;
pub mod processing;
pub mod view;
