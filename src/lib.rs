pub mod app;
pub mod config;
pub mod data_service;
pub mod dom;
pub mod pages;
pub mod places;
pub mod render;
pub mod seed;
pub mod state;
