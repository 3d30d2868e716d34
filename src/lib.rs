pub mod common;
pub mod config;
pub mod data;
pub mod models;
pub mod services;
pub mod web;
