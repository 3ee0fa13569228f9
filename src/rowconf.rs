//! Main module for rowconf library functionality

pub mod building;
pub mod config;
pub mod document;
pub mod env;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod resolving;
pub mod testing;
