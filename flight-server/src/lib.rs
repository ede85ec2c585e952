//! Flight search results server.
//!
//! Takes the itineraries returned by one Sky Scrapper flight search and
//! answers: "which of these match what I've selected, and in what order?"

pub mod cache;
pub mod config;
pub mod domain;
pub mod results;
pub mod skyscrapper;
pub mod web;
