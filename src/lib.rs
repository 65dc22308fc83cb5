//! Topsis Rank - Multi-criteria decision ranking
//!
//! This crate implements TOPSIS (Technique for Order Preference by Similarity
//! to Ideal Solution): alternatives scored on several numeric criteria are
//! ranked by their relative closeness to an ideal best point and distance
//! from an ideal worst point.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
