//! Multi-modal route planner server.
//!
//! Answers: "How do I get from A to B by bus, train or metro, optionally via
//! C, and which way is fastest?" Planning runs over a static route catalog
//! loaded from CSV at startup; a small booking flow turns a chosen plan into
//! a ticket.

pub mod booking;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod planner;
pub mod sessions;
pub mod web;
