//! Two small in-memory services, orders and kitchen schedules, each backed by
//! a single resource actor and exposed over JSON/HTTP.

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod http;
pub mod kitchen_actor;
pub mod order_actor;
pub mod query;
pub mod store;
pub mod validation;

#[cfg(test)]
mod mock_framework;
