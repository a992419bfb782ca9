// Composition root for the material tracking service.
//
// Responsibilities:
// - Read config from the environment.
// - Instantiate the in-memory store and outbox and seed the store.
// - Wire them into use case handlers and expose HTTP and GraphQL routes.

pub mod config;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;
