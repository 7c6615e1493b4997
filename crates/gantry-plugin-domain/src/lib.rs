//! # gantry-plugin-domain
//!
//! Domain value objects shared between the Gantry server and its plugins.
//! Every struct in this crate represents a value carried across the plugin
//! boundary. All models derive `Debug`, `Clone`, `Serialize`, and
//! `Deserialize`; none of them know about the wire protocol that carries
//! them.

pub mod analytics;
