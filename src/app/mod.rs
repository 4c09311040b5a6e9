// App layer: wires config, core and HTTP together.

pub mod bootstrap;
pub mod pages;
pub mod routes;
pub mod server;
