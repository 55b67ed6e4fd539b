mod core;
mod routes;
mod server;
mod state;

use state::*;

pub use server::*;
