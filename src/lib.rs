pub mod cli_args;
pub mod error;
pub mod extractor;
pub mod fleet;
mod middleware;
pub mod route;
pub mod server;
pub mod state;
pub mod store;

#[cfg(test)]
mod test;
