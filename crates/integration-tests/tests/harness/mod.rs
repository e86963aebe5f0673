pub mod config;
pub mod mock_astro;
pub mod server;
