use std::env;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub dataset_size: usize,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a valid number"),
            dataset_size: env::var("DATASET_SIZE")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .expect("DATASET_SIZE must be a valid number"),
        }
    }
}
