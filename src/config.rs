use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Process configuration, assembled from the environment once at
/// startup and passed down by reference. No global state.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file (`BLOG_DATABASE`, default `data/blog.db`)
    pub database_path: PathBuf,
    /// Listen address (`BLOG_ADDR`, default `0.0.0.0:8000`)
    pub bind_addr: SocketAddr,
    /// Signing secret (`APP_KEY`, required). Surfaced for the
    /// deployment; nothing in this service signs with it yet.
    pub secret_key: String,
    /// Tera template glob (`BLOG_TEMPLATES`, default `templates/**/*.html`)
    pub templates_glob: String,
    /// Static asset directory (`BLOG_STATIC`, default `static`)
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_path = env::var("BLOG_DATABASE")
            .unwrap_or_else(|_| "data/blog.db".to_string())
            .into();

        let bind_addr = env::var("BLOG_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse()
            .context("BLOG_ADDR is not a valid socket address")?;

        let secret_key = env::var("APP_KEY").context("APP_KEY must be set")?;

        let templates_glob =
            env::var("BLOG_TEMPLATES").unwrap_or_else(|_| "templates/**/*.html".to_string());

        let static_dir = env::var("BLOG_STATIC")
            .unwrap_or_else(|_| "static".to_string())
            .into();

        Ok(Self {
            database_path,
            bind_addr,
            secret_key,
            templates_glob,
            static_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env() {
        env::set_var("APP_KEY", "test-secret");
        env::set_var("BLOG_DATABASE", "/tmp/blog-test.db");
        env::set_var("BLOG_ADDR", "127.0.0.1:9123");

        let config = Config::from_env().unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/blog-test.db"));
        assert_eq!(config.bind_addr.port(), 9123);
        assert_eq!(config.secret_key, "test-secret");
        assert_eq!(config.templates_glob, "templates/**/*.html");
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }
}
