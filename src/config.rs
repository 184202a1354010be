use std::path::PathBuf;

pub struct Config {
    pub database_url: Option<String>,
    pub diagram_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").ok(),
            diagram_path: std::env::var("DIAGRAM_PATH")
                .unwrap_or_else(|_| "diagram.png".to_string())
                .into(),
        }
    }
}
