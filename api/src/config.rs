use std::env;

#[derive(Clone)]
pub struct Config {
    /// Path to the exported regression artifact
    pub model_path: String,
    /// Port the HTTP server binds to
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "model/salary_model.json".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
        }
    }
}
