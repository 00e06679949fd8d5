/**
 * Server Configuration
 *
 * Everything is read from environment variables (a `.env` file is loaded by
 * the binary before this runs).
 *
 * | Variable | Default |
 * |---|---|
 * | `PORT` | `5001` |
 * | `ATLAS_URI` | unset, in-memory store |
 * | `MONGO_DATABASE` | database named in the URI, else `devhub` |
 * | `CLOUD_NAME`, `CLOUDINARY_KEY`, `CLOUDINARY_SECRET` | unset, uploads disabled |
 * | `CLOUDINARY_API_BASE` | `https://api.cloudinary.com` |
 * | `CLOUDINARY_FOLDER` | `CloudinaryDemo` |
 * | `GEMINI_API_KEY` | unset, generation disabled |
 * | `GEMINI_API_BASE` | `https://generativelanguage.googleapis.com` |
 * | `GEMINI_MODEL` | `gemini-2.0-flash` |
 *
 * # Error Handling
 *
 * Missing optional services are not errors: the server starts without them
 * and the affected routes answer 503. Only malformed values (an unparsable
 * port, half of the image host credentials) fail startup.
 */

use thiserror::Error;

use crate::backend::generation::{gemini, GeminiConfig};
use crate::backend::uploads::{cloudinary, CloudinaryConfig};

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 5001;

const CLOUDINARY_VARS: [&str; 3] = ["CLOUD_NAME", "CLOUDINARY_KEY", "CLOUDINARY_SECRET"];

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {message}")]
    Invalid { var: &'static str, message: String },

    #[error("incomplete image host credentials, missing {missing}")]
    IncompleteCloudinary { missing: String },
}

/// Database selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: Option<String>,
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub cloudinary: Option<CloudinaryConfig>,
    pub gemini: Option<GeminiConfig>,
}

impl ServerConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let port = match get("PORT") {
            Some(port) => port.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                message: format!("'{port}' is not a port number"),
            })?,
            None => DEFAULT_PORT,
        };

        let database = get("ATLAS_URI").map(|uri| DatabaseConfig {
            uri,
            name: get("MONGO_DATABASE"),
        });

        let credentials: Vec<Option<String>> = CLOUDINARY_VARS.iter().map(|var| get(*var)).collect();
        let cloudinary = match credentials.as_slice() {
            [Some(cloud_name), Some(api_key), Some(api_secret)] => Some(CloudinaryConfig {
                cloud_name: cloud_name.clone(),
                api_key: api_key.clone(),
                api_secret: api_secret.clone(),
                api_base: get("CLOUDINARY_API_BASE")
                    .unwrap_or_else(|| cloudinary::DEFAULT_API_BASE.to_string()),
                folder: get("CLOUDINARY_FOLDER")
                    .unwrap_or_else(|| cloudinary::DEFAULT_FOLDER.to_string()),
            }),
            [None, None, None] => None,
            _ => {
                let missing = CLOUDINARY_VARS
                    .iter()
                    .zip(&credentials)
                    .filter(|(_, value)| value.is_none())
                    .map(|(var, _)| *var)
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(ConfigError::IncompleteCloudinary { missing });
            }
        };

        let gemini = get("GEMINI_API_KEY").map(|api_key| GeminiConfig {
            api_key,
            api_base: get("GEMINI_API_BASE").unwrap_or_else(|| gemini::DEFAULT_API_BASE.to_string()),
            model: get("GEMINI_MODEL").unwrap_or_else(|| gemini::DEFAULT_MODEL.to_string()),
        });

        Ok(Self {
            port,
            database,
            cloudinary,
            gemini,
        })
    }
}
