use eyre::Result;
use std::env;

/// Client configuration structure
///
/// This structure contains the configuration parameters for a Conflux client.
/// It handles loading values from environment variables with appropriate defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Conflux RPC endpoint URL for communicating with the node
    pub rpc_url: String,

    /// Network id the endpoint serves (default: 1029, mainnet)
    pub network_id: u32,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This method reads configuration from environment variables,
    /// using default values when variables are not defined.
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - Configuration structure or error
    ///
    /// # Environment Variables
    ///
    /// * `CONFLUX_RPC_URL` - Conflux RPC URL (default: "http://localhost:12537")
    /// * `CONFLUX_NETWORK_ID` - Network id (default: 1029)
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (useful for development)
        let _ = dotenv::dotenv();

        // Create configuration with values from environment or defaults
        Ok(Config {
            rpc_url: env::var("CONFLUX_RPC_URL")
                .unwrap_or_else(|_| "http://localhost:12537".to_string()),
            network_id: env::var("CONFLUX_NETWORK_ID")
                .unwrap_or_else(|_| "1029".to_string())
                .parse::<u32>()?,
        })
    }
}
