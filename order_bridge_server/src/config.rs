use std::env;

use airtable_tools::AirtableConfig;
use log::*;
use order_bridge_engine::TableConfig;

const DEFAULT_OB_HOST: &str = "127.0.0.1";
const DEFAULT_OB_PORT: u16 = 3000;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Credentials and base location for the Airtable backend.
    pub airtable: AirtableConfig,
    /// The two tables the bridge writes into.
    pub tables: TableConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_OB_HOST.to_string(),
            port: DEFAULT_OB_PORT,
            airtable: AirtableConfig::default(),
            tables: TableConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("OB_HOST").ok().unwrap_or_else(|| DEFAULT_OB_HOST.into());
        let port = env::var("OB_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!("🪛️ {s} is not a valid port for OB_PORT. {e} Using the default, {DEFAULT_OB_PORT}, instead.");
                    DEFAULT_OB_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_OB_PORT);
        let airtable = AirtableConfig::new_from_env_or_default();
        let tables = configure_tables();
        Self { host, port, airtable, tables }
    }
}

fn configure_tables() -> TableConfig {
    let defaults = TableConfig::default();
    let orders = env::var("OB_ORDERS_TABLE").unwrap_or_else(|_| {
        warn!("🪛️ OB_ORDERS_TABLE not set, using '{}' as default", defaults.orders);
        defaults.orders.clone()
    });
    let line_items = env::var("OB_LINE_ITEMS_TABLE").unwrap_or_else(|_| {
        warn!("🪛️ OB_LINE_ITEMS_TABLE not set, using '{}' as default", defaults.line_items);
        defaults.line_items.clone()
    });
    TableConfig { orders, line_items }
}
