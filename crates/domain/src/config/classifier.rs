use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// CIDR list used instead of the built-in table.
    #[serde(default)]
    pub china_ip_list: Option<PathBuf>,
}
