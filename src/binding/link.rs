use serde::{Deserialize, Serialize};

/// Target URL of a navigation link and whether it points at the current route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkState {
    pub href: String,
    pub active: bool,
}
