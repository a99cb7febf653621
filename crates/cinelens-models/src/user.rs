use serde::{Deserialize, Serialize};

/// The signed-in identity on this device. Serialized with the legacy field
/// names so profiles written by earlier versions keep loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none", default)]
    pub photo_url: Option<String>,
}
