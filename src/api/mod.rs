pub mod handlers;
pub mod routes;

use serde::Serialize;

use crate::languages::LanguageInfo;

#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub voices: Vec<&'static str>,
    pub default: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageInfo>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub upstream_configured: bool,
}
