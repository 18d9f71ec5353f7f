//! The `config.jsonld` document describing a Semantic Flow site.

use serde::{Deserialize, Serialize};

use super::error::AppError;
use super::folder_plan::FolderPlan;
use super::identity::SiteIdentity;

pub const SFLO_NAMESPACE: &str = "http://semantic-flow.github.io/ontology/";
pub const DC_NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";
pub const SITE_TYPE: &str = "sflo:SemanticFlowSite";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigContext {
    #[serde(rename = "@base")]
    pub base: String,
    pub sflo: String,
    pub dc: String,
}

/// JSON-LD site configuration. Field order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(rename = "@context")]
    pub context: ConfigContext,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "sflo:siteDescription")]
    pub site_description: String,
    #[serde(rename = "dc:creator")]
    pub creator: String,
    #[serde(rename = "sflo:hasSourceFolder")]
    pub source_folder: String,
    #[serde(rename = "sflo:hasOutputFolder")]
    pub output_folder: String,
}

impl ConfigDocument {
    pub fn build(identity: &SiteIdentity, plan: &FolderPlan, description: &str) -> Self {
        Self {
            context: ConfigContext {
                base: identity.site_root.clone(),
                sflo: SFLO_NAMESPACE.to_string(),
                dc: DC_NAMESPACE.to_string(),
            },
            id: String::new(),
            kind: SITE_TYPE.to_string(),
            site_description: description.to_string(),
            creator: identity.creator.clone(),
            source_folder: plan.src_dir_name.clone(),
            output_folder: plan.output_dir_name.clone(),
        }
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_pretty_json(&self) -> Result<String, AppError> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }
}

/// Folder names recorded by an earlier run.
///
/// Parsed leniently so a hand-edited document still yields its layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecordedLayout {
    #[serde(rename = "sflo:hasOutputFolder")]
    pub output_folder: Option<String>,
    #[serde(rename = "sflo:hasSourceFolder")]
    pub source_folder: Option<String>,
}

impl RecordedLayout {
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
