use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::{analyze, InvestmentMetrics};
use crate::models::Property;

/// A property alongside the metrics computed from it at report time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedProperty {
    pub property: Property,
    pub metrics: InvestmentMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub query: String,
    pub properties: Vec<AnalyzedProperty>,
}

impl AnalysisReport {
    pub fn build<'a>(query: &str, properties: impl IntoIterator<Item = &'a Property>) -> Self {
        Self {
            generated_at: Utc::now(),
            query: query.to_string(),
            properties: properties
                .into_iter()
                .map(|property| AnalyzedProperty {
                    property: property.clone(),
                    metrics: analyze(property),
                })
                .collect(),
        }
    }
}
