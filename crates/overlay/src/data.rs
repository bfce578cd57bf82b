//! Decoded boundary dataset.

use serde::Deserialize;

use crate::category::DmCategory;
use crate::error::OverlayError;

#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: RawProperties,
    #[serde(default)]
    geometry: serde_json::Value,
}

#[derive(Debug, Default, Deserialize)]
struct RawProperties {
    #[serde(rename = "DM")]
    dm: Option<i64>,
}

/// One boundary polygon with its severity category.
///
/// Features whose `DM` code is missing or outside the known range carry
/// `None`; rendering treats them as unclassified rather than dropping them.
#[derive(Debug, Clone)]
pub struct OverlayFeature {
    pub category: Option<DmCategory>,
    pub geometry: serde_json::Value,
}

/// A decoded boundary dataset for a single release date.
#[derive(Debug, Clone)]
pub struct OverlayData {
    features: Vec<OverlayFeature>,
}

impl OverlayData {
    /// Decodes the upstream GeoJSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::Decode`] when the payload is not the expected
    /// feature collection shape.
    pub fn from_json(text: &str) -> Result<Self, OverlayError> {
        let raw: RawCollection = serde_json::from_str(text)?;
        let features = raw
            .features
            .into_iter()
            .map(|f| OverlayFeature {
                category: f.properties.dm.and_then(DmCategory::from_code),
                geometry: f.geometry,
            })
            .collect();
        Ok(Self { features })
    }

    pub fn features(&self) -> &[OverlayFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Feature counts per category, ascending severity, omitting categories
    /// with no features.
    pub fn category_counts(&self) -> Vec<(DmCategory, usize)> {
        DmCategory::ALL
            .into_iter()
            .map(|category| {
                let count = self
                    .features
                    .iter()
                    .filter(|f| f.category == Some(category))
                    .count();
                (category, count)
            })
            .filter(|&(_, count)| count > 0)
            .collect()
    }

    /// Number of features without a recognized `DM` code.
    pub fn unclassified_count(&self) -> usize {
        self.features.iter().filter(|f| f.category.is_none()).count()
    }
}
