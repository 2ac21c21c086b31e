//! HTTP client for the flower identification API
//!
//! Response shapes are the superset of what the two observed server
//! versions return: fields that are sometimes absent deserialize as
//! `None`/empty instead of failing. The client converts wire types into
//! the display types petal-ui renders.

use petal_ui::display_types::{
    AlternativeMatch, CatalogueEntry, FilterChoice, IdentifiedFlower, SpeciesProfile,
    SpeciesSummary,
};
use petal_ui::stores::FilterOptionsState;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::catalogue_query::{CatalogueQuery, SortBy};
use crate::config::ApiConfig;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response format")]
    Parse,
}

// -- Wire types (Deserialize only, superset schema) --

#[derive(Debug, Deserialize)]
struct IdentificationResult {
    id: Option<String>,
    scientific_name: String,
    #[serde(default)]
    common_names: Vec<String>,
    confidence: f64,
    primary_image_url: Option<String>,
    #[serde(default)]
    alternatives: Vec<AlternativeResult>,
}

#[derive(Debug, Deserialize)]
struct AlternativeResult {
    scientific_name: String,
    #[serde(default)]
    common_names: Vec<String>,
    confidence: f64,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    id: String,
    scientific_name: String,
    #[serde(default)]
    common_names: Vec<String>,
    primary_image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SpeciesDetail {
    scientific_name: String,
    #[serde(default)]
    common_names: Vec<String>,
    description: Option<String>,
    care_tips: Option<String>,
    #[serde(default)]
    bloom_season: Vec<String>,
    primary_image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FilterOption {
    value: String,
    label: String,
    count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct CatalogueFilters {
    #[serde(default)]
    colors: Vec<FilterOption>,
    #[serde(default)]
    countries: Vec<FilterOption>,
}

#[derive(Debug, Deserialize)]
struct CatalogueItem {
    id: String,
    scientific_name: String,
    #[serde(default)]
    common_names: Vec<String>,
    primary_image_url: Option<String>,
    #[serde(default)]
    colors: Vec<String>,
    search_count: Option<u64>,
    #[serde(default)]
    countries: Vec<FilterOption>,
}

#[derive(Debug, Deserialize)]
struct CatalogueResponse {
    #[serde(default)]
    items: Vec<CatalogueItem>,
    total: u64,
    page: u32,
    total_pages: u32,
}

// -- Conversions into display types --

impl From<FilterOption> for FilterChoice {
    fn from(option: FilterOption) -> Self {
        FilterChoice {
            value: option.value,
            label: option.label,
            count: option.count,
        }
    }
}

impl From<SearchResult> for SpeciesSummary {
    fn from(result: SearchResult) -> Self {
        SpeciesSummary {
            id: result.id,
            scientific_name: result.scientific_name,
            common_names: result.common_names,
            image_url: result.primary_image_url,
        }
    }
}

impl From<CatalogueItem> for CatalogueEntry {
    fn from(item: CatalogueItem) -> Self {
        CatalogueEntry {
            species: SpeciesSummary {
                id: item.id,
                scientific_name: item.scientific_name,
                common_names: item.common_names,
                image_url: item.primary_image_url,
            },
            colors: item.colors,
            countries: item.countries.into_iter().map(|c| c.label).collect(),
            search_count: item.search_count,
        }
    }
}

/// One page of catalogue results
#[derive(Debug, Clone, PartialEq)]
pub struct CataloguePage {
    pub entries: Vec<CatalogueEntry>,
    pub total: u64,
    pub page: u32,
    pub total_pages: u32,
}

/// Client for the identification API. Cheap to clone; the underlying
/// `reqwest::Client` is an `Arc` internally.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        let http = build_http(&config);
        Self { config, http }
    }

    /// Build a full URL with percent-encoded query parameters.
    fn url(&self, path: &str, params: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.config.base_url, path);
        for (i, (key, value)) in params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// GET `url` and decode a JSON body, mapping non-success statuses to
    /// `ApiError::Status` with the server's message text.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let resp = self.http.get(url).send().await?;
        decode_response(resp).await
    }

    /// Fetch one catalogue page for the given filter state.
    pub async fn catalogue(
        &self,
        query: &CatalogueQuery,
        limit: Option<u32>,
    ) -> Result<CataloguePage, ApiError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if !query.name.is_empty() {
            params.push(("name", query.name.clone()));
        }
        if !query.colors.is_empty() {
            params.push(("color", query.colors.join(",")));
        }
        if !query.country.is_empty() {
            params.push(("country", query.country.clone()));
        }
        if query.sort_by != SortBy::Name {
            params.push(("sort_by", query.sort_by.as_str().to_string()));
        }
        if query.page > 1 {
            params.push(("page", query.page.to_string()));
        }
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }

        let url = self.url("/api/v1/catalogue", &params);
        let response: CatalogueResponse = self.get_json(&url).await?;
        Ok(CataloguePage {
            entries: response.items.into_iter().map(Into::into).collect(),
            total: response.total,
            page: response.page,
            total_pages: response.total_pages,
        })
    }

    /// Fetch the available filter values for the catalogue sidebar.
    pub async fn catalogue_filters(&self) -> Result<FilterOptionsState, ApiError> {
        let url = self.url("/api/v1/catalogue/filters", &[]);
        let filters: CatalogueFilters = self.get_json(&url).await?;
        Ok(FilterOptionsState {
            colors: filters.colors.into_iter().map(Into::into).collect(),
            countries: filters.countries.into_iter().map(Into::into).collect(),
        })
    }

    /// Search species by common or scientific name.
    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<SpeciesSummary>, ApiError> {
        let params = [("q", query.to_string()), ("limit", limit.to_string())];
        let url = self.url("/api/v1/search", &params);
        let results: Vec<SearchResult> = self.get_json(&url).await?;
        Ok(results.into_iter().map(Into::into).collect())
    }

    /// Fetch the full profile of one species. A 404 surfaces as
    /// `ApiError::Status` like any other failure.
    pub async fn species_detail(&self, id: &str) -> Result<SpeciesProfile, ApiError> {
        let url = format!(
            "{}/api/v1/species/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let detail: SpeciesDetail = self.get_json(&url).await?;
        Ok(SpeciesProfile {
            scientific_name: detail.scientific_name,
            common_names: detail.common_names,
            description: detail.description,
            care_tips: detail.care_tips,
            bloom_season: detail.bloom_season,
            image_url: detail.primary_image_url,
        })
    }

    /// Upload an image for identification (multipart field `image`).
    pub async fn identify(
        &self,
        image: Vec<u8>,
        filename: &str,
    ) -> Result<IdentifiedFlower, ApiError> {
        let part = reqwest::multipart::Part::bytes(image)
            .file_name(filename.to_string())
            .mime_str(mime_for_filename(filename))?;
        let form = reqwest::multipart::Form::new().part("image", part);

        let url = self.url("/api/v1/identify", &[]);
        let resp = self.http.post(&url).multipart(form).send().await?;
        let result: IdentificationResult = decode_response(resp).await?;
        Ok(IdentifiedFlower {
            species_id: result.id,
            scientific_name: result.scientific_name,
            common_names: result.common_names,
            confidence: result.confidence,
            image_url: result.primary_image_url,
            alternatives: result
                .alternatives
                .into_iter()
                .map(|alt| AlternativeMatch {
                    scientific_name: alt.scientific_name,
                    common_names: alt.common_names,
                    confidence: alt.confidence,
                })
                .collect(),
        })
    }

    /// Liveness check. Never errors; an unreachable server reads as down.
    pub async fn health(&self) -> bool {
        let url = format!("{}/health", self.config.base_url);
        match self.http.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }
}

async fn decode_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        let message = if message.is_empty() {
            "Request failed".to_string()
        } else {
            message
        };
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|_| ApiError::Parse)
}

fn build_http(config: &ApiConfig) -> reqwest::Client {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new())
    }
    #[cfg(target_arch = "wasm32")]
    {
        // fetch has no request timeout; the config value is ignored here
        let _ = config;
        reqwest::Client::new()
    }
}

/// Content type from the uploaded file's extension.
pub(crate) fn mime_for_filename(filename: &str) -> &'static str {
    let ext = filename.rsplit('.').next().unwrap_or_default();
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(ApiConfig::new(base_url, Duration::from_secs(5)))
    }

    #[test]
    fn catalogue_url_omits_default_params() {
        let api = client("http://localhost:8000");
        let query = CatalogueQuery::default();
        assert_eq!(
            api.url("/api/v1/catalogue", &[]),
            "http://localhost:8000/api/v1/catalogue"
        );
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn url_encodes_parameter_values() {
        let api = client("http://localhost:8000");
        let url = api.url("/api/v1/search", &[("q", "wild rose".to_string())]);
        assert_eq!(url, "http://localhost:8000/api/v1/search?q=wild%20rose");
    }

    #[test]
    fn mime_lookup_by_extension() {
        assert_eq!(mime_for_filename("rose.JPG"), "image/jpeg");
        assert_eq!(mime_for_filename("rose.png"), "image/png");
        assert_eq!(mime_for_filename("rose"), "application/octet-stream");
    }

    #[test]
    fn catalogue_response_tolerates_absent_optional_fields() {
        let body = r#"{
            "items": [
                {"id": "rosa-1", "scientific_name": "Rosa rubiginosa"}
            ],
            "total": 1,
            "page": 1,
            "total_pages": 1
        }"#;
        let response: CatalogueResponse = serde_json::from_str(body).unwrap();
        let entry: CatalogueEntry = response.items.into_iter().next().unwrap().into();
        assert_eq!(entry.species.id, "rosa-1");
        assert!(entry.species.image_url.is_none());
        assert!(entry.colors.is_empty());
        assert!(entry.countries.is_empty());
        assert_eq!(entry.search_count, None);
    }

    #[test]
    fn species_detail_superset_schema() {
        let body = r#"{
            "scientific_name": "Tulipa gesneriana",
            "common_names": ["Tulip"],
            "primary_image_url": null
        }"#;
        let detail: SpeciesDetail = serde_json::from_str(body).unwrap();
        assert_eq!(detail.common_names, vec!["Tulip".to_string()]);
        assert!(detail.description.is_none());
        assert!(detail.bloom_season.is_empty());
    }

    #[test]
    fn identification_result_with_alternatives() {
        let body = r#"{
            "scientific_name": "Rosa rubiginosa",
            "common_names": ["Sweet briar"],
            "confidence": 0.92,
            "primary_image_url": "https://img.example/rosa.jpg",
            "alternatives": [
                {"scientific_name": "Rosa canina", "common_names": [], "confidence": 0.05}
            ]
        }"#;
        let result: IdentificationResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.alternatives.len(), 1);
        assert!(result.id.is_none());
    }
}
