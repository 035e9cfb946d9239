use crate::cli::Args;
use crate::imagery::consts::{IMAGE_DETAIL_FIELDS, IMAGE_SEARCH_FIELDS, IMAGE_SEARCH_LIMIT};
use crate::imagery::errors::ImageryError;
use crate::imagery::models::{BoundingBox, ImageDetails, ImageSearchHit, ImageSearchResponse};
use crate::imagery::source::ImageSource;
use async_trait::async_trait;
use http::header::AUTHORIZATION;
use http::StatusCode;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Talks to the Mapillary Graph API.
#[derive(Clone, Debug)]
pub struct MapillaryClient {
    http_client: Client,
    base_url: Url,
    access_token: Option<Arc<str>>,
}

impl MapillaryClient {
    pub fn new(args: &Args) -> Result<Self, ImageryError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(args.upstream_timeout_secs))
            .build()?;
        let mut base_url = args.mapillary_url.clone();
        // Without a trailing slash `Url::join` would replace the last segment of a proxy path.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            http_client,
            base_url,
            access_token: args.mapillary_access_token.as_deref().map(Arc::from),
        })
    }

    fn authorization(&self) -> Result<String, ImageryError> {
        self.access_token
            .as_ref()
            .map(|token| format!("OAuth {token}"))
            .ok_or(ImageryError::MissingAccessToken)
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ImageryError> {
        Ok(self.base_url.join(path)?)
    }
}

#[async_trait]
impl ImageSource for MapillaryClient {
    async fn search_panoramas(
        &self,
        bounding_box: &BoundingBox,
    ) -> Result<Vec<ImageSearchHit>, ImageryError> {
        let authorization = self.authorization()?;
        let bbox = bounding_box.as_query_param();
        let limit = IMAGE_SEARCH_LIMIT.to_string();
        let response: ImageSearchResponse = self
            .http_client
            .get(self.endpoint("images")?)
            .header(AUTHORIZATION, authorization)
            .query(&[
                ("fields", IMAGE_SEARCH_FIELDS),
                ("bbox", bbox.as_str()),
                ("is_pano", "true"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.data.unwrap_or_default())
    }

    async fn image_details(&self, image_id: &str) -> Result<ImageDetails, ImageryError> {
        let authorization = self.authorization()?;
        let response = self
            .http_client
            .get(self.endpoint(image_id)?)
            .header(AUTHORIZATION, authorization)
            .query(&[("fields", IMAGE_DETAIL_FIELDS)])
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ImageryError::UnknownImage(image_id.to_string()));
        }
        let details: ImageDetails = response.error_for_status()?.json().await?;
        Ok(details)
    }

    fn is_configured(&self) -> bool {
        self.access_token.is_some()
    }
}
