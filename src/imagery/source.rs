use crate::imagery::errors::ImageryError;
use crate::imagery::models::{BoundingBox, ImageDetails, ImageSearchHit};
use async_trait::async_trait;

/// Catalog of street-level imagery the gateway picks panoramas from.
#[async_trait]
pub trait ImageSource: Clone + Send + Sync + 'static {
    /// Images inside `bounding_box`. Entries are not guaranteed to be panoramas.
    async fn search_panoramas(
        &self,
        bounding_box: &BoundingBox,
    ) -> Result<Vec<ImageSearchHit>, ImageryError>;

    async fn image_details(&self, image_id: &str) -> Result<ImageDetails, ImageryError>;

    /// Whether the source has what it needs to answer requests at all.
    fn is_configured(&self) -> bool {
        true
    }
}
