use crate::geo::models::GeoPoint;
use crate::imagery::errors::ImageryError;
use crate::imagery::models::{BoundingBox, ImageDetails, ImageSearchHit, PointGeometry};
use crate::imagery::source::ImageSource;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory catalog that answers every bounding box with the same images.
#[derive(Clone, Default)]
pub struct FakeImageSource {
    hits: Vec<ImageSearchHit>,
    details: HashMap<String, ImageDetails>,
    without_token: bool,
    searched_boxes: Arc<Mutex<Vec<BoundingBox>>>,
}

impl FakeImageSource {
    pub fn with_panorama(mut self, id: &str, point: GeoPoint) -> Self {
        self.hits.push(ImageSearchHit {
            id: id.to_string(),
            is_pano: Some(true),
        });
        self.details.insert(
            id.to_string(),
            ImageDetails {
                id: id.to_string(),
                thumb_2048_url: Some(format!("https://images.test/{id}.jpg")),
                captured_at: Some(1_700_000_000_000),
                sequence: Some(format!("sequence-{id}")),
                geometry: Some(PointGeometry::from_point(point)),
            },
        );
        self
    }

    pub fn with_flat_image(mut self, id: &str) -> Self {
        self.hits.push(ImageSearchHit {
            id: id.to_string(),
            is_pano: Some(false),
        });
        self
    }

    pub fn without_token(mut self) -> Self {
        self.without_token = true;
        self
    }

    pub fn searched_boxes(&self) -> Vec<BoundingBox> {
        self.searched_boxes
            .lock()
            .expect("Fake image source lock was poisoned.")
            .clone()
    }
}

#[async_trait]
impl ImageSource for FakeImageSource {
    async fn search_panoramas(
        &self,
        bounding_box: &BoundingBox,
    ) -> Result<Vec<ImageSearchHit>, ImageryError> {
        if self.without_token {
            return Err(ImageryError::MissingAccessToken);
        }
        self.searched_boxes
            .lock()
            .expect("Fake image source lock was poisoned.")
            .push(*bounding_box);
        Ok(self.hits.clone())
    }

    async fn image_details(&self, image_id: &str) -> Result<ImageDetails, ImageryError> {
        self.details
            .get(image_id)
            .cloned()
            .ok_or_else(|| ImageryError::UnknownImage(image_id.to_string()))
    }

    fn is_configured(&self) -> bool {
        !self.without_token
    }
}
