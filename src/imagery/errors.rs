use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageryError {
    #[error("No pano images found in the selected bounding box.")]
    NoImagesInBoundingBox,
    #[error("No pano images available.")]
    NoPanoramas,
    #[error("No image with id `{0}` exists")]
    UnknownImage(String),
    #[error("No Mapillary access token is configured")]
    MissingAccessToken,
    #[error("Expected a `[lng, lat]` pair but the geometry has {0} coordinates")]
    MalformedGeometry(usize),
    #[error("Failed to build the Mapillary request URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Mapillary request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ImageryError {
    /// Whether the error means "nothing to show" rather than "something broke".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoImagesInBoundingBox | Self::NoPanoramas)
    }
}
