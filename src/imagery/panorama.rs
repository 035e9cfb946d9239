use crate::imagery::consts::BOUNDING_BOXES;
use crate::imagery::errors::ImageryError;
use crate::imagery::models::{BoundingBox, ImageSearchHit};
use crate::imagery::responses::PanoramaResponse;
use crate::imagery::source::ImageSource;
use rand::seq::SliceRandom;

/// Picks a random region, then a random panorama inside it, and returns its details.
pub async fn random<IS: ImageSource>(source: &IS) -> Result<PanoramaResponse, ImageryError> {
    let bounding_box = random_bounding_box();
    let hits = source.search_panoramas(&bounding_box).await?;
    if hits.is_empty() {
        return Err(ImageryError::NoImagesInBoundingBox);
    }
    let image_id = random_panorama_id(&hits).ok_or(ImageryError::NoPanoramas)?;
    let details = source.image_details(&image_id).await?;

    tracing::info!(
        task = "panorama_fetch",
        region = bounding_box.name,
        candidates = hits.len() as u64,
        image_id = %details.id,
    );

    Ok(PanoramaResponse {
        id: details.id,
        image_url: details.thumb_2048_url,
        captured_at: details.captured_at,
        sequence: details.sequence,
        coordinates: details.geometry,
    })
}

fn random_bounding_box() -> BoundingBox {
    let mut rng = rand::thread_rng();
    // `BOUNDING_BOXES` is a non-empty array.
    *BOUNDING_BOXES
        .choose(&mut rng)
        .unwrap_or(&BOUNDING_BOXES[0])
}

fn random_panorama_id(hits: &[ImageSearchHit]) -> Option<String> {
    let panoramas = hits
        .iter()
        .filter(|hit| hit.is_panorama())
        .collect::<Vec<_>>();
    let mut rng = rand::thread_rng();
    panoramas.choose(&mut rng).map(|hit| hit.id.clone())
}
