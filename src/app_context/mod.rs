use crate::cli::Args;
use crate::imagery::errors::ImageryError;
use crate::imagery::mapillary::MapillaryClient;
use crate::imagery::source::ImageSource;

#[derive(Clone)]
pub struct AppContext<IS: ImageSource> {
    pub images: IS,
}

pub fn init(args: &Args) -> Result<AppContext<MapillaryClient>, ImageryError> {
    Ok(AppContext {
        images: MapillaryClient::new(args)?,
    })
}
