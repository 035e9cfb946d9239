use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("The point has no numeric latitude")]
    MissingLatitude,
    #[error("The point has no numeric longitude")]
    MissingLongitude,
    #[error("The `{field}` coordinate is not a finite number: {value}")]
    NonFiniteCoordinate { field: &'static str, value: f64 },
}
