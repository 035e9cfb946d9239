use crate::imagery::models::BoundingBox;

pub const IMAGE_SEARCH_FIELDS: &str = "id,is_pano";
pub const IMAGE_DETAIL_FIELDS: &str = "id,thumb_2048_url,captured_at,sequence,geometry";
pub const IMAGE_SEARCH_LIMIT: u32 = 100;

pub static BOUNDING_BOXES: [BoundingBox; 8] = [
    BoundingBox {
        name: "Antwerp, Belgium",
        lat_min: 51.1541169,
        lat_max: 51.1546169,
        lon_min: 4.4434176,
        lon_max: 4.4439176,
    },
    BoundingBox {
        name: "New York, USA",
        lat_min: 40.7120,
        lat_max: 40.7170,
        lon_min: -74.0160,
        lon_max: -74.0100,
    },
    BoundingBox {
        name: "London, UK",
        lat_min: 51.5074,
        lat_max: 51.5174,
        lon_min: -0.1278,
        lon_max: -0.1178,
    },
    BoundingBox {
        name: "Paris, France",
        lat_min: 48.8566,
        lat_max: 48.8666,
        lon_min: 2.3522,
        lon_max: 2.3622,
    },
    BoundingBox {
        name: "Tokyo, Japan",
        lat_min: 35.6528,
        lat_max: 35.6628,
        lon_min: 139.7000,
        lon_max: 139.7100,
    },
    BoundingBox {
        name: "Sydney, Australia",
        lat_min: -33.8688,
        lat_max: -33.8588,
        lon_min: 151.2093,
        lon_max: 151.2193,
    },
    BoundingBox {
        name: "Berlin, Germany",
        lat_min: 52.5200,
        lat_max: 52.5300,
        lon_min: 13.4050,
        lon_max: 13.4150,
    },
    BoundingBox {
        name: "Cape Town, South Africa",
        lat_min: -33.9186,
        lat_max: -33.9086,
        lon_min: 18.4232,
        lon_max: 18.4332,
    },
];
