use geo_types::LineString;
use schemars::JsonSchema;
use serde::Serialize;
use tracing::warn;

/// `[lat, lon]`
pub type LatLon = [f64; 2];

pub const START_REFERENCE: LatLon = [23.0225, 72.5714];
pub const DESTINATION_REFERENCE: LatLon = [19.0760, 72.8777];

const DEFAULT_ZOOM: u8 = 10;

/// Precision of the polylines returned by the directions service.
const POLYLINE_PRECISION: u32 = 5;

/// What the browser map draws: the route geometry between the two fixed
/// reference points.
#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct MapOverlay {
    pub points: Vec<LatLon>,
    pub start_reference: LatLon,
    pub destination_reference: LatLon,
    pub center: LatLon,
    pub zoom: u8,
}

impl MapOverlay {
    pub fn new(points: Vec<LatLon>) -> Self {
        Self {
            points,
            start_reference: START_REFERENCE,
            destination_reference: DESTINATION_REFERENCE,
            center: START_REFERENCE,
            zoom: DEFAULT_ZOOM,
        }
    }

    /// An undecodable polyline gives an overlay without geometry.
    pub fn from_polyline(encoded: &str) -> Self {
        match decode_route(encoded) {
            Ok(line) => Self::new(line.coords().map(|coord| [coord.y, coord.x]).collect()),
            Err(error) => {
                warn!("Could not decode route polyline: {}", error);
                Self::new(vec![])
            }
        }
    }
}

/// Decodes an encoded polyline, x being the longitude and y the latitude.
pub fn decode_route(encoded: &str) -> Result<LineString<f64>, String> {
    polyline::decode_polyline(encoded, POLYLINE_PRECISION).map_err(|error| error.to_string())
}
