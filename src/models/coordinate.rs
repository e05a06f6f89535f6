use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One reported GPS fix, stamped by the server when it was accepted.
///
/// Fields other than `lat`, `lon` and `time` are kept as the caller sent them
/// and serialized next to the known ones. `lat` and `lon` are normalized to
/// `f64`, so an integer or string report such as `{"lat":1,"lon":"2"}` comes
/// back as `1.0`/`2.0`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoordinateRecord {
    pub lat: f64,
    pub lon: f64,
    pub time: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CoordinateRecord {
    /// Builds a record from a reported JSON body.
    ///
    /// Returns `None` unless the body is an object whose `lat` and `lon` are
    /// numbers or strings holding a finite number. Any `time` sent by the
    /// caller is replaced by `time`.
    pub fn from_report(body: Value, time: String) -> Option<Self> {
        let Value::Object(mut fields) = body else {
            return None;
        };
        let lat = fields.get("lat").and_then(degrees)?;
        let lon = fields.get("lon").and_then(degrees)?;
        fields.remove("lat");
        fields.remove("lon");
        fields.remove("time");
        Some(Self { lat, lon, time, extra: fields })
    }
}

fn degrees(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|d| d.is_finite()),
        _ => None,
    }
}

/// Local server time in the format records are stamped with.
pub fn timestamp_now() -> String {
    chrono::Local::now().format(TIME_FORMAT).to_string()
}
