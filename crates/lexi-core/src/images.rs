use lexi_types::ImageResult;
use serde_json::Value;

use crate::error::TransportFailure;

const LIST_KEYS: [&str; 3] = ["photos", "images", "results"];
const THUMBNAIL_KEYS: [&str; 6] = [
    "src.landscape",
    "src.medium",
    "src.small",
    "src.tiny",
    "thumbnail",
    "thumbnailUrl",
];
const FULL_KEYS: [&str; 4] = ["src.original", "src.large", "url", "fullUrl"];

/// Extract at most `limit` image records from an image search payload.
///
/// Records missing either a thumbnail or a full-size URL are skipped.
pub fn parse_images(raw: &Value, limit: usize) -> Result<Vec<ImageResult>, TransportFailure> {
    let records = match raw {
        Value::Array(records) => records,
        Value::Object(fields) => LIST_KEYS
            .iter()
            .find_map(|key| fields.get(*key)?.as_array())
            .ok_or_else(|| TransportFailure::Malformed("no image list in response".to_string()))?,
        _ => {
            return Err(TransportFailure::Malformed(
                "image response is not an object".to_string(),
            ));
        }
    };

    Ok(records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| image(index, record))
        .take(limit)
        .collect())
}

fn image(index: usize, record: &Value) -> Option<ImageResult> {
    let thumbnail_url = first_text(record, &THUMBNAIL_KEYS)?;
    let full_url = first_text(record, &FULL_KEYS)?;

    let id = match record.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => index.to_string(),
    };

    Some(ImageResult {
        id,
        thumbnail_url,
        full_url,
        alt_text: first_text(record, &["alt", "altText"]),
    })
}

/// First non-blank string found at any of the dotted `paths`
fn first_text(record: &Value, paths: &[&str]) -> Option<String> {
    paths.iter().find_map(|path| {
        let value = path
            .split('.')
            .try_fold(record, |value, key| value.get(key))?;
        let text = value.as_str()?.trim();
        (!text.is_empty()).then(|| text.to_string())
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn photo_search_shape() {
        let raw = json!({
            "page": 1,
            "photos": [
                {
                    "id": 3573351,
                    "alt": "Sunset over the sea",
                    "src": {
                        "original": "https://images.example/3573351.jpeg",
                        "landscape": "https://images.example/3573351-landscape.jpeg"
                    }
                },
                {
                    "id": "abc",
                    "alt": "",
                    "src": { "original": "https://images.example/abc.jpeg", "tiny": "https://images.example/abc-tiny.jpeg" }
                }
            ]
        });

        let images = parse_images(&raw, 10).unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].id, "3573351");
        assert_eq!(images[0].thumbnail_url, "https://images.example/3573351-landscape.jpeg");
        assert_eq!(images[0].full_url, "https://images.example/3573351.jpeg");
        assert_eq!(images[0].alt_text.as_deref(), Some("Sunset over the sea"));
        assert_eq!(images[1].thumbnail_url, "https://images.example/abc-tiny.jpeg");
        assert_eq!(images[1].alt_text, None);
    }

    #[test]
    fn flat_records_and_limit() {
        let raw = json!([
            { "thumbnailUrl": "t0", "fullUrl": "f0" },
            { "thumbnail": "t1" },
            { "thumbnail": "t2", "url": "f2", "altText": "two" },
            { "thumbnail": "t3", "url": "f3" }
        ]);

        let images = parse_images(&raw, 2).unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].id, "0");
        assert_eq!(images[1].id, "2");
        assert_eq!(images[1].alt_text.as_deref(), Some("two"));
    }

    #[test]
    fn unrecognized_payloads_are_malformed() {
        assert!(matches!(
            parse_images(&json!({ "error": "quota" }), 5),
            Err(TransportFailure::Malformed(_))
        ));
        assert!(matches!(
            parse_images(&json!("nope"), 5),
            Err(TransportFailure::Malformed(_))
        ));
        assert!(parse_images(&json!({ "photos": [] }), 5).unwrap().is_empty());
    }
}
