use rand::Rng;
use serde_json::{json, Map, Value};

const AUTO_ID_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const AUTO_ID_LENGTH: usize = 20;

/// Generate a document auto-ID the way the platform SDKs do
pub fn auto_id() -> String {
    let mut rng = rand::thread_rng();
    (0..AUTO_ID_LENGTH)
        .map(|_| AUTO_ID_ALPHABET[rng.gen_range(0..AUTO_ID_ALPHABET.len())] as char)
        .collect()
}

/// Encode a plain JSON field map into the Firestore `fields` envelope
pub fn encode_fields(fields: &Map<String, Value>) -> Value {
    let encoded: Map<String, Value> = fields
        .iter()
        .map(|(key, value)| (key.clone(), encode_value(value)))
        .collect();
    Value::Object(encoded)
}

/// Encode one JSON value into a Firestore typed value
///
/// Integers must travel as strings per the API contract; non-integer
/// numbers become doubles.
pub fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                json!({ "integerValue": i.to_string() })
            } else {
                json!({ "doubleValue": n.as_f64() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(encode_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => json!({ "mapValue": { "fields": encode_fields(map) } }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_id_shape() {
        for _ in 0..32 {
            let id = auto_id();
            assert_eq!(id.len(), AUTO_ID_LENGTH);
            assert!(id.bytes().all(|b| AUTO_ID_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_scalar_encoding() {
        assert_eq!(encode_value(&json!(null)), json!({"nullValue": null}));
        assert_eq!(encode_value(&json!(true)), json!({"booleanValue": true}));
        assert_eq!(encode_value(&json!("abc")), json!({"stringValue": "abc"}));
        assert_eq!(encode_value(&json!(42)), json!({"integerValue": "42"}));
        assert_eq!(encode_value(&json!(19.99)), json!({"doubleValue": 19.99}));
    }

    #[test]
    fn test_nested_encoding() {
        let value = json!({ "tags": ["a", "b"], "dims": { "w": 2 } });
        let encoded = encode_value(&value);

        assert_eq!(
            encoded["mapValue"]["fields"]["tags"]["arrayValue"]["values"][1],
            json!({"stringValue": "b"})
        );
        assert_eq!(
            encoded["mapValue"]["fields"]["dims"]["mapValue"]["fields"]["w"],
            json!({"integerValue": "2"})
        );
    }
}
