use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

/// A scheduled occurrence with a venue, a time window, and a price.
///
/// `id` is assigned by the store on creation; a caller-supplied id is
/// ignored. None of the text fields are validated, and nothing enforces
/// `end_date_time >= start_date_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "local_datetime")]
    pub start_date_time: PrimitiveDateTime,
    #[serde(with = "local_datetime")]
    pub end_date_time: PrimitiveDateTime,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
}

/// Serde codec for local date-times in `2025-01-01T10:00:00` form.
///
/// Serialization always emits seconds; parsing accepts input without them.
pub mod local_datetime {
    use serde::{Deserialize, Deserializer, Serializer, de, ser};
    use time::PrimitiveDateTime;
    use time::format_description::BorrowedFormatItem;
    use time::macros::format_description;

    const FORMAT: &[BorrowedFormatItem<'_>] = format_description!(
        version = 2,
        "[year]-[month]-[day]T[hour]:[minute][optional [:[second]]]"
    );

    pub fn serialize<S: Serializer>(
        value: &PrimitiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let text = value.format(FORMAT).map_err(ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<PrimitiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        PrimitiveDateTime::parse(&text, FORMAT).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::Event;
    use time::macros::datetime;

    fn sample() -> Event {
        Event {
            id: 7,
            name: "Rustfest".to_string(),
            description: "Two days of talks".to_string(),
            start_date_time: datetime!(2025-06-01 09:30),
            end_date_time: datetime!(2025-06-02 18:00),
            venue: "Main Hall".to_string(),
            price: 49.5,
            image_url: "https://example.com/rustfest.png".to_string(),
        }
    }

    #[test]
    fn serializes_camel_case_with_local_datetimes() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["startDateTime"], "2025-06-01T09:30:00");
        assert_eq!(json["endDateTime"], "2025-06-02T18:00:00");
        assert_eq!(json["imageUrl"], "https://example.com/rustfest.png");
        assert_eq!(json["price"], 49.5);
    }

    #[test]
    fn round_trips_through_json() {
        let event = sample();
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn accepts_datetimes_without_seconds_and_missing_id() {
        let event: Event = serde_json::from_str(
            r#"{
                "name": "A",
                "description": "",
                "startDateTime": "2025-01-01T10:00",
                "endDateTime": "2025-01-01T12:00",
                "venue": "V",
                "price": 0.0,
                "imageUrl": ""
            }"#,
        )
        .unwrap();
        assert_eq!(event.id, 0);
        assert_eq!(event.start_date_time, datetime!(2025-01-01 10:00));
    }
}
