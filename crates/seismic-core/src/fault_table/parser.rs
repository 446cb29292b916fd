use super::FaultTableError;
use crate::domain::SpectralValues;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt::Formatter;
use std::marker::PhantomData;

/// JSON object read as an ordered list of entries so duplicate keys survive
/// deserialisation and can be rejected explicitly.
#[derive(Debug)]
pub(super) struct OrderedEntries<V>(pub(super) Vec<(String, V)>);

impl<'de, V> Deserialize<'de> for OrderedEntries<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V> Visitor<'de> for EntriesVisitor<V>
        where
            V: Deserialize<'de>,
        {
            type Value = OrderedEntries<V>;

            fn expecting(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

pub(super) type RawFaultTable = OrderedEntries<OrderedEntries<SpectralValues>>;

#[derive(Debug)]
pub(super) struct ParsedFault {
    pub(super) name: String,
    pub(super) samples: Vec<(f64, SpectralValues)>,
}

pub(super) fn parse_fault_source(source: &str) -> Result<Vec<ParsedFault>, FaultTableError> {
    let raw: RawFaultTable =
        serde_json::from_str(source).map_err(|source| FaultTableError::Parse { source })?;

    raw.0
        .into_iter()
        .map(|(name, samples)| {
            let samples = samples
                .0
                .into_iter()
                .map(|(key, values)| {
                    parse_distance_key(&name, &key).map(|distance_km| (distance_km, values))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ParsedFault { name, samples })
        })
        .collect()
}

fn parse_distance_key(fault: &str, key: &str) -> Result<f64, FaultTableError> {
    key.trim()
        .parse::<f64>()
        .ok()
        .filter(|distance| distance.is_finite())
        .ok_or_else(|| FaultTableError::InvalidDistanceKey {
            fault: fault.to_string(),
            key: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::{OrderedEntries, parse_fault_source};
    use crate::fault_table::FaultTableError;

    #[test]
    fn ordered_entries_keep_duplicate_keys() {
        let entries: OrderedEntries<u32> =
            serde_json::from_str(r#"{"a": 1, "b": 2, "a": 3}"#).expect("object should parse");
        let keys = entries.0.iter().map(|(key, _)| key.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, ["a", "b", "a"]);
    }

    #[test]
    fn distance_keys_are_parsed_as_kilometres() {
        let parsed = parse_fault_source(
            r#"{
              "A": {
                "10": {"SDS": 1.0, "SD1": 0.5, "SMS": 1.2, "SM1": 0.6},
                "12.5": {"SDS": 0.95, "SD1": 0.475, "SMS": 1.15, "SM1": 0.575}
              }
            }"#,
        )
        .expect("source should parse");

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "A");
        let distances = parsed[0]
            .samples
            .iter()
            .map(|(distance, _)| *distance)
            .collect::<Vec<_>>();
        assert_eq!(distances, [10.0, 12.5]);
    }

    #[test]
    fn non_numeric_distance_key_is_rejected() {
        let error = parse_fault_source(
            r#"{"A": {"near": {"SDS": 1.0, "SD1": 0.5, "SMS": 1.2, "SM1": 0.6}}}"#,
        )
        .expect_err("non-numeric key should fail");
        assert!(matches!(
            error,
            FaultTableError::InvalidDistanceKey { ref fault, ref key } if fault == "A" && key == "near"
        ));
    }

    #[test]
    fn missing_spectral_field_is_a_parse_error() {
        let error = parse_fault_source(r#"{"A": {"10": {"SDS": 1.0, "SD1": 0.5}}}"#)
            .expect_err("incomplete bundle should fail");
        assert!(matches!(error, FaultTableError::Parse { .. }));
    }
}
