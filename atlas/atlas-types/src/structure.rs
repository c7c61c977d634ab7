//! Flattened region ontology records.

use serde::{Deserialize, Serialize};

use crate::error::{AtlasDataError, AtlasDataResult};

/// One flattened entry of a hierarchical region ontology.
///
/// Upstream tooling flattens the ontology tree into an ordered list of these
/// records; the hierarchy is recoverable from `structure_id_path`, which
/// lists every ancestor id from the root down to (and including) the record's
/// own id.
///
/// # Example
///
/// ```
/// use atlas_types::StructureRecord;
///
/// let root = StructureRecord {
///     id: 997,
///     name: "root".to_string(),
///     acronym: "root".to_string(),
///     structure_id_path: vec![997],
///     rgb_triplet: [255, 255, 255],
/// };
/// assert_eq!(root.parent_id(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureRecord {
    /// Integer label id, unique across the ontology.
    pub id: u32,

    /// Full anatomical name.
    pub name: String,

    /// Short identifier.
    pub acronym: String,

    /// Ordered ancestor ids from the root down to `id` (inclusive).
    pub structure_id_path: Vec<u32>,

    /// Display color as 8-bit RGB.
    pub rgb_triplet: [u8; 3],
}

impl StructureRecord {
    /// The id of this record's parent, or `None` for the root.
    ///
    /// Derived from `structure_id_path`: the parent is the second-to-last
    /// path entry.
    #[must_use]
    pub fn parent_id(&self) -> Option<u32> {
        let n = self.structure_id_path.len();
        if n >= 2 {
            Some(self.structure_id_path[n - 2])
        } else {
            None
        }
    }

    /// Whether the path is internally consistent (non-empty, ends in `id`).
    #[must_use]
    pub fn has_consistent_path(&self) -> bool {
        self.structure_id_path.last() == Some(&self.id)
    }
}

/// Parse a hex color string (`"FF0000"` or `"#FF0000"`) into an RGB triplet.
///
/// Ontology files commonly carry colors as hex strings; volumes and records
/// carry them as byte triplets.
///
/// # Errors
///
/// Returns [`AtlasDataError::InvalidHexColor`] if the string is not six hex
/// digits (after an optional leading `#`).
///
/// # Example
///
/// ```
/// use atlas_types::rgb_from_hex;
///
/// assert_eq!(rgb_from_hex("#1F77B4").unwrap(), [0x1F, 0x77, 0xB4]);
/// ```
pub fn rgb_from_hex(hex: &str) -> AtlasDataResult<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(AtlasDataError::InvalidHexColor(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| AtlasDataError::InvalidHexColor(hex.to_string()))
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, path: &[u32]) -> StructureRecord {
        StructureRecord {
            id,
            name: format!("region {id}"),
            acronym: format!("r{id}"),
            structure_id_path: path.to_vec(),
            rgb_triplet: [0, 0, 0],
        }
    }

    #[test]
    fn parent_of_root_is_none() {
        assert_eq!(record(1, &[1]).parent_id(), None);
    }

    #[test]
    fn parent_from_path() {
        assert_eq!(record(3, &[1, 2, 3]).parent_id(), Some(2));
    }

    #[test]
    fn path_consistency() {
        assert!(record(3, &[1, 3]).has_consistent_path());
        assert!(!record(3, &[1, 2]).has_consistent_path());
        assert!(!record(3, &[]).has_consistent_path());
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(rgb_from_hex("FF0000").unwrap(), [255, 0, 0]);
        assert_eq!(rgb_from_hex("#00ff00").unwrap(), [0, 255, 0]);
        assert!(rgb_from_hex("nothex").is_err());
        assert!(rgb_from_hex("#12345").is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let rec = record(42, &[1, 42]);
        let json = serde_json::to_string(&rec).unwrap();
        let back: StructureRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, back);
    }

    #[test]
    fn deserializes_upstream_shape() {
        // The field names match the flattened ontology JSON produced upstream.
        let json = r#"{
            "id": 997,
            "name": "root",
            "acronym": "root",
            "structure_id_path": [997],
            "rgb_triplet": [255, 255, 255]
        }"#;
        let rec: StructureRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.id, 997);
        assert_eq!(rec.rgb_triplet, [255, 255, 255]);
    }
}
