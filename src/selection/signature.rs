use crate::types::DimensionMap;

/// Canonical serialization of a dimension map: keys sorted
/// lexicographically by wire name, `"name=value"` pairs joined with `|`.
pub fn signature(dims: &DimensionMap) -> String {
    let mut pairs: Vec<(&'static str, &'static str)> = dims
        .iter()
        .map(|(dimension, slot)| (dimension.as_str(), slot))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let mut out = String::new();
    for (i, (name, value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push('|');
        }
        out.push_str(name);
        out.push('=');
        out.push_str(value);
    }
    out
}

/// djb2 over the signature bytes: hash = hash * 33 + c on wrapping u32
/// arithmetic, seeded with 5381. Signatures are ASCII, so bytes and
/// character codes coincide.
pub fn djb2(signature: &str) -> u32 {
    let mut hash: u32 = 5381;
    for byte in signature.bytes() {
        hash = hash.wrapping_mul(33).wrapping_add(u32::from(byte));
    }
    hash
}
