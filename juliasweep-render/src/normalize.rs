use crate::field::Field;

/// Map a field to display intensities in `[0, 1]`.
///
/// Each count maps to `1 − count / max`, where `max` is the field's
/// largest count for this frame, so the points that escaped fastest come
/// out brightest. The mapping is exact at the ends of the range: counts
/// equal to the maximum produce exactly `0.0`, zero counts produce exactly
/// `1.0`. A degenerate all-zero field maps to all `1.0`.
pub fn normalize(field: &Field) -> Vec<f32> {
    let max = field.max_value();
    if max == 0 {
        return vec![1.0; field.data.len()];
    }
    let max = max as f32;
    field.data.iter().map(|&v| 1.0 - v as f32 / max).collect()
}

/// Quantize `[0, 1]` intensities to 8-bit grayscale samples.
pub fn to_grayscale(intensities: &[f32]) -> Vec<u8> {
    intensities
        .iter()
        .map(|&i| (i.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect()
}
