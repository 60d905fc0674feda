/// Plain cosine similarity, no clamping.
///
/// Returns `0.0` when either vector has zero norm, and for mismatched or empty
/// inputs, which load-time dimension checks already rule out.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let denom = norm_a_sq.sqrt() * norm_b_sq.sqrt();
    if denom == 0.0 { 0.0 } else { dot / denom }
}
