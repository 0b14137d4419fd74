//! Turkish province name normalization.
//!
//! The indicator spreadsheet and the boundary file spell province names with
//! inconsistent case and diacritics ("İzmir" vs "Izmir", "Şanlıurfa" vs
//! "Sanliurfa"). Every name comparison in the workspace goes through
//! [`normalize_name`] on both sides so those drifts still join.

/// Canonicalize a province name for matching: map the Turkish letters to
/// their ASCII counterparts, then upper-case.
///
/// Total and deterministic; characters outside the replacement table pass
/// through `to_uppercase` unchanged, so an unmatched spelling simply fails to
/// join downstream (callers log those at `warn`).
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            'ı' | 'İ' => 'I',
            'ğ' | 'Ğ' => 'G',
            'ü' | 'Ü' => 'U',
            'ş' | 'Ş' => 'S',
            'ö' | 'Ö' => 'O',
            'ç' | 'Ç' => 'C',
            other => other,
        })
        .flat_map(|c| c.to_uppercase())
        .collect()
}
