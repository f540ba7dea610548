use crate::ParamsError;

/// EIPs that may be listed in [`Params::extra_eips`](crate::Params::extra_eips).
///
/// These are the interpreter patches that can be switched on individually
/// because no scheduled fork already includes them.
pub const ACTIVATABLE_EIPS: &[i64] = &[1344, 1884, 2200, 2929, 3198, 3529, 3855];

/// Checks that every id belongs to [`ACTIVATABLE_EIPS`].
///
/// Ids are validated independently, so duplicates are permitted. The first
/// unknown id is returned.
pub fn validate_eips(eips: &[i64]) -> Result<(), ParamsError> {
    for &eip in eips {
        if !ACTIVATABLE_EIPS.contains(&eip) {
            return Err(ParamsError::UnknownEip { eip })
        }
    }
    Ok(())
}
