use crate::ParamsError;
use alloy_primitives::Address;
use std::{collections::HashSet, str::FromStr};

/// Parses an enabled-precompile entry into an [`Address`].
///
/// An entry must be a `0x` prefixed, case-insensitive hex string decoding to
/// exactly 20 bytes. The empty string is malformed.
pub fn parse_precompile_address(address: &str) -> Result<Address, ParamsError> {
    if !address.starts_with("0x") {
        return Err(ParamsError::InvalidAddress { address: address.to_string() })
    }
    Address::from_str(address)
        .map_err(|_| ParamsError::InvalidAddress { address: address.to_string() })
}

/// Checks that the enabled precompiles are well formed, sorted, and unique.
///
/// All entries are decoded first, then consecutive pairs are checked for
/// ascending order, then the decoded values for duplicates. The fixed check
/// order keeps failure messages reproducible across nodes: a malformed entry
/// always wins over an ordering violation.
///
/// Ordering and uniqueness are defined on the raw bytes of the decoded
/// addresses, not on the input strings, so mixed hex case can neither reorder
/// entries nor make two spellings of one address distinct.
pub fn validate_enabled_precompiles(addresses: &[String]) -> Result<(), ParamsError> {
    let decoded = addresses
        .iter()
        .map(|address| parse_precompile_address(address))
        .collect::<Result<Vec<_>, _>>()?;

    for pair in decoded.windows(2) {
        if pair[0] > pair[1] {
            return Err(ParamsError::PrecompilesNotSorted { prev: pair[0], next: pair[1] })
        }
    }

    let mut seen = HashSet::with_capacity(decoded.len());
    for address in decoded {
        if !seen.insert(address) {
            return Err(ParamsError::PrecompilesNotUnique { address })
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    const VALID: &str = "0xc0ffee254729296a45a3885639AC7E10F9d54979";
    const TRUNCATED: &str = "0xc0ffee254729296a45a3885639AC7E10F9d5497";

    #[test]
    fn parses_mixed_case_address() {
        let parsed = parse_precompile_address(VALID).unwrap();
        assert_eq!(parsed, address!("c0ffee254729296a45a3885639AC7E10F9d54979"));
    }

    #[test]
    fn rejects_malformed_entries() {
        assert_matches!(parse_precompile_address(""), Err(ParamsError::InvalidAddress { .. }));
        assert_matches!(
            parse_precompile_address(TRUNCATED),
            Err(ParamsError::InvalidAddress { .. })
        );
        assert_matches!(
            parse_precompile_address("0x1000000000000000000000000000000000000zzz"),
            Err(ParamsError::InvalidAddress { .. })
        );
        // 40 hex digits without the 0x prefix are still malformed.
        assert_matches!(
            parse_precompile_address("c0ffee254729296a45a3885639AC7E10F9d54979"),
            Err(ParamsError::InvalidAddress { .. })
        );
    }

    #[test]
    fn error_names_the_offending_entry() {
        let err = parse_precompile_address(TRUNCATED).unwrap_err();
        assert!(err.to_string().contains("invalid hex address"));
        assert!(err.to_string().contains(TRUNCATED));
    }

    #[test]
    fn accepts_empty_list() {
        assert_matches!(validate_enabled_precompiles(&[]), Ok(()));
    }

    #[test]
    fn accepts_sorted_unique_addresses() {
        let addresses = [
            "0x1000000000000000000000000000000000000000".to_string(),
            "0x2000000000000000000000000000000000000000".to_string(),
        ];
        assert_matches!(validate_enabled_precompiles(&addresses), Ok(()));
    }

    #[test]
    fn sorts_by_raw_bytes_not_by_string() {
        // 0xaa < 0xab as bytes even though "0xaA" > "0xAB" as strings.
        let addresses = [
            "0xaA00000000000000000000000000000000000000".to_string(),
            "0xAB00000000000000000000000000000000000000".to_string(),
        ];
        assert_matches!(validate_enabled_precompiles(&addresses), Ok(()));
    }

    #[test]
    fn rejects_descending_order() {
        let addresses = [
            "0x2000000000000000000000000000000000000000".to_string(),
            "0x1000000000000000000000000000000000000000".to_string(),
        ];
        let err = validate_enabled_precompiles(&addresses).unwrap_err();
        assert_eq!(
            err,
            ParamsError::PrecompilesNotSorted {
                prev: address!("2000000000000000000000000000000000000000"),
                next: address!("1000000000000000000000000000000000000000"),
            }
        );
        assert!(err.to_string().contains("enabled precompiles are not sorted"));
    }

    #[test]
    fn rejects_duplicates() {
        let addresses = [
            "0x1000000000000000000000000000000000000000".to_string(),
            "0x1000000000000000000000000000000000000000".to_string(),
        ];
        let err = validate_enabled_precompiles(&addresses).unwrap_err();
        assert_eq!(
            err,
            ParamsError::PrecompilesNotUnique {
                address: address!("1000000000000000000000000000000000000000")
            }
        );
        assert!(err.to_string().contains("enabled precompiles are not unique"));
    }

    #[test]
    fn uniqueness_ignores_hex_case() {
        let addresses = [
            "0xab00000000000000000000000000000000000000".to_string(),
            "0xAb00000000000000000000000000000000000000".to_string(),
        ];
        assert_matches!(
            validate_enabled_precompiles(&addresses),
            Err(ParamsError::PrecompilesNotUnique { .. })
        );
    }

    #[test]
    fn malformed_entry_wins_over_ordering() {
        let addresses =
            ["0x2000000000000000000000000000000000000000".to_string(), TRUNCATED.to_string()];
        assert_matches!(
            validate_enabled_precompiles(&addresses),
            Err(ParamsError::InvalidAddress { .. })
        );
    }

    proptest! {
        #[test]
        fn sorted_deduped_lists_always_validate(
            raw in proptest::collection::vec(any::<[u8; 20]>(), 0..8)
        ) {
            let mut decoded: Vec<Address> = raw.into_iter().map(Address::from).collect();
            decoded.sort_unstable();
            decoded.dedup();

            let addresses: Vec<String> =
                decoded.iter().map(|address| address.to_string()).collect();
            prop_assert!(validate_enabled_precompiles(&addresses).is_ok());
        }
    }
}
