//! KAT engine backed by the single-step KDF

use crate::suites::kat::error::{EngineError, Result};
use crate::suites::kat::model::{TestCase, TestGroup};
use crate::suites::kat::runner::KatEngine;
use sskdf_algorithms::kdf::single_step;
use sskdf_api::ResultExt;

/// Concrete type used by tests: one instance suffices for all suites.
pub struct SskdfEngine;

impl KatEngine for SskdfEngine {
    fn run(&self, group: &TestGroup, case: &TestCase) -> std::result::Result<(), String> {
        self.run_internal(group, case).map_err(|e| e.to_string())
    }
}

impl SskdfEngine {
    fn run_internal(&self, group: &TestGroup, case: &TestCase) -> Result<()> {
        if case.out_len_bits % 8 != 0 {
            return Err(EngineError::InvalidData(format!(
                "output length {} is not a whole number of bytes",
                case.out_len_bits
            )));
        }
        let z = sskdf_utils::hex_to_bytes(&case.z).with_context("z")?;
        let fixed_info = sskdf_utils::hex_to_bytes(&case.fixed_info).with_context("fixedInfo")?;

        let okm = single_step::derive_by_name(&group.hash_alg, &z, case.out_len_bits / 8, &fixed_info)?;

        let expected = case.dkm.as_deref().ok_or(EngineError::MissingField("dkm"))?;
        if hex::decode(expected)? != okm.as_slice() {
            return Err(EngineError::Mismatch {
                expected: expected.to_ascii_lowercase(),
                actual: sskdf_utils::bytes_to_hex(&okm),
            });
        }
        Ok(())
    }
}
