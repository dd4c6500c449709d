//! Pure data model for known-answer vectors in the ACVP KDA OneStep layout.
//! No dependency on the rest of the framework.

use serde::Deserialize;

/// ----------------------------------------------------------------
/// 1. Leaf-level test case
/// ----------------------------------------------------------------
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(rename = "tcId")]
    pub test_id: u64,
    /// Shared secret, hex
    pub z: String,
    /// Fixed info, hex
    #[serde(default)]
    pub fixed_info: String,
    /// Requested output length in bits
    #[serde(rename = "l")]
    pub out_len_bits: usize,
    /// Expected derived keying material, hex
    #[serde(default)]
    pub dkm: Option<String>,
    #[serde(default = "default_expected_result")]
    pub expected_result: String, // valid / invalid
    #[serde(default)]
    pub error_contains: Option<String>,
}

fn default_expected_result() -> String {
    "valid".into()
}

/// ----------------------------------------------------------------
/// 2. Groups share a hash function
/// ----------------------------------------------------------------
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGroup {
    #[serde(rename = "tgId")]
    pub group_id: u64,
    pub test_type: String, // AFT / VAL
    pub hash_alg: String,
    pub tests: Vec<TestCase>,
}

/// ----------------------------------------------------------------
/// 3. Whole suite (file)
/// ----------------------------------------------------------------
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuite {
    #[serde(rename = "vsId")]
    pub suite_id: u64,
    pub algorithm: String,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub revision: Option<String>,
    #[serde(rename = "testGroups")]
    pub groups: Vec<TestGroup>,
}

impl TestSuite {
    /// Number of test cases across all groups
    pub fn case_count(&self) -> usize {
        self.groups.iter().map(|g| g.tests.len()).sum()
    }
}
