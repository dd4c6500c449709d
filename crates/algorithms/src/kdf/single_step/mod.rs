//! Single-step key derivation function
//!
//! This module implements the one-step KDF of NIST SP 800-56C Rev. 1,
//! section 4.1, in its hash-based form. For `i = 1..=reps`:
//!
//! ```text
//! K(i) = H(counter_i || Z || FixedInfo)
//! ```
//!
//! where `counter_i` is the 4-byte big-endian encoding of `i`, and the derived
//! keying material is the leftmost `L` bytes of `K(1) || ... || K(reps)`.
//! `reps` is `ceil(L / digest_length)` of the hash actually used.
//!
//! Every check (zero length, hash availability, counter overflow, input
//! size) runs before the first hash invocation, and before any output buffer
//! is allocated.

use sskdf_internal::constant_time::ct_eq;
use sskdf_internal::endian::u32_to_be_bytes;
use sskdf_params::hash::COUNTER_SIZE;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{validate, Error, Result};
use crate::hash::{table, HashAlgorithm};
use crate::kdf::{KdfOperation, KeyDerivationFunction, ParamProvider};

const CONTEXT: &str = "single-step KDF";

/// Output length used by [`SingleStepKdf::builder`] unless overridden
pub const DEFAULT_OUTPUT_SIZE: usize = 32;

/// Validated shape of one derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Plan {
    digest_len: usize,
    reps: u32,
}

fn plan(
    hash: HashAlgorithm,
    out_len: usize,
    secret_len: usize,
    fixed_info_len: usize,
) -> Result<Plan> {
    validate::parameter(out_len > 0, CONTEXT, "output length must be greater than zero")
        .inspect_err(|_| tracing::debug!(%hash, "rejecting zero-length output"))?;
    if !hash.is_available() {
        tracing::debug!(%hash, "hash family not compiled in");
        return Err(Error::unsupported_hash(hash.name()));
    }

    let digest_len = table::digest_length(hash)?;
    let reps = validate::counter_space(CONTEXT, out_len.div_ceil(digest_len))
        .inspect_err(|_| tracing::debug!(%hash, out_len, "output exceeds counter space"))?;

    if let Some(max_bytes) = hash.max_input_bytes() {
        let input_len = COUNTER_SIZE as u128 + secret_len as u128 + fixed_info_len as u128;
        if input_len > max_bytes {
            tracing::debug!(%hash, "hash input too long");
            return Err(Error::InputTooLarge {
                context: CONTEXT,
                max_bytes,
            });
        }
    }

    Ok(Plan { digest_len, reps })
}

fn fill(
    hash: HashAlgorithm,
    plan: Plan,
    secret: &[u8],
    fixed_info: &[u8],
    out: &mut [u8],
) -> Result<()> {
    let span = tracing::trace_span!("single_step_kdf", %hash, out_len = out.len(), reps = plan.reps);
    let _enter = span.enter();

    for (block, counter) in out.chunks_mut(plan.digest_len).zip(1u32..=plan.reps) {
        let counter_block = u32_to_be_bytes(counter);
        let digest = hash.digest_chunks(&[counter_block.as_slice(), secret, fixed_info])?;
        validate::length("hash digest", digest.len(), plan.digest_len)?;
        // the last block is shorter when L is not a multiple of the digest length
        block.copy_from_slice(&digest[..block.len()]);
    }
    Ok(())
}

/// Derive `out_length_bytes` bytes of keying material
///
/// # Arguments
/// * `hash` - Hash function `H`
/// * `shared_secret` - Shared secret `Z`
/// * `out_length_bytes` - `L`, must be greater than zero
/// * `fixed_info` - Context-binding `FixedInfo`, hashed verbatim after `Z`
///
/// # Errors
/// * `InvalidParameter` if `out_length_bytes` is zero
/// * `UnsupportedHash` if the hash family is not compiled in
/// * `OutputTooLarge` if more than `2^32 - 1` hash invocations would be needed
/// * `InputTooLarge` if `counter || Z || FixedInfo` exceeds the hash input limit
pub fn derive(
    hash: HashAlgorithm,
    shared_secret: &[u8],
    out_length_bytes: usize,
    fixed_info: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let plan = plan(hash, out_length_bytes, shared_secret.len(), fixed_info.len())?;
    let mut okm = Zeroizing::new(vec![0u8; out_length_bytes]);
    fill(hash, plan, shared_secret, fixed_info, &mut okm)?;
    Ok(okm)
}

/// Like [`derive`], naming the hash by a textual identifier such as
/// `"sha3-256"` or `"SHA-512/256"`
pub fn derive_by_name(
    hash: &str,
    shared_secret: &[u8],
    out_length_bytes: usize,
    fixed_info: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    derive(hash.parse()?, shared_secret, out_length_bytes, fixed_info)
}

/// Fill `out` with derived keying material; `L` is `out.len()`
///
/// On any error, including rejected parameters, `out` is left zeroed.
pub fn derive_into(
    hash: HashAlgorithm,
    shared_secret: &[u8],
    fixed_info: &[u8],
    out: &mut [u8],
) -> Result<()> {
    let result = plan(hash, out.len(), shared_secret.len(), fixed_info.len())
        .and_then(|plan| fill(hash, plan, shared_secret, fixed_info, out));
    zeroize_on_err(result, out)
}

fn zeroize_on_err<T>(result: Result<T>, out: &mut [u8]) -> Result<T> {
    result.inspect_err(|_| out.zeroize())
}

/// Derive exactly `N` bytes into an array
pub fn derive_array<const N: usize>(
    hash: HashAlgorithm,
    shared_secret: &[u8],
    fixed_info: &[u8],
) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    derive_into(hash, shared_secret, fixed_info, &mut out)?;
    Ok(out)
}

/// Re-derive `expected.len()` bytes and compare them with `expected` in
/// constant time
pub fn verify(
    hash: HashAlgorithm,
    shared_secret: &[u8],
    fixed_info: &[u8],
    expected: &[u8],
) -> Result<bool> {
    let okm = derive(hash, shared_secret, expected.len(), fixed_info)?;
    Ok(ct_eq(okm.as_slice(), expected))
}

/// Parameters for the single-step KDF
#[derive(Clone, Debug, Default, Zeroize)]
pub struct SingleStepParams {
    /// Hash function to derive with
    #[zeroize(skip)]
    pub hash: HashAlgorithm,
    /// Default fixed info, used when a call does not supply its own
    pub fixed_info: Option<Vec<u8>>,
}

/// Single-step KDF bound to a hash function and optional default fixed info
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct SingleStepKdf {
    params: SingleStepParams,
}

impl SingleStepKdf {
    /// Create a KDF over `hash` with no default fixed info
    pub fn for_hash(hash: HashAlgorithm) -> Self {
        Self::with_params(SingleStepParams {
            hash,
            fixed_info: None,
        })
    }

    /// The configured hash function
    pub fn hash(&self) -> HashAlgorithm {
        self.params.hash
    }

    /// Fill `out` with derived keying material
    pub fn derive_into(&self, secret: &[u8], fixed_info: Option<&[u8]>, out: &mut [u8]) -> Result<()> {
        derive_into(self.params.hash, secret, self.effective_fixed_info(fixed_info), out)
    }

    fn effective_fixed_info<'a>(&'a self, fixed_info: Option<&'a [u8]>) -> &'a [u8] {
        fixed_info
            .or(self.params.fixed_info.as_deref())
            .unwrap_or(&[])
    }
}

impl ParamProvider for SingleStepKdf {
    type Params = SingleStepParams;

    fn with_params(params: Self::Params) -> Self {
        Self { params }
    }

    fn params(&self) -> &Self::Params {
        &self.params
    }

    fn set_params(&mut self, params: Self::Params) {
        self.params = params;
    }
}

impl KeyDerivationFunction for SingleStepKdf {
    const ALGORITHM_ID: &'static str = "SSKDF";

    fn new() -> Self {
        Self::with_params(SingleStepParams::default())
    }

    fn name(&self) -> String {
        format!("{}-{}", Self::ALGORITHM_ID, self.params.hash)
    }

    fn derive_key(&self, secret: &[u8], fixed_info: Option<&[u8]>, length: usize) -> Result<Vec<u8>> {
        let mut okm = derive(
            self.params.hash,
            secret,
            length,
            self.effective_fixed_info(fixed_info),
        )?;
        Ok(core::mem::take(&mut *okm))
    }

    fn builder(&self) -> impl KdfOperation<'_> {
        SingleStepOperation {
            kdf: self,
            secret: None,
            fixed_info: None,
            length: DEFAULT_OUTPUT_SIZE,
        }
    }
}

/// Builder for a single derivation with a [`SingleStepKdf`]
pub struct SingleStepOperation<'a> {
    kdf: &'a SingleStepKdf,
    secret: Option<&'a [u8]>,
    fixed_info: Option<&'a [u8]>,
    length: usize,
}

impl<'a> SingleStepOperation<'a> {
    fn secret(&self) -> Result<&'a [u8]> {
        self.secret
            .ok_or_else(|| Error::param(CONTEXT, "shared secret is required"))
    }
}

impl<'a> KdfOperation<'a> for SingleStepOperation<'a> {
    fn with_secret(mut self, secret: &'a [u8]) -> Self {
        self.secret = Some(secret);
        self
    }

    fn with_fixed_info(mut self, fixed_info: &'a [u8]) -> Self {
        self.fixed_info = Some(fixed_info);
        self
    }

    fn with_output_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    fn derive(self) -> Result<Vec<u8>> {
        let secret = self.secret()?;
        self.kdf.derive_key(secret, self.fixed_info, self.length)
    }

    fn derive_array<const N: usize>(self) -> Result<[u8; N]> {
        validate::length("single-step KDF output", self.length, N)?;
        let secret = self.secret()?;
        derive_array(
            self.kdf.params.hash,
            secret,
            self.kdf.effective_fixed_info(self.fixed_info),
        )
    }
}
