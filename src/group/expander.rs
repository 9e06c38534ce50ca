//! RFC 9380 message expansion.
//!
//! An [`Expander`] turns a message and a domain-separation tag into an
//! arbitrary-length uniform byte string. Two constructions are provided:
//! [`ExpanderXmd`] over a Merkle–Damgård hash (`expand_message_xmd`,
//! RFC 9380 §5.3.1) and [`ExpanderXof`] over an extendable-output function
//! (`expand_message_xof`, §5.3.2).

use alloc::vec;
use alloc::vec::Vec;
use core::marker::PhantomData;

use digest::crypto_common::BlockSizeUser;
use digest::{Digest, ExtendableOutput, Update, XofReader};
use sha3::{Shake128, Shake256};

use crate::error::{Error, Result};

/// Prefix prepended when hashing an oversized domain-separation tag.
const OVERSIZE_DST_SALT: &[u8] = b"H2C-OVERSIZE-DST-";

/// Longest domain-separation tag that is used verbatim.
const MAX_DST_LENGTH: usize = 255;

/// Longest output a single expansion may produce.
const MAX_EXPAND_LENGTH: usize = 65535;

/// Produces uniform bytes from a message under a fixed domain-separation
/// tag.
pub trait Expander {
    /// Expands `msg` into `len` uniform bytes.
    ///
    /// Fails with [`Error::InvalidLength`] when `len` exceeds the RFC 9380
    /// limits; this signals a programming error at the call site, not bad
    /// input data.
    fn expand(&self, msg: &[u8], len: usize) -> Result<Vec<u8>>;
}

/// `expand_message_xmd` over the Merkle–Damgård hash `H`.
pub struct ExpanderXmd<H: Digest + BlockSizeUser> {
    dst: Vec<u8>,
    _hash: PhantomData<H>,
}

impl<H: Digest + BlockSizeUser> ExpanderXmd<H> {
    /// Creates an expander for the domain-separation tag `dst`.
    ///
    /// Tags longer than 255 bytes are replaced by
    /// `H("H2C-OVERSIZE-DST-" ‖ dst)` as the RFC prescribes.
    pub fn new(dst: &[u8]) -> Self {
        let dst = if dst.len() > MAX_DST_LENGTH {
            H::new()
                .chain_update(OVERSIZE_DST_SALT)
                .chain_update(dst)
                .finalize()
                .to_vec()
        } else {
            dst.to_vec()
        };
        ExpanderXmd {
            dst,
            _hash: PhantomData,
        }
    }

    /// `dst ‖ I2OSP(len(dst), 1)`, fed after every block.
    fn dst_prime(&self) -> Vec<u8> {
        let mut out = self.dst.clone();
        out.push(self.dst.len() as u8);
        out
    }
}

impl<H: Digest + BlockSizeUser> Expander for ExpanderXmd<H> {
    fn expand(&self, msg: &[u8], len: usize) -> Result<Vec<u8>> {
        let h_size = <H as Digest>::output_size();
        let ell = (len + h_size - 1) / h_size;

        if len > MAX_EXPAND_LENGTH {
            return Err(Error::InvalidLength {
                context: "expand_message_xmd",
                expected: MAX_EXPAND_LENGTH,
                actual: len,
            });
        }
        if ell > 255 {
            return Err(Error::InvalidLength {
                context: "expand_message_xmd",
                expected: 255 * h_size,
                actual: len,
            });
        }

        let dst_prime = self.dst_prime();

        // b_0 = H(Z_pad || msg || I2OSP(len, 2) || I2OSP(0, 1) || dst_prime)
        let z_pad = vec![0u8; <H as BlockSizeUser>::block_size()];
        let b_0 = H::new()
            .chain_update(&z_pad)
            .chain_update(msg)
            .chain_update((len as u16).to_be_bytes())
            .chain_update([0u8])
            .chain_update(&dst_prime)
            .finalize();

        // b_1 = H(b_0 || I2OSP(1, 1) || dst_prime)
        let mut b_i = H::new()
            .chain_update(&b_0)
            .chain_update([1u8])
            .chain_update(&dst_prime)
            .finalize();

        let mut out = Vec::with_capacity(ell * h_size);
        out.extend_from_slice(&b_i);
        for i in 2..=ell {
            // b_i = H((b_0 xor b_{i-1}) || I2OSP(i, 1) || dst_prime)
            let mut feedback = b_0.clone();
            for (f, b) in feedback.iter_mut().zip(b_i.iter()) {
                *f ^= b;
            }
            b_i = H::new()
                .chain_update(&feedback)
                .chain_update([i as u8])
                .chain_update(&dst_prime)
                .finalize();
            out.extend_from_slice(&b_i);
        }

        out.truncate(len);
        Ok(out)
    }
}

/// Extendable-output functions usable with [`ExpanderXof`].
pub trait Xof: Default + Update + ExtendableOutput {
    /// Target security level in bits selected when the caller passes
    /// `k = 0`.
    const SECURITY_LEVEL: usize;
}

impl Xof for Shake128 {
    const SECURITY_LEVEL: usize = 128;
}

impl Xof for Shake256 {
    const SECURITY_LEVEL: usize = 256;
}

/// `expand_message_xof` over the extendable-output function `H`.
pub struct ExpanderXof<H: Xof> {
    dst: Vec<u8>,
    k: usize,
    _xof: PhantomData<H>,
}

impl<H: Xof> ExpanderXof<H> {
    /// Creates an expander for the domain-separation tag `dst` at security
    /// level `k` bits; `k = 0` selects the XOF's default level.
    pub fn new(k: usize, dst: &[u8]) -> Self {
        let k = if k == 0 { H::SECURITY_LEVEL } else { k };
        ExpanderXof {
            dst: dst.to_vec(),
            k,
            _xof: PhantomData,
        }
    }

    /// `dst ‖ I2OSP(len(dst), 1)`, with oversized tags first squeezed
    /// through the XOF to ⌈2k/8⌉ bytes.
    fn dst_prime(&self) -> Vec<u8> {
        let mut out = if self.dst.len() > MAX_DST_LENGTH {
            let mut hashed = vec![0u8; (2 * self.k + 7) / 8];
            let mut h = H::default();
            h.update(OVERSIZE_DST_SALT);
            h.update(&self.dst);
            h.finalize_xof().read(&mut hashed);
            hashed
        } else {
            self.dst.clone()
        };
        let len = out.len();
        out.push(len as u8);
        out
    }
}

impl<H: Xof> Expander for ExpanderXof<H> {
    fn expand(&self, msg: &[u8], len: usize) -> Result<Vec<u8>> {
        if len > MAX_EXPAND_LENGTH {
            return Err(Error::InvalidLength {
                context: "expand_message_xof",
                expected: MAX_EXPAND_LENGTH,
                actual: len,
            });
        }

        // H(msg || I2OSP(len, 2) || dst_prime), squeezed to len bytes.
        let mut h = H::default();
        h.update(msg);
        h.update(&(len as u16).to_be_bytes());
        h.update(&self.dst_prime());

        let mut out = vec![0u8; len];
        h.finalize_xof().read(&mut out);
        Ok(out)
    }
}
