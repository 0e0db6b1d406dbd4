//! Signer verification for price attestations.
//!
//! The signed message is the `keccak256` digest of the attestation's XDR
//! encoding. Verification runs in-contract so a bad signature surfaces as
//! `InvalidSignature` instead of trapping the host.

use ed25519_dalek::{Signature, VerifyingKey};
use oracle_common::OracleError;
use soroban_sdk::{xdr::ToXdr, BytesN, Env};

use crate::types::PriceAttestation;

pub fn attestation_digest(env: &Env, attestation: &PriceAttestation) -> BytesN<32> {
    let payload = attestation.clone().to_xdr(env);
    env.crypto().keccak256(&payload).into()
}

/// Checks `signature` is `signer`'s signature over `digest`.
pub fn verify(
    signer: &BytesN<32>,
    digest: &BytesN<32>,
    signature: &BytesN<64>,
) -> Result<(), OracleError> {
    let key =
        VerifyingKey::from_bytes(&signer.to_array()).map_err(|_| OracleError::InvalidSigner)?;
    let signature = Signature::from_bytes(&signature.to_array());

    key.verify_strict(&digest.to_array(), &signature)
        .map_err(|_| OracleError::InvalidSignature)
}
