use blake2::digest::consts::U28;
use blake2::{Blake2b, Digest};
use std::fmt;

use crate::error::{CardanoError, Result};

/// Length of a Blake2b-224 key or script hash
pub const CREDENTIAL_HASH_LENGTH: usize = 28;

/// Whether a credential hash commits to a verification key or a script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    KeyHash,
    ScriptHash,
}

/// Payment or staking credential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Credential {
    KeyHash([u8; CREDENTIAL_HASH_LENGTH]),
    ScriptHash([u8; CREDENTIAL_HASH_LENGTH]),
}

impl Credential {
    /// Build a key-hash credential. `hash` must be exactly 28 bytes.
    pub fn key_hash(hash: &[u8]) -> Result<Self> {
        Self::new(CredentialKind::KeyHash, hash)
    }

    /// Build a script-hash credential. `hash` must be exactly 28 bytes.
    pub fn script_hash(hash: &[u8]) -> Result<Self> {
        Self::new(CredentialKind::ScriptHash, hash)
    }

    pub fn new(kind: CredentialKind, hash: &[u8]) -> Result<Self> {
        let hash: [u8; CREDENTIAL_HASH_LENGTH] =
            hash.try_into().map_err(|_| CardanoError::InvalidCredential {
                role: kind.role(),
                expected: CREDENTIAL_HASH_LENGTH,
                actual: hash.len(),
            })?;

        Ok(match kind {
            CredentialKind::KeyHash => Credential::KeyHash(hash),
            CredentialKind::ScriptHash => Credential::ScriptHash(hash),
        })
    }

    /// Parse a hex-encoded hash
    pub fn from_hex(kind: CredentialKind, hash: &str) -> Result<Self> {
        let bytes = hex::decode(hash)?;
        Self::new(kind, &bytes)
    }

    /// Key-hash credential for a public key, hashed with Blake2b-224.
    ///
    /// The key bytes are hashed as given; no curve validation happens here.
    pub fn from_public_key(pubkey: &[u8]) -> Self {
        Credential::KeyHash(hash_key(pubkey))
    }

    pub fn kind(&self) -> CredentialKind {
        match self {
            Credential::KeyHash(_) => CredentialKind::KeyHash,
            Credential::ScriptHash(_) => CredentialKind::ScriptHash,
        }
    }

    pub fn hash(&self) -> &[u8; CREDENTIAL_HASH_LENGTH] {
        match self {
            Credential::KeyHash(hash) | Credential::ScriptHash(hash) => hash,
        }
    }

    pub fn is_script(&self) -> bool {
        matches!(self, Credential::ScriptHash(_))
    }

    /// Header bit for this credential: 0 for key hash, 1 for script hash
    pub(crate) fn header_bit(&self) -> u8 {
        u8::from(self.is_script())
    }
}

impl CredentialKind {
    fn role(&self) -> &'static str {
        match self {
            CredentialKind::KeyHash => "key hash",
            CredentialKind::ScriptHash => "script hash",
        }
    }

    pub(crate) fn from_header_bit(bit: u8) -> Self {
        if bit & 0x01 == 1 {
            CredentialKind::ScriptHash
        } else {
            CredentialKind::KeyHash
        }
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.hash()))
    }
}

/// Hash a public key using Blake2b-224
pub fn hash_key(pubkey: &[u8]) -> [u8; CREDENTIAL_HASH_LENGTH] {
    let mut hasher = Blake2b::<U28>::new();
    hasher.update(pubkey);
    let result = hasher.finalize();

    let mut hash = [0u8; CREDENTIAL_HASH_LENGTH];
    hash.copy_from_slice(&result);
    hash
}
