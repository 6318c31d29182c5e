/*
[INPUT]:  Armored OpenPGP public key from the login response
[OUTPUT]: Armored ciphertext for secret request fields
[POS]:    Auth layer - client-side secret encryption
[UPDATE]: When the gateway key format or cipher preferences change
*/

use pgp::composed::{Deserializable, Message, SignedPublicKey, SignedPublicSubKey};
use pgp::crypto::sym::SymmetricKeyAlgorithm;

use crate::http::{Result, TraderError};

/// Encrypts secrets under the gateway's public key.
///
/// The login response carries an armored key whose primary key signs; the
/// encryption target is the subkey whose binding signature carries an
/// encryption key flag. Selection is by key order among flagged subkeys,
/// which is deterministic for a given key blob. A key without any
/// encryption-capable subkey is rejected outright so a session can never
/// be constructed around an unusable key.
#[derive(Debug, Clone)]
pub struct SecretEncryptor {
    subkey: SignedPublicSubKey,
}

impl SecretEncryptor {
    /// Parse an armored public key and select its encryption subkey.
    pub fn from_armored(armored: &str) -> Result<Self> {
        let (key, _headers) = SignedPublicKey::from_string(armored)?;
        let subkey = encryption_subkey(&key)
            .cloned()
            .ok_or_else(|| {
                TraderError::Key("no encryption-capable subkey in server key".to_string())
            })?;
        Ok(Self { subkey })
    }

    /// Encrypt a plaintext secret, returning an armored PGP message.
    ///
    /// Session keys are randomized, so two calls with the same plaintext
    /// yield different bytes; both decrypt to the same plaintext under the
    /// matching private key.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let mut rng = rand::thread_rng();
        let message = Message::new_literal("", plaintext);
        let encrypted =
            message.encrypt_to_keys(&mut rng, SymmetricKeyAlgorithm::AES256, &[&self.subkey])?;
        Ok(encrypted.to_armored_string(None.into())?)
    }
}

/// First subkey, in key order, whose binding signature allows encryption.
fn encryption_subkey(key: &SignedPublicKey) -> Option<&SignedPublicSubKey> {
    key.public_subkeys.iter().find(|subkey| {
        subkey.signatures.iter().any(|sig| {
            let flags = sig.key_flags();
            flags.encrypt_comms() || flags.encrypt_storage()
        })
    })
}
