use std::fmt;

use pasta_curves::group::ff::Field;
use pasta_curves::group::{Group, GroupEncoding};
use pasta_curves::pallas;
use rand::RngCore;

#[derive(Clone, Debug)]
pub struct Keypair {
    pub secret: SecretKey,
    pub public: PublicKey,
}

impl Keypair {
    pub fn new(secret: SecretKey) -> Self {
        let public = PublicKey::from_secret(&secret);
        Self { secret, public }
    }

    pub fn random(mut rng: impl RngCore) -> Self {
        Self::new(SecretKey::random(&mut rng))
    }

    pub fn address(&self) -> Address {
        Address::from(self.public)
    }
}

#[derive(Clone, Debug)]
pub struct SecretKey(pallas::Scalar);

impl SecretKey {
    pub fn random(mut rng: impl RngCore) -> Self {
        Self(pallas::Scalar::random(&mut rng))
    }

    pub fn inner(&self) -> pallas::Scalar {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey(pallas::Point);

impl PublicKey {
    pub fn from_secret(secret: &SecretKey) -> Self {
        Self(pallas::Point::generator() * secret.0)
    }

    pub fn inner(&self) -> pallas::Point {
        self.0
    }
}

/// Compressed-point account address. Hashable, so it keys the account map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; 32]);

impl Address {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<PublicKey> for Address {
    fn from(public: PublicKey) -> Self {
        Self(public.0.to_bytes())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
