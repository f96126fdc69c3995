//! Password hashing. Credentials are stored as bcrypt hashes, never
//! plaintext; comparison goes through `verify`.

use bcrypt::DEFAULT_COST;

pub fn hash(plaintext: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plaintext, DEFAULT_COST)
}

pub fn verify(plaintext: &str, hashed: &str) -> bool {
    bcrypt::verify(plaintext, hashed).unwrap_or(false)
}
