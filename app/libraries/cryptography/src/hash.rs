use bcrypt::{BcryptError, DEFAULT_COST};

pub fn hash(password: &str) -> Result<String, BcryptError> {
    bcrypt::hash(password, DEFAULT_COST)
}

pub fn verify(password: &str, hashed: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(password, hashed)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn check_hash_and_verify() {
        let hashed = hash("admin123").unwrap();
        assert!(verify("admin123", &hashed).unwrap());
        assert!(!verify("wrong-password", &hashed).unwrap());
    }
}
