pub use jsonwebtoken::Algorithm;
use jsonwebtoken::errors::Error;
pub use jsonwebtoken::errors::ErrorKind as JWTErrorKind;
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, TokenData, Validation, decode as jdec, encode as jenc,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: i64,
    pub iat: i64,
    pub id: String,
    pub name: String,
    pub email: String,
    pub session: u64,
}

/// Refresh-session record stored in Redis under `email:session`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub session: u64,
    pub token: String,
}

pub fn generate_token<T>(algorithm: Algorithm, key: &str, claims: T) -> Result<String, Error>
where
    T: Serialize,
{
    jenc(
        &Header::new(algorithm),
        &claims,
        &EncodingKey::from_secret(key.as_bytes()),
    )
}

pub fn validate_token<T>(
    algorithm: Algorithm,
    key: &str,
    token: &str,
) -> Result<TokenData<T>, Error>
where
    for<'a> T: Deserialize<'a>,
{
    let validation = Validation::new(algorithm);
    jdec::<T>(
        token,
        &DecodingKey::from_secret(key.as_bytes()),
        &validation,
    )
}

#[cfg(test)]
mod test {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    fn claims(exp: i64) -> Claims {
        Claims {
            exp,
            iat: 0,
            id: "6f7f9a54-0000-0000-0000-000000000000".to_owned(),
            name: "test".to_owned(),
            email: "test@unit".to_owned(),
            session: 1,
        }
    }

    #[test]
    fn check_roundtrip() {
        let token = generate_token(Algorithm::HS256, SECRET, claims(i64::MAX)).unwrap();
        let validated = validate_token::<Claims>(Algorithm::HS256, SECRET, &token).unwrap();
        assert_eq!(validated.claims.email, "test@unit");
        assert_eq!(validated.claims.session, 1);
    }

    #[test]
    fn check_expired_token_rejected() {
        let token = generate_token(Algorithm::HS256, SECRET, claims(0)).unwrap();
        let error = validate_token::<Claims>(Algorithm::HS256, SECRET, &token).err();
        assert_eq!(error.unwrap().kind(), &JWTErrorKind::ExpiredSignature);
    }

    #[test]
    fn check_wrong_key_rejected() {
        let token = generate_token(Algorithm::HS256, SECRET, claims(i64::MAX)).unwrap();
        assert!(validate_token::<Claims>(Algorithm::HS256, "other-key", &token).is_err());
    }
}
