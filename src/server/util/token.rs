use rand::Rng;

const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const USERNAME_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of the anti-forgery token issued at login.
pub const XSRF_TOKEN_LENGTH: usize = 32;

/// Random alphanumeric string drawn from the thread-local RNG.
pub fn random_token(length: usize) -> String {
    random_from(TOKEN_CHARSET, length)
}

/// Random lowercase username, as used by the seeder.
pub fn random_username(length: usize) -> String {
    random_from(USERNAME_CHARSET, length)
}

fn random_from(charset: &[u8], length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| charset[rng.random_range(0..charset.len())] as char)
        .collect()
}
