//! Credentials for mirror clones and fetches
//!
//! AUR package bases are public, so plain HTTPS needs nothing. Mirrors cloned
//! over SSH (`ssh://aur@aur.archlinux.org/<base>.git`) use the SSH agent or a
//! key from `~/.ssh`; HTTPS remotes that ask for a password go through git's
//! credential helpers.

use git2::{Cred, CredentialType, Error, ErrorClass, ErrorCode, RemoteCallbacks};

const SSH_KEYS: &[&str] = &["id_ed25519", "id_ecdsa", "id_rsa"];

fn auth_failed(message: &str) -> Error {
    Error::new(ErrorCode::Auth, ErrorClass::Http, message)
}

fn ssh_key_credentials(username: &str) -> Result<Cred, Error> {
    if let Ok(cred) = Cred::ssh_key_from_agent(username) {
        return Ok(cred);
    }

    let ssh_dir = dirs::home_dir().unwrap_or_default().join(".ssh");
    SSH_KEYS
        .iter()
        .map(|key| (ssh_dir.join(key), ssh_dir.join(format!("{key}.pub"))))
        .filter(|(private_key, _)| private_key.exists())
        .find_map(|(private_key, public_key)| {
            let public_key = public_key.exists().then_some(public_key.as_path());
            Cred::ssh_key(username, public_key, &private_key, None).ok()
        })
        .ok_or_else(|| auth_failed("no usable SSH key"))
}

fn helper_credentials(url: &str, username: Option<&str>) -> Result<Cred, Error> {
    let config = git2::Config::open_default()?;
    Cred::credential_helper(&config, url, username)
}

/// Install the credentials callback on `callbacks`
pub fn setup_auth_callbacks(callbacks: &mut RemoteCallbacks) {
    callbacks.credentials(|url, username_from_url, allowed_types| {
        if allowed_types.contains(CredentialType::DEFAULT) {
            return Cred::default();
        }

        if allowed_types.contains(CredentialType::SSH_KEY) {
            return ssh_key_credentials(username_from_url.unwrap_or("aur"));
        }

        if allowed_types.contains(CredentialType::USER_PASS_PLAINTEXT) {
            return helper_credentials(url, username_from_url);
        }

        Err(auth_failed("authentication failed"))
    });
}
