//! Common test utilities for aur integration tests

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread::{self, JoinHandle};

use assert_cmd::Command;

/// The aur binary with its environment pointed at `cache_dir` and away from the real AUR
#[allow(deprecated)]
pub fn aur_cmd(cache_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("aur").unwrap();
    cmd.env("AUR_CACHE_DIR", cache_dir)
        .env("AUR_RPC_URL", "http://127.0.0.1:9/rpc/v5")
        .env("AUR_GIT_URL", "http://127.0.0.1:9")
        .env_remove("AUR_LOG")
        .env_remove("AUR_DB")
        .env("NO_COLOR", "1");
    cmd
}

/// Fake RPC server answering a single request with `body`
///
/// Returns the RPC base URL and a handle yielding the request line.
pub fn rpc_server(body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        write!(
            stream,
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (format!("http://{addr}/rpc/v5"), handle)
}
