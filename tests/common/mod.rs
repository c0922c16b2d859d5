//! Shared fixtures for integration tests.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Anvil's first well-known account key; test material only.
#[allow(dead_code)]
pub const TEST_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Write a config file into `dir` and return its path.
#[allow(dead_code)]
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("deployer.toml");
    fs::write(&path, contents).unwrap();
    path
}

/// Start a mock JSON-RPC node that answers the read methods a deployment
/// issues and rejects the creation transaction at submission. Counts
/// `eth_gasPrice` requests in `gas_price_calls`.
#[allow(dead_code)]
pub async fn start_mock_rpc(addr: SocketAddr, gas_price_calls: Arc<AtomicU32>) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let counter = gas_price_calls.clone();
                    tokio::spawn(async move {
                        if let Some(request) = read_http_request(&mut socket).await {
                            let body = rpc_response(&request, &counter).to_string();
                            let response = format!(
                                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                                body.len(),
                                body
                            );
                            let _ = socket.write_all(response.as_bytes()).await;
                            let _ = socket.shutdown().await;
                        }
                    });
                }
                Err(_) => break,
            }
        }
    });
}

async fn read_http_request(socket: &mut tokio::net::TcpStream) -> Option<serde_json::Value> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..pos]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);

            let body_start = pos + 4;
            if buf.len() >= body_start + content_length {
                return serde_json::from_slice(&buf[body_start..body_start + content_length])
                    .ok();
            }
        }
    }
}

fn rpc_response(request: &serde_json::Value, gas_price_calls: &AtomicU32) -> serde_json::Value {
    let id = request["id"].clone();
    let method = request["method"].as_str().unwrap_or_default();

    let result = match method {
        // Anvil's chain id.
        "eth_chainId" => "0x7a69",
        // One ether.
        "eth_getBalance" => "0xde0b6b3a7640000",
        "eth_gasPrice" => {
            gas_price_calls.fetch_add(1, Ordering::SeqCst);
            // One gwei.
            "0x3b9aca00"
        }
        "eth_getTransactionCount" => "0x0",
        "eth_estimateGas" => "0x5208",
        "eth_sendRawTransaction" => {
            return serde_json::json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": -32000, "message": "submission rejected" }
            });
        }
        _ => {
            return serde_json::json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": -32601, "message": "method not found" }
            });
        }
    };

    serde_json::json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

/// Write a Hardhat-layout artifact (`<dir>/contracts/<Name>.sol/<Name>.json`).
#[allow(dead_code)]
pub fn write_hardhat_artifact(artifacts_dir: &Path, name: &str, bytecode: &str) {
    let contract_dir = artifacts_dir.join("contracts").join(format!("{name}.sol"));
    fs::create_dir_all(&contract_dir).unwrap();
    let json = format!(
        r#"{{"contractName":"{name}","abi":[],"bytecode":"{bytecode}","deployedBytecode":"{bytecode}"}}"#
    );
    fs::write(contract_dir.join(format!("{name}.json")), json).unwrap();
}
