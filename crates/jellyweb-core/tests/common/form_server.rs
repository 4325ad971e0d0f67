//! Minimal HTTP/1.1 server that records form POSTs for integration tests.
//!
//! Every request gets the same canned status and body, or with
//! [`start_redirecting`] a 302 to a landing path that then answers 200.
//! Captured requests (method, path, headers, body) are available through the
//! returned handle.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub struct FormServer {
    /// Base URL, e.g. "http://127.0.0.1:12345/".
    pub url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl FormServer {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread answering `status` with `body`.
/// The server runs until the process exits.
pub fn start(status: u16, body: &str) -> FormServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let body = body.to_string();
    let captured = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            if let Some(req) = read_request(&stream) {
                captured.lock().unwrap().push(req);
            }
            respond(stream, status, &[], &body);
        }
    });
    FormServer {
        url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

/// Starts a server that answers 302 with `Location: landing` for every path
/// except `landing`, which gets 200 with `body`.
pub fn start_redirecting(landing: &str, body: &str) -> FormServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let landing = landing.to_string();
    let body = body.to_string();
    let captured = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let path = match read_request(&stream) {
                Some(req) => {
                    let path = req.path.clone();
                    captured.lock().unwrap().push(req);
                    path
                }
                None => String::new(),
            };
            if path == landing {
                respond(stream, 200, &[], &body);
            } else {
                respond(stream, 302, &[("Location", landing.as_str())], "");
            }
        }
    });
    FormServer {
        url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

fn read_request(mut stream: &TcpStream) -> Option<CapturedRequest> {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            return None;
        }
        data.extend_from_slice(&buf[..n]);
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = std::str::from_utf8(&data[..header_end]).ok()?.to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|l| l.split_once(':'))
        .map(|(n, v)| (n.trim().to_string(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);
    let body_start = header_end + 4;
    while data.len() < body_start + content_length {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
    }
    let end = (body_start + content_length).min(data.len());
    let body = String::from_utf8_lossy(&data[body_start..end]).into_owned();

    Some(CapturedRequest {
        method,
        path,
        headers,
        body,
    })
}

fn respond(mut stream: TcpStream, status: u16, extra: &[(&str, &str)], body: &str) {
    let reason = match status {
        200..=299 => "OK",
        302 => "Found",
        _ => "Error",
    };
    let extra: String = extra
        .iter()
        .map(|(n, v)| format!("{}: {}\r\n", n, v))
        .collect();
    let response = format!(
        "HTTP/1.1 {} {}\r\n{}Content-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        extra,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}
