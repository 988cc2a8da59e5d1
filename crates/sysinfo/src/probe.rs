//! Low-level probe helpers: trimmed file reads and bounded subprocess
//! queries. Failures are logged at debug level and surface as `None`.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Upper bound on any single external command.
const COMMAND_TIMEOUT: Duration = Duration::from_secs(2);

/// Poll interval while waiting for a child to exit.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Read a file and return its contents with outer whitespace trimmed.
pub(crate) fn read_trimmed(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(contents) => Some(contents.trim().to_string()),
        Err(err) => {
            log::debug!("cannot read {}: {err}", path.display());
            None
        }
    }
}

/// Run an external command and return its trimmed stdout.
///
/// `None` covers every failure mode: the binary is missing, the command
/// exits nonzero, or it outlives [`COMMAND_TIMEOUT`] and gets killed.
pub(crate) fn run_command(program: &str, args: &[&str]) -> Option<String> {
    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(err) => {
            log::debug!("cannot spawn {program}: {err}");
            return None;
        }
    };

    // Drain stdout on a separate thread so a chatty child never blocks on a
    // full pipe while we poll for its exit.
    let stdout = child.stdout.take();
    let drain = thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut stdout) = stdout {
            let _ = stdout.read_to_end(&mut buf);
        }
        buf
    });

    let status = match wait_with_deadline(&mut child, program) {
        Some(status) => status,
        None => {
            let _ = drain.join();
            return None;
        }
    };

    let bytes = drain.join().unwrap_or_default();
    if !status.success() {
        log::debug!("{program} exited with {status}");
        return None;
    }
    Some(String::from_utf8_lossy(&bytes).trim().to_string())
}

/// Poll until the child exits or the deadline passes. `None` means the
/// child had to be killed.
fn wait_with_deadline(child: &mut Child, program: &str) -> Option<ExitStatus> {
    let deadline = Instant::now() + COMMAND_TIMEOUT;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Some(status),
            Ok(None) => {
                if Instant::now() >= deadline {
                    log::debug!("{program} timed out, killing");
                    let _ = child.kill();
                    let _ = child.wait();
                    return None;
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(err) => {
                log::debug!("wait on {program} failed: {err}");
                let _ = child.kill();
                let _ = child.wait();
                return None;
            }
        }
    }
}
