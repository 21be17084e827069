//! Routes `tracing` events to the browser console.

use std::io;
use tracing::Level;
use wasm_bindgen::JsValue;

/// Buffers one formatted event and hands it to `console` when dropped.
#[derive(Default)]
pub(crate) struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }

        let value = JsValue::from_str(line);
        if line.starts_with("ERROR") {
            web_sys::console::error_1(&value);
        } else if line.starts_with(" WARN") || line.starts_with("WARN") {
            web_sys::console::warn_1(&value);
        } else {
            web_sys::console::log_1(&value);
        }
    }
}

fn max_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Installs the global subscriber. Safe to call more than once.
pub(crate) fn init() {
    // No wall clock in wasm32-unknown-unknown.
    let subscriber = tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::default)
        .with_max_level(max_level())
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
