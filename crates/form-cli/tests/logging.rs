//! Log output of a session, captured through the CLI subscriber.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use form_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};
use form_core::FormSession;
use form_standards::FormVariant;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Buffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Buffer {
    type Writer = Buffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

// The global subscriber can be installed once per process, so everything
// lives in a single test.
#[test]
fn values_are_redacted_by_default() {
    let buffer = Buffer::default();
    let config = LogConfig::from_verbosity(2)
        .with_level(LevelFilter::DEBUG)
        .with_ansi(false)
        .with_format(LogFormat::Compact);
    init_logging_with_writer(&config, buffer.clone());

    let mut session = FormSession::from_variant(FormVariant::Registration).unwrap();
    session.set_value("password", "hunter22").unwrap();
    let _ = session.submit();

    let output = buffer.contents();
    assert!(output.contains("value changed"), "{output}");
    assert!(output.contains("[REDACTED]"), "{output}");
    assert!(!output.contains("hunter22"), "{output}");
    assert!(output.contains("form has errors"), "{output}");
}
