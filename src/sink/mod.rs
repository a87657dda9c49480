//! Record output
//!
//! The engine hands the sink one normalized record at a time, in decode
//! order, tagged with the owning stream's name. The sink makes no
//! durability or batching promises; the line protocol below is the
//! downstream consumer's surface.

use crate::error::Result;
use serde_json::{json, Value};
use std::io::Write;

/// Destination for extracted records and run metadata
pub trait RecordSink: Send {
    /// Announce a stream's declared schema before its first record
    fn write_schema(&mut self, stream: &str, schema: &Value) -> Result<()>;

    /// Emit one normalized record
    fn write_record(&mut self, stream: &str, record: &Value) -> Result<()>;

    /// Emit a state checkpoint
    fn write_state(&mut self, state: &Value) -> Result<()>;

    /// Flush any buffered output
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Line-oriented JSON sink: one message object per line
///
/// Message shapes:
/// - `{"type": "SCHEMA", "stream": ..., "schema": ...}`
/// - `{"type": "RECORD", "stream": ..., "record": ...}`
/// - `{"type": "STATE", "value": ...}`
pub struct JsonlSink<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> JsonlSink<W> {
    /// Create a sink writing to the given destination
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, message: &Value) -> Result<()> {
        serde_json::to_writer(&mut self.writer, message)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write + Send> RecordSink for JsonlSink<W> {
    fn write_schema(&mut self, stream: &str, schema: &Value) -> Result<()> {
        self.write_line(&json!({
            "type": "SCHEMA",
            "stream": stream,
            "schema": schema,
        }))
    }

    fn write_record(&mut self, stream: &str, record: &Value) -> Result<()> {
        self.write_line(&json!({
            "type": "RECORD",
            "stream": stream,
            "record": record,
        }))
    }

    fn write_state(&mut self, state: &Value) -> Result<()> {
        self.write_line(&json!({
            "type": "STATE",
            "value": state,
        }))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// In-memory sink for tests: captures every message in order
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Captured messages, in emission order
    pub messages: Vec<SinkMessage>,
}

/// One captured sink message
#[derive(Debug, Clone, PartialEq)]
pub enum SinkMessage {
    Schema { stream: String, schema: Value },
    Record { stream: String, record: Value },
    State { value: Value },
}

impl MemorySink {
    /// Create an empty capture sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Records captured for a stream, in order
    pub fn records_for(&self, stream: &str) -> Vec<&Value> {
        self.messages
            .iter()
            .filter_map(|message| match message {
                SinkMessage::Record { stream: s, record } if s == stream => Some(record),
                _ => None,
            })
            .collect()
    }
}

impl RecordSink for MemorySink {
    fn write_schema(&mut self, stream: &str, schema: &Value) -> Result<()> {
        self.messages.push(SinkMessage::Schema {
            stream: stream.to_string(),
            schema: schema.clone(),
        });
        Ok(())
    }

    fn write_record(&mut self, stream: &str, record: &Value) -> Result<()> {
        self.messages.push(SinkMessage::Record {
            stream: stream.to_string(),
            record: record.clone(),
        });
        Ok(())
    }

    fn write_state(&mut self, state: &Value) -> Result<()> {
        self.messages.push(SinkMessage::State {
            value: state.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_jsonl_sink_line_shapes() {
        let mut sink = JsonlSink::new(Vec::new());
        sink.write_schema("transactions", &json!({"type": "object"}))
            .unwrap();
        sink.write_record("transactions", &json!({"transaction_id": 1}))
            .unwrap();
        sink.write_state(&json!({"streams": {}})).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["type"], "SCHEMA");
        assert_eq!(lines[0]["stream"], "transactions");
        assert_eq!(lines[1]["type"], "RECORD");
        assert_eq!(lines[1]["record"]["transaction_id"], 1);
        assert_eq!(lines[2]["type"], "STATE");
    }

    #[test]
    fn test_memory_sink_captures_in_order() {
        let mut sink = MemorySink::new();
        sink.write_record("payments", &json!({"payment_id": 1})).unwrap();
        sink.write_record("skus", &json!({"sku": "A"})).unwrap();
        sink.write_record("payments", &json!({"payment_id": 2})).unwrap();

        let payments = sink.records_for("payments");
        assert_eq!(payments.len(), 2);
        assert_eq!(payments[0]["payment_id"], 1);
        assert_eq!(payments[1]["payment_id"], 2);
        assert_eq!(sink.records_for("skus").len(), 1);
    }
}
