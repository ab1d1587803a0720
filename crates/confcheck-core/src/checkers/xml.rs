//! XML syntax checking via quick-xml
//!
//! quick-xml is an event puller, not a document validator, so the checker
//! drives the event stream itself: parser errors (mismatched or stray end
//! tags, malformed markup) fail directly, and the end-of-stream state must
//! show one root element with every open tag closed.

use quick_xml::Reader;
use quick_xml::events::Event;

use super::{CheckOutcome, SyntaxChecker};

pub struct XmlChecker;

impl SyntaxChecker for XmlChecker {
    fn check(&self, bytes: &[u8]) -> CheckOutcome {
        let mut reader = Reader::from_reader(bytes);
        let mut buf = Vec::new();
        let mut depth = 0usize;
        let mut saw_element = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(_)) => {
                    depth += 1;
                    saw_element = true;
                }
                Ok(Event::End(_)) => depth = depth.saturating_sub(1),
                Ok(Event::Empty(_)) => saw_element = true,
                Ok(Event::Eof) => {
                    if depth > 0 {
                        return CheckOutcome::invalid("unexpected end of file: unclosed element");
                    }
                    if !saw_element {
                        return CheckOutcome::invalid("missing root element");
                    }
                    return CheckOutcome::Valid;
                }
                Ok(_) => {}
                Err(e) => return CheckOutcome::invalid(e.to_string()),
            }
            buf.clear();
        }
    }
}
